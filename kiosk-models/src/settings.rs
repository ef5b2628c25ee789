use config::{Config, File};
use kiosk_error::KioskResult;
use serde::{self, Deserialize};
use std::{ops::Deref, sync::Arc};
use sysinfo::System;

use crate::constants::{DATA_DIR, ENV_PREFIX, UPLOAD_DIR};

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self(Arc::new(Inner::default()))
    }
}

impl Settings {
    pub fn new(config_path: String) -> KioskResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path.as_str()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("display.tts_languages"),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }

    /// Wrap already-built settings, mainly for tests.
    pub fn from_inner(inner: Inner) -> Self {
        Self(Arc::new(inner))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inner {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub web: Web,
    #[serde(default)]
    pub db: Db,
    #[serde(default)]
    pub media: Media,
    #[serde(default)]
    pub display: Display,
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    /// Runtime root directory; relative paths such as `./data` and `./logs`
    /// are resolved from here.
    ///
    /// Override with `KIOSK__GENERAL__RUNTIME_DIR=/var/lib/kiosk`.
    #[serde(default = "General::runtime_dir_default")]
    pub runtime_dir: String,
    /// `error`, `warn`, `info`, `debug` or `trace`. Unset means `debug` in
    /// debug builds and `info` otherwise.
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for General {
    fn default() -> Self {
        General {
            runtime_dir: General::runtime_dir_default(),
            log_level: None,
        }
    }
}

impl General {
    fn runtime_dir_default() -> String {
        ".".into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    #[serde(default = "Web::host_default")]
    pub host: String,
    #[serde(default = "Web::port_default")]
    pub port: u16,
    #[serde(default = "Web::workers_default")]
    pub workers: i32,
}

impl Default for Web {
    fn default() -> Self {
        Web {
            host: Web::host_default(),
            port: Web::port_default(),
            workers: Web::workers_default(),
        }
    }
}

impl Web {
    fn host_default() -> String {
        "0.0.0.0".into()
    }

    fn port_default() -> u16 {
        5000
    }

    fn workers_default() -> i32 {
        0 // one per cpu
    }

    /// Get actual number of workers based on configuration
    pub fn get_worker_count(&self) -> usize {
        match self.workers {
            0 => System::new_all().cpus().len().max(1),
            n if n > 0 => n as usize,
            n => std::cmp::max(
                1,
                (System::new_all().cpus().len() as i32 / n.abs()) as usize,
            ),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Db {
    #[serde(default)]
    pub sqlite: Sqlite,
}

/// Connection parameters of a SQL backend.
pub trait KioskDbConfig: Send + Sync {
    /// Database file path.
    fn db_path(&self) -> String;

    /// URL handed to the connection pool.
    fn to_url(&self) -> String;

    /// Directory containing the database file.
    fn db_dir(&self) -> String;
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sqlite {
    /// Directory holding the database file.
    #[serde(default = "Sqlite::dir_default")]
    pub dir: String,
    #[serde(default = "Sqlite::path_default")]
    pub path: String,
    #[serde(default = "Sqlite::timeout_default")]
    pub timeout: u64,
    #[serde(default = "Sqlite::idle_timeout_default")]
    pub idle_timeout: u64,
    #[serde(default = "Sqlite::max_lifetime_default")]
    pub max_lifetime: u64,
    #[serde(default = "Sqlite::max_connections_default")]
    pub max_connections: u32,
    #[serde(default = "Sqlite::auto_create_default")]
    pub auto_create: bool,
}

impl Default for Sqlite {
    fn default() -> Self {
        Sqlite {
            dir: Sqlite::dir_default(),
            path: Sqlite::path_default(),
            timeout: Sqlite::timeout_default(),
            idle_timeout: Sqlite::idle_timeout_default(),
            max_lifetime: Sqlite::max_lifetime_default(),
            max_connections: Sqlite::max_connections_default(),
            auto_create: Sqlite::auto_create_default(),
        }
    }
}

impl KioskDbConfig for Sqlite {
    fn db_path(&self) -> String {
        format!("{}/{}", self.dir, self.path)
    }

    fn to_url(&self) -> String {
        if self.auto_create {
            // mode=rwc creates the file when missing
            format!("sqlite:{}?mode=rwc", self.db_path())
        } else {
            format!("sqlite:{}", self.db_path())
        }
    }

    fn db_dir(&self) -> String {
        self.dir.clone()
    }
}

impl Sqlite {
    fn dir_default() -> String {
        DATA_DIR.into()
    }

    fn path_default() -> String {
        "kiosk.db".into()
    }

    fn timeout_default() -> u64 {
        5000
    }

    fn idle_timeout_default() -> u64 {
        5000
    }

    fn max_lifetime_default() -> u64 {
        5000
    }

    fn max_connections_default() -> u32 {
        10
    }

    fn auto_create_default() -> bool {
        true
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Media {
    /// Directory uploaded files are written to.
    #[serde(default = "Media::upload_dir_default")]
    pub upload_dir: String,
    /// Uploads larger than this are rejected.
    #[serde(default = "Media::max_upload_bytes_default")]
    pub max_upload_bytes: usize,
}

impl Default for Media {
    fn default() -> Self {
        Media {
            upload_dir: Media::upload_dir_default(),
            max_upload_bytes: Media::max_upload_bytes_default(),
        }
    }
}

impl Media {
    fn upload_dir_default() -> String {
        UPLOAD_DIR.into()
    }

    fn max_upload_bytes_default() -> usize {
        200 * 1024 * 1024
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Display {
    /// Languages offered as `check<lang>` announcement checkboxes.
    #[serde(default = "Display::tts_languages_default")]
    pub tts_languages: Vec<String>,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            tts_languages: Display::tts_languages_default(),
        }
    }
}

impl Display {
    fn tts_languages_default() -> Vec<String> {
        ["en-us", "en-uk", "fr", "it", "es", "ar", "de"]
            .into_iter()
            .map(String::from)
            .collect()
    }
}
