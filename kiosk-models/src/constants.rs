// Global constants shared by the kiosk crates

/// Configuration file loaded at startup when `--config` is not given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "kiosk.toml";

/// Environment prefix for configuration overrides, e.g. `KIOSK__WEB__PORT`.
pub const ENV_PREFIX: &str = "KIOSK";

pub const DATA_DIR: &str = "./data";
pub const UPLOAD_DIR: &str = "./data/uploads";
pub const LOG_DIR: &str = "./logs";

/// Primary key of every settings row.
pub const SINGLETON_ID: i32 = 1;
