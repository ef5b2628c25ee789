use clap::Parser;
use kiosk_common::KioskAppContext;
use kiosk_error::{KioskError, KioskResult};
use kiosk_models::constants::DEFAULT_CONFIG_FILE_NAME;
use kiosk_storage::KioskDbManager;
use kiosk_web::KioskWebServer;
use std::{env::current_dir, path::PathBuf};

/// Kiosk - queue system customization service
///
/// Serves the admin pages used to customize the touch screen, the display
/// screen, tickets, media and the slideshow of a queue kiosk.
#[derive(Parser)]
#[command(name = "kiosk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Kiosk customization service", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, the service looks for 'kiosk.toml'
    /// in the current working directory.
    #[arg(short, long, env = "KIOSK_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> KioskResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| KioskError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    KioskAppContext::init::<KioskDbManager, KioskWebServer>(
        config_path.to_string_lossy().to_string(),
    )
    .await?;

    let ctx = KioskAppContext::instance().await?;
    ctx.run().await
}
