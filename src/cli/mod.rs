use anyhow::{bail, Result};
use clap::Parser;
use std::time::Duration;
use tracing::info;

use crate::core::app::App;
use crate::core::config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL to encode as a QR code
    url: Option<String>,

    /// Pixel size of the generated image
    #[arg(short, long)]
    size: Option<u32>,

    /// Disable the terminal preview
    #[arg(long)]
    no_preview: bool,

    /// Do not hand the image to the system handler
    #[arg(long)]
    no_share: bool,

    /// Generate example configuration file
    #[arg(long)]
    generate_config: bool,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        // Generate config file if requested
        if self.generate_config {
            AppConfig::save_example()?;
            println!("Generated example configuration file: qrshare.example.toml");
            return Ok(());
        }

        // Load configuration
        let mut config = AppConfig::load().unwrap_or_else(|e| {
            info!("Using default configuration ({})", e);
            AppConfig::default()
        });

        // Override config with CLI arguments
        if let Some(size) = self.size {
            config.encoder.size = size;
        }
        if self.no_preview {
            config.ui.preview = false;
        }
        if self.no_share {
            config.share.enabled = false;
        }

        let url = match &self.url {
            Some(url) => url.clone(),
            None => bail!("no URL provided; pass one as the first argument"),
        };

        // Create and run the application
        let app = App::new(
            url,
            config.encoder.size,
            config.ui.preview,
            config.share.enabled,
            Duration::from_millis(config.ui.loading_delay_ms),
        );

        app.run().await
    }
}
