use anyhow::Result;
use std::time::Duration;
use tracing::{error, info};

use crate::core::pipeline::GenerationPipeline;
use crate::encoder::QrEncoder;
use crate::share::SystemShare;
use crate::utils::preview::render_preview;

pub struct App {
    url: String,
    size: u32,
    enable_preview: bool,
    enable_share: bool,
    loading_delay: Duration,
}

impl App {
    pub fn new(
        url: String,
        size: u32,
        enable_preview: bool,
        enable_share: bool,
        loading_delay: Duration,
    ) -> Self {
        Self {
            url,
            size,
            enable_preview,
            enable_share,
            loading_delay,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let mut pipeline = GenerationPipeline::new(QrEncoder::new(), self.size)
            .with_loading_delay(self.loading_delay);

        info!("Generating QR code for: {}", self.url);
        let artifact = pipeline.submit(&self.url).await?.clone();

        println!(
            "Generated {} ({}x{}, {})",
            artifact.file_name(),
            artifact.width(),
            artifact.height(),
            artifact.size_human()
        );

        // Display terminal preview if enabled
        if self.enable_preview {
            match render_preview(&self.url) {
                Ok(preview) => println!("{}", preview),
                Err(e) => error!("Failed to render preview: {}", e),
            }
        }

        // Hand the image to the host if enabled
        if self.enable_share {
            let adapter = SystemShare::new();
            pipeline.share(&adapter)?;
            info!("Shared {}", artifact.file_name());
        }

        Ok(())
    }
}
