use crate::core::error::EncodeError;
use crate::core::models::Artifact;
use async_trait::async_trait;
use image::{DynamicImage, GrayImage, ImageOutputFormat, Luma};
use qrcode::{Color, QrCode};
use std::io::Cursor;
use tracing::debug;

/// File name every generated artifact carries.
pub const ARTIFACT_FILE_NAME: &str = "qr-code.png";

/// MIME type every generated artifact carries.
pub const ARTIFACT_MIME_TYPE: &str = "image/png";

// Largest square edge the renderer will rasterize; larger requests are
// capped before the canvas is allocated.
const MAX_TARGET: u32 = 4096;

/// A service that renders text into an image artifact.
///
/// Implementations must be deterministic: the same text and dimensions
/// always produce the same bytes.
#[async_trait]
pub trait EncodingService: Send + Sync {
    async fn encode(&self, text: &str, width: u32, height: u32) -> Result<Artifact, EncodeError>;
}

/// Local QR encoder producing monochrome PNG output.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrEncoder;

impl QrEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Render `text` as a QR grid stamped onto a grayscale canvas.
    ///
    /// Each module becomes a `scale x scale` block, where the scale is the
    /// largest whole number of pixels that keeps the image within `target`.
    /// Grids wider than `target` still get one pixel per module, so the
    /// result can exceed the requested size but never loses a module.
    fn render_png(text: &str, target: u32) -> Result<(Vec<u8>, u32), EncodeError> {
        let code = QrCode::new(text.as_bytes())?;
        let colors = code.to_colors();
        let modules = code.width() as u32;
        let scale = (target / modules).max(1);
        let side = modules * scale;

        let mut canvas = GrayImage::from_pixel(side, side, Luma([255u8]));
        for (index, color) in colors.iter().enumerate() {
            if *color == Color::Dark {
                let x0 = (index as u32 % modules) * scale;
                let y0 = (index as u32 / modules) * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        canvas.put_pixel(x0 + dx, y0 + dy, Luma([0u8]));
                    }
                }
            }
        }

        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageLuma8(canvas).write_to(&mut buffer, ImageOutputFormat::Png)?;

        debug!("Rendered {} modules at scale {} ({}px)", modules, scale, side);
        Ok((buffer.into_inner(), side))
    }
}

#[async_trait]
impl EncodingService for QrEncoder {
    async fn encode(&self, text: &str, width: u32, height: u32) -> Result<Artifact, EncodeError> {
        let target = width.min(height).clamp(1, MAX_TARGET);
        let (png, side) = Self::render_png(text, target)?;

        Ok(Artifact::new(
            ARTIFACT_FILE_NAME,
            ARTIFACT_MIME_TYPE,
            png,
            side,
            side,
        ))
    }
}
