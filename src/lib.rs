//! qrshare - Turn a URL into a scannable, shareable QR code image
//!
//! This crate validates a URL, renders it as a PNG QR code through an
//! encoding service, and hands the result to the host's share surface.

pub mod cli;
pub mod core;
pub mod encoder;
pub mod share;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::{
    config::AppConfig,
    error::{EncodeError, PipelineError, ShareError},
    models::{Artifact, GenerationRequest, PipelineState, RequestId},
    pipeline::GenerationPipeline,
};

pub use encoder::{EncodingService, QrEncoder, ARTIFACT_FILE_NAME, ARTIFACT_MIME_TYPE};
pub use share::{ShareAdapter, SystemShare};
pub use utils::url::validate_url;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
