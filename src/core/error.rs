use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("invalid URL")]
    InvalidInput,

    #[error("generation failed")]
    GenerationFailure,
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("QR encoding error: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("sharing is not supported on this host")]
    Unsupported,

    #[error("no generated image to share; submit a URL first")]
    NotReady,

    #[error("share failed: {0}")]
    Failed(#[from] std::io::Error),
}
