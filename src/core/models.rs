use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use humansize::{format_size, BINARY};

use crate::core::error::PipelineError;

/// Monotonically increasing tag attached to every issued generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated locator handed to the encoding service. Immutable once issued.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    id: RequestId,
    locator: String,
}

impl GenerationRequest {
    pub(crate) fn new(id: RequestId, locator: impl Into<String>) -> Self {
        Self {
            id,
            locator: locator.into(),
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }
}

/// An encoded image produced by the encoding service; clones share the
/// backing payload instead of copying it.
#[derive(Debug, Clone)]
pub struct Artifact {
    file_name: String,
    mime_type: String,
    data: Arc<[u8]>,
    width: u32,
    height: u32,
    created_at: DateTime<Utc>,
}

impl Artifact {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        data: Vec<u8>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data: Arc::from(data),
            width,
            height,
            created_at: Utc::now(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size_human(&self) -> String {
        format_size(self.len() as u64, BINARY)
    }
}

/// The user-visible lifecycle of the generation pipeline.
#[derive(Debug, Clone)]
pub enum PipelineState {
    Idle,
    Loading,
    Ready(Artifact),
    Failed(PipelineError),
}

impl PipelineState {
    pub fn is_idle(&self) -> bool {
        matches!(self, PipelineState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PipelineState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PipelineState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PipelineState::Failed(_))
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        match self {
            PipelineState::Ready(artifact) => Some(artifact),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PipelineError> {
        match self {
            PipelineState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Short tag for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::Loading => "loading",
            PipelineState::Ready(_) => "ready",
            PipelineState::Failed(_) => "failed",
        }
    }
}
