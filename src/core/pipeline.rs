use crate::core::error::{EncodeError, PipelineError, ShareError};
use crate::core::models::{Artifact, GenerationRequest, PipelineState, RequestId};
use crate::encoder::EncodingService;
use crate::share::ShareAdapter;
use crate::utils::url::validate_url;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Drives locator submissions through validation, encoding, and exposure.
/// Only the outcome of the most recently issued request may change the state.
pub struct GenerationPipeline<E> {
    encoder: E,
    size: u32,
    loading_delay: Option<Duration>,
    state: PipelineState,
    artifact: Option<Artifact>,
    request_counter: u64,
}

impl<E: EncodingService> GenerationPipeline<E> {
    pub fn new(encoder: E, size: u32) -> Self {
        Self {
            encoder,
            size,
            loading_delay: None,
            state: PipelineState::Idle,
            artifact: None,
            request_counter: 0,
        }
    }

    /// Hold the loading state for at least `delay` before encoding starts.
    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = if delay.is_zero() { None } else { Some(delay) };
        self
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Most recently generated artifact; survives a rejected submission.
    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    /// Validate `input` and open a new request. An invalid locator fails the
    /// pipeline without allocating a request id or touching the artifact.
    pub fn begin(&mut self, input: &str) -> Result<GenerationRequest, PipelineError> {
        if !validate_url(input) {
            warn!("Rejected invalid locator");
            self.state = PipelineState::Failed(PipelineError::InvalidInput);
            return Err(PipelineError::InvalidInput);
        }

        self.request_counter += 1;
        let request = GenerationRequest::new(RequestId::new(self.request_counter), input);
        info!("Accepted locator, request {} in flight", request.id());
        self.state = PipelineState::Loading;
        Ok(request)
    }

    /// Apply the outcome of request `id`, unless it is a stale or duplicate
    /// delivery. Returns whether the outcome was applied.
    pub fn finish(&mut self, id: RequestId, outcome: Result<Artifact, EncodeError>) -> bool {
        if id != RequestId::new(self.request_counter) || !self.state.is_loading() {
            debug!(
                "Discarding outcome for request {} (state: {})",
                id,
                self.state.name()
            );
            return false;
        }

        match outcome {
            Ok(artifact) => {
                info!(
                    "Artifact ready: {} ({})",
                    artifact.file_name(),
                    artifact.size_human()
                );
                self.artifact = Some(artifact.clone());
                self.state = PipelineState::Ready(artifact);
            }
            Err(cause) => {
                error!("Generation failed: {}", cause);
                self.artifact = None;
                self.state = PipelineState::Failed(PipelineError::GenerationFailure);
            }
        }
        true
    }

    /// Run one submission end to end: validate, encode, apply the outcome.
    pub async fn submit(&mut self, input: &str) -> Result<&Artifact, PipelineError> {
        let request = self.begin(input)?;

        if let Some(delay) = self.loading_delay {
            tokio::time::sleep(delay).await;
        }

        let outcome = self
            .encoder
            .encode(request.locator(), self.size, self.size)
            .await;
        self.finish(request.id(), outcome);

        match &self.state {
            PipelineState::Ready(artifact) => Ok(artifact),
            PipelineState::Failed(cause) => Err(cause.clone()),
            // finish() always applies the outcome of the request begin() just
            // opened, so loading cannot remain after it returns
            _ => Err(PipelineError::GenerationFailure),
        }
    }

    /// Hand the current artifact to a share adapter. The capability check
    /// runs before the share action.
    pub fn share(&self, adapter: &dyn ShareAdapter) -> Result<(), ShareError> {
        let artifact = match &self.state {
            PipelineState::Ready(artifact) => artifact,
            _ => return Err(ShareError::NotReady),
        };

        if !adapter.can_share(artifact) {
            return Err(ShareError::Unsupported);
        }
        adapter.share(artifact)
    }

    /// Return to idle, dropping the retained artifact. Request numbering is
    /// not restarted.
    pub fn reset(&mut self) {
        info!("Pipeline reset");
        self.state = PipelineState::Idle;
        self.artifact = None;
    }
}
