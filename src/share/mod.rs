use crate::core::error::ShareError;
use crate::core::models::Artifact;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use uuid::Uuid;

/// Capability check plus share action, in that order.
///
/// `can_share` reports whether the host can act on the artifact at all, so
/// callers can surface "unsupported" without triggering side effects.
pub trait ShareAdapter: Send + Sync {
    fn can_share(&self, artifact: &Artifact) -> bool;

    fn share(&self, artifact: &Artifact) -> Result<(), ShareError>;
}

/// Shares by staging the artifact on disk and opening it with the host's
/// default handler for its type.
pub struct SystemShare {
    staging_dir: PathBuf,
}

impl SystemShare {
    pub fn new() -> Self {
        Self {
            staging_dir: env::temp_dir(),
        }
    }

    /// Stage files under `dir` instead of the system temp directory.
    pub fn with_staging_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            staging_dir: dir.into(),
        }
    }

    /// Write the artifact under a fresh unique directory so repeated shares
    /// never overwrite each other.
    fn stage(&self, artifact: &Artifact) -> Result<PathBuf, ShareError> {
        let dir = self.staging_dir.join(format!("qrshare-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir)?;

        let path = dir.join(artifact.file_name());
        fs::write(&path, artifact.data())?;
        debug!("Staged artifact at {}", path.display());
        Ok(path)
    }
}

impl Default for SystemShare {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareAdapter for SystemShare {
    fn can_share(&self, artifact: &Artifact) -> bool {
        !artifact.is_empty() && host_supports_open()
    }

    fn share(&self, artifact: &Artifact) -> Result<(), ShareError> {
        if !self.can_share(artifact) {
            return Err(ShareError::Unsupported);
        }

        let path = self.stage(artifact)?;
        open::that(&path)?;
        info!("Handed {} to the host handler", path.display());
        Ok(())
    }
}

/// Whether the host has a session capable of opening files. Headless Linux
/// machines report unsupported instead of failing mid-share.
#[cfg(target_os = "linux")]
fn host_supports_open() -> bool {
    env::var_os("DISPLAY").is_some() || env::var_os("WAYLAND_DISPLAY").is_some()
}

#[cfg(not(target_os = "linux"))]
fn host_supports_open() -> bool {
    true
}
