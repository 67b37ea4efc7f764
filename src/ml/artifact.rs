//! JSON persistence for fitted objects.
//!
//! Artifacts are plain JSON documents with an explicit schema so trainer and
//! inference processes only have to agree on field names, never on an
//! in-memory object layout.

use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{AdSalesError, Result};

/// A fitted object that can be written by the trainer and loaded read-only
/// by inference processes.
pub trait Artifact: Serialize + DeserializeOwned {
    /// Short label used in logs.
    const KIND: &'static str;

    /// Structural checks run after every load.
    fn validate(&self) -> std::result::Result<(), String>;

    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AdSalesError::MissingArtifact(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let artifact: Self =
            serde_json::from_str(&content).map_err(|e| AdSalesError::InvalidArtifact {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        artifact
            .validate()
            .map_err(|reason| AdSalesError::InvalidArtifact {
                path: path.to_path_buf(),
                reason,
            })?;

        debug!(kind = Self::KIND, path = %path.display(), "loaded artifact");
        Ok(artifact)
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.validate().map_err(AdSalesError::Validation)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(self)?;
        std::fs::write(path, payload)?;

        debug!(kind = Self::KIND, path = %path.display(), "wrote artifact");
        Ok(())
    }
}
