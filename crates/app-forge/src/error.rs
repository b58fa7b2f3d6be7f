//! Error types for design generation

use forge_inference::BackendError;
use thiserror::Error;

/// Result type alias using GenerationError
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Errors that can occur while generating a design
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The remote call failed (transport, authentication, quota, bad request).
    /// The backend's error is kept unchanged as the source.
    #[error("Remote generation failed ({backend}): {source}")]
    RemoteGenerationFailure {
        backend: &'static str,
        #[source]
        source: BackendError,
    },
}

impl GenerationError {
    pub fn remote(backend: &'static str, source: BackendError) -> Self {
        Self::RemoteGenerationFailure { backend, source }
    }

    /// The underlying backend error
    pub fn backend_error(&self) -> &BackendError {
        match self {
            Self::RemoteGenerationFailure { source, .. } => source,
        }
    }
}
