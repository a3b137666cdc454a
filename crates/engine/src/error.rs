//! Errors produced by the diff and patch workflows.

use std::io;
use std::path::{Path, PathBuf};

use patch::{MalformedPatch, PatchError};
use thiserror::Error;

use crate::exit_code::ExitCode;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error produced when a workflow fails.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct EngineError {
    kind: EngineErrorKind,
}

/// Classification of an [`EngineError`].
#[derive(Debug, Error)]
pub enum EngineErrorKind {
    /// A file could not be read or written.
    #[error("failed to {action} '{}': {source}", path.display())]
    Io {
        /// What was being attempted.
        action: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// Building, decoding or applying the patch failed.
    #[error(transparent)]
    Patch(#[from] PatchError),
}

impl EngineError {
    /// Constructs an I/O error with action context.
    #[must_use]
    pub fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self {
            kind: EngineErrorKind::Io {
                action,
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Provides access to the underlying error kind.
    #[must_use]
    pub const fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }

    /// Consumes the error and returns its kind.
    #[must_use]
    pub fn into_kind(self) -> EngineErrorKind {
        self.kind
    }

    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match &self.kind {
            EngineErrorKind::Io { .. } | EngineErrorKind::Patch(PatchError::Io(_)) => {
                ExitCode::FileIo
            }
            EngineErrorKind::Patch(PatchError::HashMismatch { .. }) => ExitCode::HashMismatch,
            EngineErrorKind::Patch(PatchError::Malformed(_)) => ExitCode::MalformedPatch,
            EngineErrorKind::Patch(PatchError::ResourceExhausted(_)) => {
                ExitCode::ResourceExhausted
            }
        }
    }
}

impl From<PatchError> for EngineError {
    fn from(error: PatchError) -> Self {
        Self {
            kind: EngineErrorKind::Patch(error),
        }
    }
}

impl From<MalformedPatch> for EngineError {
    fn from(error: MalformedPatch) -> Self {
        PatchError::from(error).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checksums::Fingerprint;

    #[test]
    fn io_error_names_action_and_path() {
        let err = EngineError::io(
            "read base file",
            Path::new("missing.bin"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        let text = err.to_string();
        assert!(text.starts_with("failed to read base file 'missing.bin'"), "{text}");
        assert_eq!(err.exit_code(), ExitCode::FileIo);
    }

    #[test]
    fn patch_errors_map_to_their_codes() {
        let mismatch: EngineError = PatchError::HashMismatch {
            expected: Fingerprint::of(b"a"),
            actual: Fingerprint::of(b"b"),
        }
        .into();
        assert_eq!(mismatch.exit_code(), ExitCode::HashMismatch);

        let malformed: EngineError = MalformedPatch::FingerprintEncoding.into();
        assert_eq!(malformed.exit_code(), ExitCode::MalformedPatch);

        let exhausted: EngineError = PatchError::ResourceExhausted(align_error()).into();
        assert_eq!(exhausted.exit_code(), ExitCode::ResourceExhausted);
    }

    fn align_error() -> align::AlignError {
        align::AlignError::ResourceExhausted { len: 2, limit: 1 }
    }
}
