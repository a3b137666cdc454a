#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` runs the two file-level workflows of `bdelta`:
//!
//! - [`run_diff`] reads a base and a target file, builds a patch, and writes
//!   it compressed next to the current directory (or to an explicit path).
//! - [`run_patch`] reads a base file and a stored patch, verifies and applies
//!   it, and writes the reconstructed file.
//!
//! [`diff_bytes`] and [`patch_bytes`] expose the same steps over in-memory
//! buffers.
//!
//! # Design
//!
//! Configuration travels in [`DiffOptions`] and [`PatchOptions`]; nothing is
//! read from process-wide state. Outputs are written through
//! [`staging::write_atomically`], which stages the payload in a temporary
//! file beside the destination and renames it into place once complete.
//!
//! # Errors
//!
//! [`EngineError`] wraps [`patch::PatchError`] and adds the path and action
//! to I/O failures. [`EngineError::exit_code`] maps every failure to an
//! [`ExitCode`].
//!
//! # Examples
//!
//! ```
//! use engine::{DiffOptions, PatchOptions, run_diff, run_patch};
//!
//! let dir = tempfile::tempdir()?;
//! let base = dir.path().join("app.bin");
//! let target = dir.path().join("app-new.bin");
//! std::fs::write(&base, b"release 1.0")?;
//! std::fs::write(&target, b"release 1.1")?;
//!
//! let patch_path = dir.path().join("app.bin.patch");
//! run_diff(&base, &target, &DiffOptions::new().with_output(Some(&patch_path)))?;
//!
//! let restored = dir.path().join("restored.bin");
//! let summary = run_patch(&base, &patch_path, &PatchOptions::new().with_output(Some(&restored)))?;
//! assert!(summary.mismatch.is_none());
//! assert_eq!(std::fs::read(&restored)?, b"release 1.1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod exit_code;
pub mod naming;
mod options;
pub mod staging;
mod workflow;

pub use error::{EngineError, EngineErrorKind, EngineResult};
pub use exit_code::ExitCode;
pub use options::{DiffOptions, PatchOptions};
pub use workflow::{
    DiffSummary, EncodedPatch, PatchSummary, diff_bytes, patch_bytes, run_diff, run_patch,
};
