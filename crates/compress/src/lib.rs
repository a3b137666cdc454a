#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `compress` provides the lossless envelope that wraps serialized bdelta
//! patches on disk. Patches are zlib streams (RFC 1950), the same envelope
//! used by existing bdelta patch files.
//!
//! # Design
//!
//! The [`zlib`] module is a thin layer over [`flate2`](https://docs.rs/flate2).
//! Whole payloads are compressed and decompressed in memory, matching the
//! workspace's no-streaming model.
//!
//! # Errors
//!
//! All helpers return [`std::io::Result`]; corrupt streams surface as
//! [`std::io::ErrorKind::InvalidData`] or [`std::io::ErrorKind::InvalidInput`]
//! as reported by the decoder.
//!
//! # See also
//!
//! - `patch::codec` for the serialized form carried inside the envelope.

pub mod zlib;
