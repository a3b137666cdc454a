//! # Overview
//!
//! Zlib (RFC 1950) helpers for the patch envelope. Serialized patches are
//! deflated with [`compress_to_vec`] before they are written and inflated with
//! [`decompress_to_vec`] (or its bounded sibling) before decoding.
//!
//! # Examples
//!
//! ```
//! use compress::zlib::{CompressionLevel, compress_to_vec, decompress_to_vec};
//!
//! let data = b"highly compressible payload";
//! let compressed = compress_to_vec(data, CompressionLevel::Best).unwrap();
//! let decoded = decompress_to_vec(&compressed).unwrap();
//! assert_eq!(decoded, data);
//! ```

use std::{
    fmt,
    io::{self, Read, Write},
    num::NonZeroU8,
};

use flate2::{Compression, read::ZlibDecoder, write::ZlibEncoder};

/// Compression levels recognised by the zlib encoder.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CompressionLevel {
    /// Favour speed over compression ratio.
    Fast,
    /// Use zlib's default balance between speed and ratio.
    #[default]
    Default,
    /// Favour the best possible compression ratio.
    Best,
    /// Use an explicit zlib compression level in the range `1..=9`.
    Precise(NonZeroU8),
}

impl CompressionLevel {
    /// Creates a [`CompressionLevel::Precise`] value from an explicit numeric level.
    ///
    /// The supplied `level` must fall within the inclusive range `1..=9`.
    pub fn from_numeric(level: u32) -> Result<Self, CompressionLevelError> {
        if !(1..=9).contains(&level) {
            return Err(CompressionLevelError::new(level));
        }
        match NonZeroU8::new(level as u8) {
            Some(precise) => Ok(Self::Precise(precise)),
            None => Err(CompressionLevelError::new(level)),
        }
    }

    /// Constructs a [`CompressionLevel::Precise`] variant from the provided zlib level.
    #[must_use]
    pub const fn precise(level: NonZeroU8) -> Self {
        Self::Precise(level)
    }
}

impl From<CompressionLevel> for Compression {
    fn from(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::Fast => Compression::fast(),
            CompressionLevel::Default => Compression::default(),
            CompressionLevel::Best => Compression::best(),
            CompressionLevel::Precise(value) => Compression::new(u32::from(value.get())),
        }
    }
}

/// Error returned when a requested compression level falls outside the
/// permissible zlib range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CompressionLevelError {
    level: u32,
}

impl CompressionLevelError {
    const fn new(level: u32) -> Self {
        Self { level }
    }

    /// Returns the invalid compression level that triggered the error.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }
}

impl fmt::Display for CompressionLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "compression level {} is outside the supported range 1-9",
            self.level
        )
    }
}

impl std::error::Error for CompressionLevelError {}

/// Compresses `input` into a new [`Vec`].
pub fn compress_to_vec(input: &[u8], level: CompressionLevel) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), level.into());
    encoder.write_all(input)?;
    encoder.finish()
}

/// Decompresses `input` into a new [`Vec`].
pub fn decompress_to_vec(input: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(input);
    let mut output = Vec::new();
    io::copy(&mut decoder, &mut output)?;
    Ok(output)
}

/// Decompresses `input`, failing with [`io::ErrorKind::InvalidData`] once the
/// inflated payload would exceed `limit` bytes.
pub fn decompress_to_vec_limited(input: &[u8], limit: u64) -> io::Result<Vec<u8>> {
    let decoder = ZlibDecoder::new(input);
    let mut output = Vec::new();
    decoder
        .take(limit.saturating_add(1))
        .read_to_end(&mut output)?;
    if output.len() as u64 > limit {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("decompressed payload exceeds {limit} bytes"),
        ));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helper_functions_round_trip() {
        let payload = b"highly compressible payload";
        let compressed = compress_to_vec(payload, CompressionLevel::Best).expect("compress");
        let decoded = decompress_to_vec(&compressed).expect("decompress");
        assert_eq!(decoded, payload);
    }

    #[test]
    fn empty_input_round_trips() {
        let compressed = compress_to_vec(b"", CompressionLevel::Default).expect("compress");
        assert!(!compressed.is_empty());
        assert!(decompress_to_vec(&compressed).expect("decompress").is_empty());
    }

    #[test]
    fn output_carries_zlib_header() {
        let compressed = compress_to_vec(b"payload", CompressionLevel::Default).expect("compress");
        assert_eq!(compressed[0] & 0x0F, 8, "deflate compression method");
        let header = u16::from_be_bytes([compressed[0], compressed[1]]);
        assert_eq!(header % 31, 0, "FCHECK makes the header a multiple of 31");
    }

    #[test]
    fn precise_level_converts_to_requested_value() {
        let level = NonZeroU8::new(7).expect("non-zero");
        let compression = Compression::from(CompressionLevel::precise(level));
        assert_eq!(compression.level(), u32::from(level.get()));
    }

    #[test]
    fn numeric_level_constructor_accepts_valid_range() {
        for level in 1..=9 {
            let precise = CompressionLevel::from_numeric(level).expect("valid level");
            let expected = NonZeroU8::new(level as u8).expect("validated");
            assert_eq!(precise, CompressionLevel::Precise(expected));
        }
    }

    #[test]
    fn numeric_level_constructor_rejects_out_of_range() {
        let err = CompressionLevel::from_numeric(10).expect_err("level above 9 rejected");
        assert_eq!(err.level(), 10);
        let err = CompressionLevel::from_numeric(0).expect_err("level 0 rejected");
        assert_eq!(err.level(), 0);
    }

    #[test]
    fn limited_decompression_rejects_oversized_payload() {
        let payload = vec![0u8; 4096];
        let compressed = compress_to_vec(&payload, CompressionLevel::Default).expect("compress");
        let error = decompress_to_vec_limited(&compressed, 1024).expect_err("over limit");
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
        let decoded = decompress_to_vec_limited(&compressed, 4096).expect("within limit");
        assert_eq!(decoded, payload);
    }

    #[test]
    fn garbage_input_is_an_error() {
        assert!(decompress_to_vec(b"definitely not zlib").is_err());
    }
}
