//! crates/patch/src/codec.rs
//!
//! Serialized patch form.
//!
//! A patch is stored as a JSON document wrapped in a zlib stream:
//!
//! ```text
//! {"H":"<base64 fingerprint>","M":[{"L":4,"I":"WVk=","D":1}]}
//! ```
//!
//! `L`, `I` and `D` are omitted when zero or empty and an absent field
//! decodes as zero or empty. An empty script is written as `"M":[]`; `null`
//! and a missing `M` decode as empty too. Unknown fields are ignored. Binary fields use standard padded base64.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use checksums::Fingerprint;
use compress::zlib::{self, CompressionLevel};
use serde::{Deserialize, Serialize};

use crate::error::{MalformedPatch, PatchError};
use crate::model::{EditOperation, EditScript, Patch};

/// Default bound on the inflated size of a patch document (4 GiB).
pub const DEFAULT_MAX_DOCUMENT_LEN: u64 = 4 * 1024 * 1024 * 1024;

#[derive(Serialize, Deserialize)]
struct WirePatch {
    #[serde(rename = "H", default)]
    fingerprint: String,
    #[serde(rename = "M", default)]
    operations: Option<Vec<WireOperation>>,
}

#[derive(Serialize, Deserialize)]
struct WireOperation {
    #[serde(rename = "L", default, skip_serializing_if = "is_zero")]
    location: u64,
    #[serde(rename = "I", default, skip_serializing_if = "Option::is_none")]
    insert: Option<String>,
    #[serde(rename = "D", default, skip_serializing_if = "is_zero")]
    delete_count: u64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(value: &u64) -> bool {
    *value == 0
}

impl From<&EditOperation> for WireOperation {
    fn from(op: &EditOperation) -> Self {
        Self {
            location: op.location() as u64,
            insert: (!op.insert().is_empty()).then(|| STANDARD.encode(op.insert())),
            delete_count: op.delete_count() as u64,
        }
    }
}

impl WireOperation {
    fn into_operation(self, index: usize) -> Result<EditOperation, MalformedPatch> {
        let number = |field: &'static str, value: u64| {
            usize::try_from(value).map_err(|_| MalformedPatch::NumberOutOfRange {
                index,
                field,
                value,
            })
        };
        let location = number("location", self.location)?;
        let delete_count = number("delete count", self.delete_count)?;
        let insert = match self.insert {
            Some(text) => STANDARD
                .decode(text)
                .map_err(|_| MalformedPatch::InsertEncoding { index })?,
            None => Vec::new(),
        };
        Ok(EditOperation::new(location, delete_count, insert))
    }
}

/// Renders `patch` as its JSON document.
pub fn encode_document(patch: &Patch) -> Result<Vec<u8>, PatchError> {
    let operations = patch.script().operations();
    let wire = WirePatch {
        fingerprint: STANDARD.encode(patch.base_fingerprint()),
        operations: Some(operations.iter().map(WireOperation::from).collect()),
    };
    let json = serde_json::to_vec(&wire).map_err(std::io::Error::from)?;
    logging::trace_codec!(
        "encoded {} operations into {} JSON bytes",
        operations.len(),
        json.len()
    );
    Ok(json)
}

/// Parses a JSON document into a validated [`Patch`].
///
/// Ordering is validated here; bounds against the base are checked when the
/// patch is applied.
pub fn decode_document(json: &[u8]) -> Result<Patch, MalformedPatch> {
    let wire: WirePatch =
        serde_json::from_slice(json).map_err(|err| MalformedPatch::Encoding(err.to_string()))?;

    let fingerprint_bytes = STANDARD
        .decode(&wire.fingerprint)
        .map_err(|_| MalformedPatch::FingerprintEncoding)?;
    let fingerprint = Fingerprint::from_slice(&fingerprint_bytes)?;

    let operations = wire
        .operations
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, op)| op.into_operation(index))
        .collect::<Result<Vec<_>, _>>()?;
    let script = EditScript::new(operations)?;

    logging::trace_codec!(
        "decoded {} operations from {} JSON bytes",
        script.len(),
        json.len()
    );
    Ok(Patch::new(fingerprint, script))
}

/// Encodes `patch` and compresses the document at `level`.
pub fn encode(patch: &Patch, level: CompressionLevel) -> Result<Vec<u8>, PatchError> {
    let json = encode_document(patch)?;
    let compressed = zlib::compress_to_vec(&json, level)?;
    logging::trace_codec!(
        "compressed {} JSON bytes into {} bytes",
        json.len(),
        compressed.len()
    );
    Ok(compressed)
}

/// Inflates and decodes a stored patch.
pub fn decode(bytes: &[u8]) -> Result<Patch, MalformedPatch> {
    decode_limited(bytes, DEFAULT_MAX_DOCUMENT_LEN)
}

/// Like [`decode`], refusing documents that inflate past `limit` bytes.
pub fn decode_limited(bytes: &[u8], limit: u64) -> Result<Patch, MalformedPatch> {
    let json = zlib::decompress_to_vec_limited(bytes, limit)
        .map_err(|err| MalformedPatch::Envelope(err.to_string()))?;
    decode_document(&json)
}
