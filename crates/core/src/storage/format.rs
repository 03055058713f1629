use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Format marker written into every file this crate persists.
pub const FORMAT: &str = "atlas";

/// Current file format version.
pub const CURRENT_VERSION: u16 = 1;

/// On-disk envelope:
/// ```text
/// { "format": "atlas", "version": 1, "data": <payload> }
/// ```
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    format: String,
    version: u16,
    data: T,
}

#[derive(Deserialize)]
struct Header {
    format: String,
    version: u16,
}

/// Wrap `data` in the current envelope and render it as JSON bytes.
pub fn write_file<T: Serialize>(data: &T) -> Result<Vec<u8>, CoreError> {
    let envelope = Envelope {
        format: FORMAT.to_string(),
        version: CURRENT_VERSION,
        data,
    };
    serde_json::to_vec_pretty(&envelope)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize file: {e}")))
}

/// Validate the envelope header, then decode the payload.
pub fn read_file<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CoreError> {
    let header: Header = serde_json::from_slice(bytes)
        .map_err(|e| CoreError::InvalidFileFormat(format!("Not an Atlas file: {e}")))?;

    if header.format != FORMAT {
        return Err(CoreError::InvalidFileFormat(format!(
            "Unexpected format marker '{}'",
            header.format
        )));
    }
    if header.version == 0 || header.version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(header.version));
    }

    let envelope: Envelope<T> = serde_json::from_slice(bytes)
        .map_err(|e| CoreError::Deserialization(format!("Failed to decode file payload: {e}")))?;
    Ok(envelope.data)
}
