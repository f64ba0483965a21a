use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use atn_core::errors::{AtnError, ErrorInfo};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

fn serde_error(code: &str, err: impl ToString) -> AtnError {
    AtnError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(ordered.into_iter().collect::<Map<_, _>>())
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into key-sorted JSON bytes.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, AtnError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-serialize", err))?;
    let mut bytes = serde_json::to_vec_pretty(&canonicalize(value))
        .map_err(|err| serde_error("json-write", err))?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, AtnError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-deserialize", err))
}

/// SHA-256 of the canonical JSON form, hex encoded.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, AtnError> {
    let bytes = to_canonical_json_bytes(value)?;
    Ok(format!("{:x}", Sha256::digest(bytes)))
}

/// Writes a value as canonical JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AtnError> {
    let bytes = to_canonical_json_bytes(value)?;
    fs::write(path, bytes).map_err(|err| AtnError::from_io("json-write", path, err))
}

/// Writes canonical JSON to `<path>.tmp` and renames it over `path`, so
/// readers see either no file or the complete one.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), AtnError> {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    let staged = path.with_file_name(name);
    write_json(&staged, value)?;
    fs::rename(&staged, path).map_err(|err| {
        let _ = fs::remove_file(&staged);
        AtnError::from_io("json-rename", path, err)
    })
}

/// Reads a JSON file; a missing file surfaces as `NotFound`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AtnError> {
    let bytes = fs::read(path).map_err(|err| AtnError::from_io("json-read", path, err))?;
    from_json_slice(&bytes).map_err(|err| match err {
        AtnError::Serde(info) => {
            AtnError::Serde(info.with_context("path", path.display().to_string()))
        }
        other => other,
    })
}
