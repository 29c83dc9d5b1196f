//! Serialization implementations for the lock file

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::{Result, lockfile as lockfile_error};

/// Pretty-print `value` as JSON indented with four spaces
pub fn to_json_indented<T: Serialize>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(lockfile_error::encode_failed)?;
    String::from_utf8(buffer).map_err(lockfile_error::encode_failed)
}
