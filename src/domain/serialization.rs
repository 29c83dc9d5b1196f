//! Serialization helpers for feed entries
//!
//! The feed has published `fileSize` both as a JSON number and as a string,
//! so both are accepted.

use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

/// Deserialize a byte count from an integer, an integral float or a decimal string
pub fn deserialize_file_size<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct FileSizeVisitor;

    impl Visitor<'_> for FileSizeVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative byte count as a number or string")
        }

        fn visit_u64<E>(self, value: u64) -> std::result::Result<u64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> std::result::Result<u64, E>
        where
            E: de::Error,
        {
            u64::try_from(value)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
        }

        fn visit_f64<E>(self, value: f64) -> std::result::Result<u64, E>
        where
            E: de::Error,
        {
            float_to_size(value).ok_or_else(|| E::invalid_value(de::Unexpected::Float(value), &self))
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<u64, E>
        where
            E: de::Error,
        {
            let trimmed = value.trim();
            if let Ok(size) = trimmed.parse::<u64>() {
                return Ok(size);
            }
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(float_to_size)
                .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(FileSizeVisitor)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn float_to_size(value: f64) -> Option<u64> {
    let in_range = value.is_finite() && value >= 0.0 && value <= u64::MAX as f64;
    (in_range && value.fract() == 0.0).then_some(value as u64)
}
