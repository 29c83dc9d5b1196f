//! Human-readable byte sizes
//!
//! Formats byte counts using binary (powers of 1024) or metric (powers of 1000)
//! units without ever printing a value that rounds up to a full unit step
//! (`1024.0 KiB` is printed as `1.0 MiB`).

use crate::error::{Result, WatchtowerError};

const METRIC_LABELS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const BINARY_LABELS: [&str; 9] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

/// Largest amount the rounding at each precision can add to a value.
const PRECISION_OFFSETS: [f64; 4] = [0.5, 0.05, 0.005, 0.0005];

/// Unit family used when formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    /// Powers of 1000: kB, MB, GB, ...
    Metric,
    /// Powers of 1024: KiB, MiB, GiB, ...
    Binary,
}

impl UnitSystem {
    fn labels(self) -> &'static [&'static str; 9] {
        match self {
            UnitSystem::Metric => &METRIC_LABELS,
            UnitSystem::Binary => &BINARY_LABELS,
        }
    }

    fn step(self) -> f64 {
        match self {
            UnitSystem::Metric => 1000.0,
            UnitSystem::Binary => 1024.0,
        }
    }
}

/// Format a byte count with `precision` decimals (0-3)
pub fn format_bytes(num: f64, system: UnitSystem, precision: usize) -> Result<String> {
    let Some(offset) = PRECISION_OFFSETS.get(precision) else {
        return Err(WatchtowerError::InvalidPrecision { precision });
    };

    let labels = system.labels();
    let last = labels.len() - 1;
    let threshold = system.step() - offset;

    let sign = if num < 0.0 { "-" } else { "" };
    let mut value = num.abs();
    let mut label = labels[last];

    for (index, unit) in labels.iter().copied().enumerate() {
        label = unit;
        if value < threshold {
            break;
        }
        if index != last {
            value /= system.step();
        }
    }

    Ok(format!("{sign}{value:.precision$} {label}"))
}

/// Format a signed size difference, prefixing growth with `+`
pub fn format_delta(delta: i128, system: UnitSystem, precision: usize) -> Result<String> {
    #[allow(clippy::cast_precision_loss)]
    let formatted = format_bytes(delta as f64, system, precision)?;
    if delta > 0 {
        Ok(format!("+{formatted}"))
    } else {
        Ok(formatted)
    }
}
