//! Show command implementation
//!
//! Prints the baseline recorded in the lock file.

use std::path::Path;

use console::Style;

use crate::config::VersionLock;
use crate::error::Result;
use crate::humanize::{UnitSystem, format_bytes};

/// Run show command
pub fn run(lock_path: &Path) -> Result<()> {
    let Some(lock) = VersionLock::load(lock_path)? else {
        println!("No baseline recorded yet at {}.", lock_path.display());
        return Ok(());
    };

    print!("{}", render(lock_path, &lock)?);
    Ok(())
}

fn render(lock_path: &Path, lock: &VersionLock) -> Result<String> {
    let label = Style::new().bold();
    let entry = &lock.entry;

    #[allow(clippy::cast_precision_loss)]
    let size = entry.file_size as f64;

    let mut out = format!("Baseline ({}):\n", lock_path.display());
    out.push_str(&format!(
        "  {} {}\n",
        label.apply_to("Version:"),
        Style::new().bold().yellow().apply_to(&entry.version)
    ));
    out.push_str(&format!(
        "  {} {} ({} bytes, {})\n",
        label.apply_to("File size:"),
        format_bytes(size, UnitSystem::Metric, 1)?,
        entry.file_size,
        format_bytes(size, UnitSystem::Binary, 2)?
    ));

    for (key, value) in &entry.extra {
        let value = value
            .as_str()
            .map_or_else(|| value.to_string(), ToString::to_string);
        out.push_str(&format!(
            "  {} {}\n",
            label.apply_to(format!("{key}:")),
            value
        ));
    }

    if lock.baseline().is_none() {
        out.push_str(&format!(
            "  {}\n",
            Style::new()
                .yellow()
                .apply_to("Baseline is invalid and will be re-initialized from the feed")
        ));
    }

    Ok(out)
}
