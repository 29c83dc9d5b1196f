//! Version command implementation

use console::Style;

use crate::config::lockfile::DEFAULT_LOCK_FILE;
use crate::error::Result;
use crate::feed::DEFAULT_FEED_URL;

/// Print the release and the defaults it was built with
pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let label = Style::new().bold();
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    format!(
        "watchtower {version}\n\n\
         {build}\n  \
         Minimum rustc: {rustc}\n  \
         Profile: {profile}\n  \
         Target: {os}/{arch}\n\n\
         {defaults}\n  \
         Feed: {DEFAULT_FEED_URL}\n  \
         Lock file: {DEFAULT_LOCK_FILE}\n",
        version = env!("CARGO_PKG_VERSION"),
        build = label.apply_to("Build:"),
        rustc = env!("CARGO_PKG_RUST_VERSION"),
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        defaults = label.apply_to("Defaults:"),
    )
}
