//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::lockfile::DEFAULT_LOCK_FILE;
use crate::feed::{DEFAULT_FEED_URL, DEFAULT_USER_AGENT};
use crate::notify::embed::DEFAULT_DOWNLOAD_URL;

/// Portal SDK Watchtower
///
/// Watches the Portal SDK version feed and announces new releases to Discord.
#[derive(Parser, Debug)]
#[command(
    name = "watchtower",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Watches the Portal SDK version feed and announces new releases to Discord",
    long_about = "Watchtower polls the Portal SDK version feed, keeps the last seen release in a \
                  lock file, and posts a Discord webhook message whenever the version or the \
                  download size changes. Runs the watch loop when no command is given.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  DISCORD_WEBHOOK_URL=https://discord.com/api/webhooks/... watchtower\n    \
                  watchtower check --dry-run\n    \
                  watchtower --lock-file /data/version.lock show"
)]
pub struct Cli {
    /// Path of the baseline lock file
    #[arg(
        long = "lock-file",
        env = "LOCK_FILE_PATH",
        default_value = DEFAULT_LOCK_FILE,
        global = true
    )]
    pub lock_file: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub watch: WatchArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Poll the feed until interrupted (default)
    Watch,

    /// Establish the baseline and poll the feed once
    Check,

    /// Show the recorded baseline
    Show,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by the watch and check commands
#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// Discord webhook URL to announce releases on
    #[arg(
        long = "webhook-url",
        env = "DISCORD_WEBHOOK_URL",
        hide_env_values = true,
        global = true
    )]
    pub webhook_url: Option<String>,

    /// Version feed URL
    #[arg(
        long = "feed-url",
        env = "WATCHTOWER_FEED_URL",
        default_value = DEFAULT_FEED_URL,
        global = true
    )]
    pub feed_url: String,

    /// User-Agent sent with feed requests
    #[arg(
        long = "user-agent",
        env = "WATCHTOWER_USER_AGENT",
        default_value = DEFAULT_USER_AGENT,
        hide_default_value = true,
        global = true
    )]
    pub user_agent: String,

    /// Seconds between polls
    #[arg(
        long,
        env = "WATCHTOWER_INTERVAL",
        default_value_t = 10,
        value_name = "SECONDS",
        global = true
    )]
    pub interval: u64,

    /// HTTP request timeout in seconds
    #[arg(
        long,
        env = "WATCHTOWER_TIMEOUT",
        default_value_t = 30,
        value_name = "SECONDS",
        global = true
    )]
    pub timeout: u64,

    /// Mention to ping in announcements (e.g. <@123456789>)
    #[arg(long, env = "WATCHTOWER_MENTION", global = true)]
    pub mention: Option<String>,

    /// Download link shown in announcements
    #[arg(
        long = "download-url",
        env = "WATCHTOWER_DOWNLOAD_URL",
        default_value = DEFAULT_DOWNLOAD_URL,
        global = true
    )]
    pub download_url: String,

    /// Record the first release silently when no baseline exists yet
    #[arg(
        long = "no-bootstrap-announce",
        env = "WATCHTOWER_NO_BOOTSTRAP_ANNOUNCE",
        global = true
    )]
    pub no_bootstrap_announce: bool,

    /// Log announcements instead of sending them
    #[arg(long, global = true)]
    pub dry_run: bool,
}

/// Arguments for completions command
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    watchtower completions --shell bash > ~/.bash_completion.d/watchtower\n\n\
                  Generate zsh completions:\n    watchtower completions --shell zsh > ~/.zfunc/_watchtower\n\n\
                  Generate fish completions:\n    watchtower completions --shell fish > ~/.config/fish/completions/watchtower.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_command_defaults() {
        let cli = Cli::try_parse_from(["watchtower", "--lock-file", "version.lock"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.watch.interval, 10);
        assert_eq!(cli.watch.timeout, 30);
        assert!(!cli.watch.dry_run);
        assert!(!cli.watch.no_bootstrap_announce);
    }

    #[test]
    fn test_cli_parsing_check_with_options() {
        let cli = Cli::try_parse_from([
            "watchtower",
            "check",
            "--webhook-url",
            "https://discord.com/api/webhooks/1/abc",
            "--interval",
            "60",
            "--mention",
            "<@42>",
            "--dry-run",
            "--no-bootstrap-announce",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Commands::Check));
        assert_eq!(
            cli.watch.webhook_url.as_deref(),
            Some("https://discord.com/api/webhooks/1/abc")
        );
        assert_eq!(cli.watch.interval, 60);
        assert_eq!(cli.watch.mention.as_deref(), Some("<@42>"));
        assert!(cli.watch.dry_run);
        assert!(cli.watch.no_bootstrap_announce);
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["watchtower", "show", "-v", "--lock-file", "/data/v.lock"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.lock_file, PathBuf::from("/data/v.lock"));
        assert_eq!(cli.command, Some(Commands::Show));
    }

    #[test]
    fn test_cli_rejects_non_numeric_interval() {
        let result = Cli::try_parse_from(["watchtower", "watch", "--interval", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["watchtower", "completions", "--shell", "bash"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs {
                shell: clap_complete::Shell::Bash
            }))
        );
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
