use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode.
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (run a single cycle and exit)
/// - config operations are requested
/// - --debug mode is enabled
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once
        || args.new_endpoint_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.debug
}

/// NBA Scoreboard
///
/// Periodically pulls an NBA score feed and paints a truncated summary on a
/// fixed-size character display. In the default mode the process keeps
/// running, refreshing on the configured interval until interrupted.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Run a single fetch cycle, print the display lines to stdout and exit.
    /// Useful for scripts or quick score checks.
    #[arg(short, long)]
    pub once: bool,

    /// Override the refresh interval in seconds for this run.
    #[arg(long = "interval", help_heading = "Display Options")]
    pub refresh_interval: Option<u64>,

    /// Update the score feed endpoint URL in config.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "ENDPOINT_URL"
    )]
    pub new_endpoint_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: info logs go to stdout in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_interactive() {
        let args = Args::parse_from(["nba_scoreboard"]);
        assert!(!is_noninteractive_mode(&args));
    }

    #[test]
    fn test_once_is_noninteractive() {
        let args = Args::parse_from(["nba_scoreboard", "--once"]);
        assert!(is_noninteractive_mode(&args));
    }

    #[test]
    fn test_config_operations_are_noninteractive() {
        let args = Args::parse_from(["nba_scoreboard", "--list-config"]);
        assert!(is_noninteractive_mode(&args));

        let args = Args::parse_from(["nba_scoreboard", "--config", "scores.example.com"]);
        assert!(is_noninteractive_mode(&args));
    }

    #[test]
    fn test_interval_override_parses() {
        let args = Args::parse_from(["nba_scoreboard", "--interval", "60"]);
        assert_eq!(args.refresh_interval, Some(60));
    }
}
