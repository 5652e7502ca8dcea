use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";
const ENV_PREFIX: &str = "LEDGER_TUI";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// IANA name used to render dates; system local time when unset.
    pub timezone: Option<String>,
    /// strftime pattern for the calendar date of each expense.
    pub date_format: String,
    /// Log file path; nothing is logged when unset.
    pub log_file: Option<String>,
    pub log_level: String,
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timezone: None,
            date_format: "%m/%d/%Y".to_string(),
            log_file: None,
            log_level: "info".to_string(),
            tick_rate_ms: 200,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ledger_tui", about = "Expense tracker for the terminal")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override timezone (IANA name, e.g. Europe/Rome).
    #[arg(long)]
    timezone: Option<String>,
    /// Override date format (strftime, e.g. %d/%m/%Y).
    #[arg(long)]
    date_format: Option<String>,
    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<String>,
    /// Override log level (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    resolve(Args::parse())
}

fn resolve(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(timezone) = args.timezone {
        settings.timezone = Some(timezone);
    }
    if let Some(date_format) = args.date_format {
        settings.date_format = date_format;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let args = Args::parse_from(["ledger_tui", "--config", "no/such/ledger_tui.toml"]);
        let settings = resolve(args).unwrap();

        assert_eq!(settings.date_format, "%m/%d/%Y");
        assert_eq!(settings.tick_rate_ms, 200);
        assert!(settings.log_file.is_none());
    }

    #[test]
    fn cli_overrides_win() {
        let args = Args::parse_from([
            "ledger_tui",
            "--config",
            "no/such/ledger_tui.toml",
            "--timezone",
            "Europe/Rome",
            "--date-format",
            "%d/%m/%Y",
            "--log-level",
            "debug",
        ]);
        let settings = resolve(args).unwrap();

        assert_eq!(settings.timezone.as_deref(), Some("Europe/Rome"));
        assert_eq!(settings.date_format, "%d/%m/%Y");
        assert_eq!(settings.log_level, "debug");
    }
}
