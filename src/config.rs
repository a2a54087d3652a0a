// Configuration management for routediff
// Supports CLI arguments, config file (TOML), and environment variables

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Level;

use crate::error::{AppError, AppResult};
use crate::report::{ReportOptions, Verbosity};
use crate::routes::parser::ParseOptions;

/// routediff - Compare pre-change and post-change routing table captures per VRF
#[derive(Parser, Debug, Clone)]
#[command(name = "routediff")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Pre-change capture file
    pub pre_file: PathBuf,

    /// Post-change capture file
    pub post_file: PathBuf,

    /// Write the comparison as JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only list added and removed routes
    #[arg(short, long)]
    pub quiet: bool,

    /// Also print parser warnings
    #[arg(short, long, alias = "verbose")]
    pub debug: bool,

    /// Logging level (error, warn, info, debug, trace) [default: warn]
    #[arg(short, long, env = "ROUTEDIFF_LOG")]
    pub log_level: Option<String>,

    /// Path to configuration file
    #[arg(short, long, env = "ROUTEDIFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ignore routes whose protocol contains this string (repeatable)
    #[arg(long = "exclude-protocol", value_name = "NAME")]
    pub exclude_protocols: Vec<String>,

    /// Treat every vlanNN interface as the same interface
    #[arg(long)]
    pub normalize_vlan: bool,
}

/// Configuration file structure (TOML format)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Parser settings
    #[serde(default)]
    pub parser: ParserConfig,

    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParserConfig {
    /// Protocols to leave out of the comparison, e.g. "isis-isis_infra"
    #[serde(default)]
    pub exclude_protocols: Vec<String>,

    /// Collapse vlanNN interface names
    #[serde(default)]
    pub normalize_vlan_interfaces: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// List unchanged routes in text reports
    #[serde(default = "default_true")]
    pub show_unchanged: bool,

    /// List attribute drift in text reports
    #[serde(default = "default_true")]
    pub show_drift: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default)]
    pub level: Option<String>,
}

fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            show_unchanged: default_true(),
            show_drift: default_true(),
        }
    }
}

const DEFAULT_CONFIG_FILE: &str = "routediff.toml";

/// Merged configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub pre_file: PathBuf,
    pub post_file: PathBuf,
    pub output: Option<PathBuf>,
    pub log_level: Level,
    pub parse: ParseOptions,
    pub report: ReportOptions,
}

impl Config {
    /// Merge CLI args with the config file.
    /// Priority: CLI args > Config file > Defaults
    pub fn from_args(cli_args: CliArgs) -> AppResult<Self> {
        let config_file = match &cli_args.config {
            Some(path) => load_config_file(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    load_config_file(path)?
                } else {
                    ConfigFile::default()
                }
            }
        };
        Self::merge(cli_args, config_file)
    }

    fn merge(cli_args: CliArgs, config_file: ConfigFile) -> AppResult<Self> {
        if cli_args.quiet && cli_args.debug {
            return Err(AppError::Config(
                "--quiet and --debug are mutually exclusive".to_string(),
            ));
        }

        let level_str = cli_args
            .log_level
            .or(config_file.logging.level)
            .unwrap_or_else(default_log_level);
        let log_level = parse_log_level(&level_str)?;

        let mut exclude_protocols = config_file.parser.exclude_protocols;
        for proto in cli_args.exclude_protocols {
            if !exclude_protocols.contains(&proto) {
                exclude_protocols.push(proto);
            }
        }

        let verbosity = if cli_args.quiet {
            Verbosity::Quiet
        } else if cli_args.debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        };

        Ok(Config {
            pre_file: cli_args.pre_file,
            post_file: cli_args.post_file,
            output: cli_args.output,
            log_level,
            parse: ParseOptions {
                exclude_protocols,
                normalize_vlan_interfaces: cli_args.normalize_vlan
                    || config_file.parser.normalize_vlan_interfaces,
            },
            report: ReportOptions {
                verbosity,
                show_unchanged: config_file.report.show_unchanged,
                show_drift: config_file.report.show_drift,
            },
        })
    }
}

fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    tracing::info!("Loading configuration from: {}", path.display());
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    toml::from_str::<ConfigFile>(&content)
        .map_err(|e| AppError::Config(format!("invalid {}: {}", path.display(), e)))
}

pub fn parse_log_level(level_str: &str) -> AppResult<Level> {
    match level_str.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(AppError::Config(format!("Invalid log level: {}", level_str))),
    }
}
