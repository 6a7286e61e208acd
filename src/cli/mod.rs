//! CLI argument parsing

use clap::{Parser, ValueEnum};

use crate::config::{api, defaults, env};

/// Tableau refresh checker CLI
///
/// Every connection option can be given as a flag, falls back to its
/// environment variable, and finally to a built-in default.
#[derive(Parser, Debug)]
#[command(name = "tabcheck")]
#[command(version)]
#[command(
    about = "Check Tableau datasource and workbook refresh times",
    long_about = None
)]
pub struct Cli {
    /// Tableau server or Tableau Cloud pod URL
    #[arg(long, env = env::BASE_URL, default_value = defaults::BASE_URL)]
    pub base_url: String,

    /// Site content URL (the slug in `/#/site/<slug>`; empty for the default site)
    #[arg(long, env = env::SITE_CONTENT_URL, default_value = defaults::SITE_CONTENT_URL)]
    pub site_content_url: String,

    /// Personal access token name
    #[arg(long, env = env::PAT_NAME, default_value = "", hide_env_values = true)]
    pub pat_name: String,

    /// Personal access token secret
    #[arg(long, env = env::PAT_SECRET, default_value = "", hide_env_values = true)]
    pub pat_secret: String,

    /// Only list content of the project with this exact name
    #[arg(short, long, env = env::PROJECT_NAME)]
    pub project_name: Option<String>,

    /// REST API version
    #[arg(long, env = env::API_VERSION, default_value = api::VERSION)]
    pub api_version: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}

impl Cli {
    /// Names of required credential options that resolved to empty values
    pub fn missing_credentials(&self) -> Vec<String> {
        [
            ("--pat-name", env::PAT_NAME, &self.pat_name),
            ("--pat-secret", env::PAT_SECRET, &self.pat_secret),
        ]
        .into_iter()
        .filter(|(_, _, value)| value.is_empty())
        .map(|(flag, var, _)| format!("{} / {}", flag, var))
        .collect()
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `key=value` line per item (default)
    Text,
    /// ASCII table per section
    Table,
    /// JSON object with both lists
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
