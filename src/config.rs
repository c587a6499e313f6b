//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Input Files
//!
//! ```bash
//! export COUNT_DATA_DIR="/2ch_sc/scount.json"      # one file per day, YYYY_MM_DD.<ext>
//! export COUNT_FILE_EXTENSION="json"
//! export BOARD_DIRECTORY_PATH="/2ch_sc/dat/ita.data"
//! export BOARD_HOST_SUFFIX="2ch.sc"                # optional, restricts directory hosts
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DIRECTORY_CACHE` - Cache the parsed board directory by file mtime (default: `true`)
//! - `RATE_LIMIT_PER_SECOND` - Seconds per replenished request token, per IP (default: 2)
//! - `RATE_LIMIT_BURST` - Per-IP burst size (default: 100)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::application::services::ReportSources;
use crate::infrastructure::persistence::DirectoryPattern;

const DEFAULT_COUNT_DATA_DIR: &str = "/2ch_sc/scount.json";
const DEFAULT_DIRECTORY_PATH: &str = "/2ch_sc/dat/ita.data";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Directory holding the daily count files.
    pub count_data_dir: PathBuf,
    /// Extension of the daily count files, without the leading dot.
    pub count_file_extension: String,
    /// Board to server directory file.
    pub directory_path: PathBuf,
    /// When set, only directory lines whose host ends in this suffix count.
    pub directory_host_suffix: Option<String>,
    /// Reuse the parsed directory until the file's mtime changes.
    pub directory_cache: bool,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `DIRECTORY_CACHE` is not a boolean.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let count_data_dir = env::var("COUNT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_COUNT_DATA_DIR));

        let count_file_extension = env::var("COUNT_FILE_EXTENSION")
            .map(|v| v.trim_start_matches('.').to_string())
            .unwrap_or_else(|_| "json".to_string());

        let directory_path = env::var("BOARD_DIRECTORY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DIRECTORY_PATH));

        let directory_host_suffix = env::var("BOARD_HOST_SUFFIX")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let directory_cache = match env::var("DIRECTORY_CACHE") {
            Ok(v) => parse_bool(&v).context("DIRECTORY_CACHE must be true or false")?,
            Err(_) => true,
        };

        let rate_limit_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            count_data_dir,
            count_file_extension,
            directory_path,
            directory_host_suffix,
            directory_cache,
            rate_limit_per_second,
            rate_limit_burst,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - the count file extension is empty or contains a path separator
    /// - either input path is empty
    /// - a rate limit value is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.count_file_extension.is_empty()
            || self.count_file_extension.contains(['/', '\\'])
        {
            anyhow::bail!(
                "COUNT_FILE_EXTENSION must be a bare extension, got '{}'",
                self.count_file_extension
            );
        }

        if self.count_data_dir.as_os_str().is_empty() {
            anyhow::bail!("COUNT_DATA_DIR must not be empty");
        }

        if self.directory_path.as_os_str().is_empty() {
            anyhow::bail!("BOARD_DIRECTORY_PATH must not be empty");
        }

        if self.rate_limit_per_second == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND must be greater than 0");
        }

        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    /// Input file locations for the report service.
    pub fn report_sources(&self) -> ReportSources {
        ReportSources {
            count_data_dir: self.count_data_dir.clone(),
            count_file_extension: self.count_file_extension.clone(),
            directory_path: self.directory_path.clone(),
        }
    }

    /// Directory line pattern honouring `BOARD_HOST_SUFFIX`.
    ///
    /// # Errors
    ///
    /// Returns an error if the suffix cannot be compiled into a pattern.
    pub fn directory_pattern(&self) -> Result<DirectoryPattern> {
        match &self.directory_host_suffix {
            Some(suffix) => DirectoryPattern::for_suffix(suffix)
                .with_context(|| format!("Invalid BOARD_HOST_SUFFIX '{}'", suffix)),
            None => Ok(DirectoryPattern::any_host()),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Count data: {}/YYYY_MM_DD.{}",
            self.count_data_dir.display(),
            self.count_file_extension
        );
        tracing::info!("  Board directory: {}", self.directory_path.display());
        match &self.directory_host_suffix {
            Some(suffix) => tracing::info!("  Directory host suffix: {}", suffix),
            None => tracing::info!("  Directory host suffix: any"),
        }
        tracing::info!(
            "  Directory cache: {}",
            if self.directory_cache {
                "enabled"
            } else {
                "disabled"
            }
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Rate limit: 1 request per {}s, burst {}",
            self.rate_limit_per_second,
            self.rate_limit_burst
        );
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{}'", other),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
