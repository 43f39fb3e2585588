//! Run configuration.
//!
//! Precedence: CLI > env > config file > defaults. With nothing configured the
//! run uses 100,000 products and the four-line human report.

use crate::cli::{OutputMode, parse_output_mode};
use crate::dataset::DEFAULT_DATASET_SIZE;
use crate::errors::BenchError;
use crate::logger::DEFAULT_RETENTION;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "seqbench.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub dataset_size: usize,
    pub output: String,
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    pub log_retention: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            dataset_size: DEFAULT_DATASET_SIZE,
            output: "human".to_string(),
            log_dir: None,
            log_level: "warn".to_string(),
            log_retention: DEFAULT_RETENTION,
        }
    }
}

impl BenchConfig {
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        parse_output_mode(Some(self.output.as_str()))
    }
}

/// Values set explicitly by one layer. `None` means "not set here".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    pub dataset_size: Option<usize>,
    pub output: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_retention: Option<usize>,
}

impl PartialConfig {
    /// Fills fields still unset from a lower-precedence layer.
    pub fn or(mut self, lower: PartialConfig) -> Self {
        if self.dataset_size.is_none() { self.dataset_size = lower.dataset_size; }
        if self.output.is_none() { self.output = lower.output; }
        if self.log_dir.is_none() { self.log_dir = lower.log_dir; }
        if self.log_level.is_none() { self.log_level = lower.log_level; }
        if self.log_retention.is_none() { self.log_retention = lower.log_retention; }
        self
    }

    #[must_use]
    pub fn resolve(self) -> BenchConfig {
        let d = BenchConfig::default();
        BenchConfig {
            dataset_size: self.dataset_size.unwrap_or(d.dataset_size),
            output: self.output.unwrap_or(d.output),
            log_dir: self.log_dir.or(d.log_dir),
            log_level: self.log_level.unwrap_or(d.log_level),
            log_retention: self.log_retention.unwrap_or(d.log_retention),
        }
    }
}

/// Parses a TOML config document.
///
/// # Errors
/// Returns an error on malformed TOML or mistyped fields.
pub fn parse_config_str(s: &str) -> Result<PartialConfig, BenchError> {
    Ok(toml::from_str::<PartialConfig>(s)?)
}

/// Reads and parses a TOML config file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<PartialConfig, BenchError> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| BenchError::Config(format!("{}: {e}", path.display())))?;
    parse_config_str(&s)
}

/// Candidate config files in search order, excluding an explicit `--config` path.
pub fn discovered_config_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = vec![];
    if let Ok(p) = std::env::var("SEQBENCH_CONFIG") { paths.push(PathBuf::from(p)); }
    if let Some(dir) = dirs_next::config_dir() { paths.push(dir.join(CONFIG_FILE_NAME)); }
    if let Ok(cur) = std::env::current_dir() { paths.push(cur.join(CONFIG_FILE_NAME)); }
    paths
}

/// Loads the file layer. An explicit path must load; discovered files that fail are skipped.
///
/// # Errors
/// Returns an error only for an explicit path that cannot be read or parsed.
pub fn file_layer(explicit: Option<&Path>, discovered: &[PathBuf]) -> Result<PartialConfig, BenchError> {
    if let Some(p) = explicit {
        return load_config_file(p);
    }
    for p in discovered {
        if !p.exists() {
            continue;
        }
        match load_config_file(p) {
            Ok(cfg) => {
                log::debug!("loaded config from {}", p.display());
                return Ok(cfg);
            }
            Err(e) => log::warn!("skipping config {}: {e}", p.display()),
        }
    }
    Ok(PartialConfig::default())
}

/// Builds the env layer from a lookup function (`std::env::var` in the binary).
///
/// # Errors
/// Returns an error if a numeric variable does not parse.
pub fn env_layer<F>(lookup: F) -> Result<PartialConfig, BenchError>
where
    F: Fn(&str) -> Option<String>,
{
    let parse_usize = |key: &str| -> Result<Option<usize>, BenchError> {
        match lookup(key) {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .map(Some)
                .map_err(|_| BenchError::Config(format!("{key} must be a non-negative integer, got {v:?}"))),
            None => Ok(None),
        }
    };
    Ok(PartialConfig {
        dataset_size: parse_usize("SEQBENCH_SIZE")?,
        output: lookup("SEQBENCH_FORMAT"),
        log_dir: lookup("SEQBENCH_LOG_DIR").map(PathBuf::from),
        log_level: lookup("SEQBENCH_LOG_LEVEL"),
        log_retention: parse_usize("SEQBENCH_LOG_RETENTION")?,
    })
}

/// Resolves the full config from the CLI layer, process env and config files.
///
/// # Errors
/// Returns an error for an unreadable explicit config file or a malformed env value.
pub fn load_config(cli: PartialConfig, explicit: Option<&Path>) -> Result<BenchConfig, BenchError> {
    let env = env_layer(|k| std::env::var(k).ok())?;
    let file = file_layer(explicit, &discovered_config_paths())?;
    Ok(cli.or(env).or(file).resolve())
}
