//! Configuration loader
//!
//! Builds a [`ClientConfig`] for the command-line client.
//!
//! ## Loading Strategy
//! 1. An explicit `--config <file>` is loaded directly
//! 2. Otherwise environment variables are tried first
//! 3. If `OBSIDIAN_API_KEY` is missing, falls back to a probed config file
//! 4. Command-line flags are applied on top of whatever was loaded
//!
//! ## Environment Variables
//! - `OBSIDIAN_API_KEY`: API key (required for the environment source)
//! - `OBSIDIAN_API_URL`: Server address
//! - `OBSIDIAN_API_TIMEOUT_SECS`: Per-request transport timeout
//! - `OBSIDIAN_API_INSECURE`: Accept self-signed certificates (true/false)
//! - `OBSIDIAN_API_CA_CERT`: PEM file with an extra trusted root
//!
//! ## File Locations
//! The loader probes, in order:
//! 1. `./obsidian-rest.toml` or `./obsidian-rest.json`
//! 2. The same names next to the executable

use std::path::{Path, PathBuf};

use obsidian_rest_client::constants::DEFAULT_BASE_URL;
use obsidian_rest_client::{ClientConfig, ObsidianError, Result, TransportSettings};

pub const ENV_API_KEY: &str = "OBSIDIAN_API_KEY";
pub const ENV_API_URL: &str = "OBSIDIAN_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "OBSIDIAN_API_TIMEOUT_SECS";
pub const ENV_INSECURE: &str = "OBSIDIAN_API_INSECURE";
pub const ENV_CA_CERT: &str = "OBSIDIAN_API_CA_CERT";

const CONFIG_FILE_STEM: &str = "obsidian-rest";

/// Values given on the command line; each one that is set wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub insecure: bool,
    pub ca_cert: Option<PathBuf>,
}

impl Overrides {
    pub fn apply(self, mut config: ClientConfig) -> ClientConfig {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.transport.timeout_secs = timeout_secs;
        }
        if self.insecure {
            config.transport.accept_invalid_certs = true;
        }
        if let Some(ca_cert) = self.ca_cert {
            config.transport.ca_cert_path = Some(ca_cert);
        }
        config
    }
}

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ObsidianError::Config` if no source yields an API key, or a
/// file or variable cannot be parsed.
pub fn load(path: Option<PathBuf>, overrides: Overrides) -> Result<ClientConfig> {
    let config = match path {
        Some(path) => load_from_file(Some(path))?,
        None => match load_from_env() {
            Ok(config) => {
                tracing::info!("Configuration loaded from environment variables");
                config
            }
            Err(e) => {
                tracing::debug!(error = %e, "Failed to load from environment, trying file");
                load_from_file(None)?
            }
        },
    };

    Ok(overrides.apply(config))
}

/// Load configuration from the process environment
///
/// # Errors
/// Returns `ObsidianError::Config` if `OBSIDIAN_API_KEY` is missing or a
/// numeric variable is invalid.
pub fn load_from_env() -> Result<ClientConfig> {
    from_vars(|key| std::env::var(key).ok())
}

/// Build a configuration from an arbitrary variable lookup
fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<ClientConfig> {
    let api_key = lookup(ENV_API_KEY).filter(|k| !k.is_empty()).ok_or_else(|| {
        ObsidianError::Config(format!("Missing required environment variable: {}", ENV_API_KEY))
    })?;

    let mut transport = TransportSettings::default();
    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        transport.timeout_secs = raw.trim().parse::<u64>().map_err(|e| {
            ObsidianError::Config(format!("Invalid {}: {}", ENV_TIMEOUT_SECS, e))
        })?;
    }
    transport.accept_invalid_certs =
        lookup(ENV_INSECURE).map(|raw| parse_bool(&raw)).unwrap_or(false);
    transport.ca_cert_path = lookup(ENV_CA_CERT).filter(|p| !p.is_empty()).map(PathBuf::from);

    Ok(ClientConfig::new(api_key)
        .with_base_url(lookup(ENV_API_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
        .with_transport(transport))
}

/// Load configuration from a TOML or JSON file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `ObsidianError::Config` if the file is missing, unreadable or
/// malformed, or has no API key.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ObsidianError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ObsidianError::Config(format!(
                "{} is not set and no {}.toml or {}.json was found",
                ENV_API_KEY, CONFIG_FILE_STEM, CONFIG_FILE_STEM
            ))
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ObsidianError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    if config.api_key.is_empty() {
        return Err(ObsidianError::Config(format!(
            "Config file {} has no api_key",
            config_path.display()
        )));
    }
    Ok(config)
}

/// Parse configuration by file extension (`.toml` or `.json`)
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ObsidianError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ObsidianError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ObsidianError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// First existing config file among the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| {
            ["toml", "json"].map(|ext| dir.join(format!("{}.{}", CONFIG_FILE_STEM, ext)))
        })
        .find(|path| path.exists())
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn parse_bool(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
