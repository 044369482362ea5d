//! Configuration for cogni-sp
//!
//! Bootstrap-only configuration: bind address and database location. Values
//! resolve command line (and environment, via clap) over an optional TOML
//! file over built-in defaults. Everything else the service needs lives in
//! the database.

use clap::Parser;
use cogni_common::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5001;

/// Command-line arguments for cogni-sp
#[derive(Parser, Debug, Default)]
#[command(name = "cogni-sp")]
#[command(about = "CogniGrasp study processor service")]
#[command(version)]
pub struct Args {
    /// Host address to bind
    #[arg(long, env = "COGNI_SP_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "COGNI_SP_PORT")]
    pub port: Option<u16>,

    /// Path to the SQLite database file
    #[arg(short, long, env = "COGNI_SP_DATABASE")]
    pub database: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "COGNI_SP_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Bootstrap configuration loaded from a TOML file
///
/// Minimal by design: only what the process needs before the database is
/// open. All fields are optional; missing values fall through to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
}

impl ServiceConfig {
    /// Resolve configuration following the priority order
    /// CLI/environment, then TOML file, then built-in defaults.
    ///
    /// An explicitly named config file must exist and parse; the default
    /// config location is only consulted when present.
    pub fn resolve(args: &Args) -> Result<Self> {
        let toml_config = match &args.config {
            Some(path) => {
                let config = load_toml(path)?;
                info!("Loaded configuration from {}", path.display());
                config
            }
            None => match default_config_path() {
                Some(path) if path.exists() => {
                    let config = load_toml(&path)?;
                    info!("Loaded configuration from {}", path.display());
                    config
                }
                _ => TomlConfig::default(),
            },
        };

        let host = args
            .host
            .clone()
            .or(toml_config.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = args.port.or(toml_config.port).unwrap_or(DEFAULT_PORT);
        let database_path = args
            .database
            .clone()
            .or(toml_config.database_path)
            .unwrap_or_else(default_database_path);

        Ok(ServiceConfig {
            host,
            port,
            database_path,
        })
    }

    /// Socket address string for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn load_toml(path: &Path) -> Result<TomlConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "cannot read config file {}: {}",
            path.display(),
            e
        ))
    })?;
    toml::from_str(&raw).map_err(|e| {
        Error::Config(format!(
            "cannot parse config file {}: {}",
            path.display(),
            e
        ))
    })
}

/// Platform config file location (e.g. `~/.config/cognigrasp/config.toml`)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cognigrasp").join("config.toml"))
}

/// Platform data folder with the default database file inside
/// (e.g. `~/.local/share/cognigrasp/cognigrasp.db`)
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("cognigrasp"))
        .unwrap_or_else(|| PathBuf::from("./cognigrasp_data"))
        .join("cognigrasp.db")
}
