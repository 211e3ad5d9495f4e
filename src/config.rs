use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Default name of the config file looked up in the working directory.
/// Overridable with the `VELLUM_CONFIG` environment variable.
const CONFIG_FILE: &str = "vellum.yaml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the TCP listener binds to.
    pub listen_addr: String,

    /// Directory templates are loaded from.
    pub template_root: PathBuf,

    /// Byte budget for the single request read. Requests larger than this
    /// are truncated, never reassembled.
    pub read_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            template_root: PathBuf::from("./templates"),
            read_buffer_size: 1024,
        }
    }
}

impl Config {
    /// Loads configuration from the YAML config file, falling back to the
    /// defaults when no file exists. A `LISTEN` environment variable
    /// overrides the configured listen address either way.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("VELLUM_CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_yaml::from_str(&raw)
                .with_context(|| format!("invalid config file {}", path))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e).with_context(|| format!("failed to read {}", path)),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }

        Ok(cfg)
    }
}
