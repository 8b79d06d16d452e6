//! Demo host configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {value}")]
    InvalidPort { value: String },

    #[error("site directory not found: {}", .path.display())]
    MissingSiteDir { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub site_dir: PathBuf,
}

impl SiteConfig {
    /// Build the host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: directory with `index.html`, the stylesheet, and the
    ///   wasm bundle under `pkg/`; default `site/` next to this manifest
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_dir = std::env::var("SITE_DIR").map_or_else(|_| default_site_dir(), PathBuf::from);
        if !site_dir.is_dir() {
            return Err(ConfigError::MissingSiteDir { path: site_dir });
        }
        Ok(Self { port, site_dir })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

pub fn default_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site")
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: value.to_string() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
