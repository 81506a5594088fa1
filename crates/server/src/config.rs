use std::path::Path;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub bind_addr: String,
    pub max_body_bytes: usize,
    pub cors_permissive: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:4000".into(),
            max_body_bytes: 64 * 1024,
            cors_permissive: true,
        }
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE))
}

/// Defaults, then the optional TOML file, then `SERVER_BIND`, then `APP__*`
/// variables (e.g. `APP__BIND_ADDR`, `APP__MAX_BODY_BYTES`).
pub fn load_settings_from(path: &Path) -> anyhow::Result<Settings> {
    let defaults = Settings::default();

    let mut builder = Config::builder()
        .set_default("bind_addr", defaults.bind_addr)?
        .set_default("max_body_bytes", defaults.max_body_bytes as u64)?
        .set_default("cors_permissive", defaults.cors_permissive)?
        .add_source(File::from(path).format(FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .try_parsing(true),
        );

    if std::env::var_os("APP__BIND_ADDR").is_none() {
        if let Ok(v) = std::env::var("SERVER_BIND") {
            builder = builder.set_override("bind_addr", v)?;
        }
    }

    let settings: Settings = builder
        .build()
        .with_context(|| format!("failed to load settings from '{}'", path.display()))?
        .try_deserialize()
        .context("invalid server settings")?;

    if settings.max_body_bytes == 0 {
        anyhow::bail!("max_body_bytes must be greater than zero");
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
