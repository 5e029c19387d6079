//! API config loader (strict YAML + `PORT` override).

pub mod schema;

use std::{env, fs, path::Path};

use notepin_core::error::{NotepinError, Result};

pub use schema::{ApiConfig, ServerSection};

/// Config file read when `NOTEPIN_CONFIG` is unset. Optional.
pub const DEFAULT_CONFIG_PATH: &str = "notepin.yaml";

/// Resolve the runtime config: file (if any), then the `PORT` env var.
pub fn load() -> Result<ApiConfig> {
    let cfg = match env::var("NOTEPIN_CONFIG") {
        Ok(path) => load_from_file(&path)?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
        Err(_) => ApiConfig::default(),
    };
    apply_port_override(cfg, env::var("PORT").ok().as_deref())
}

pub fn load_from_file(path: &str) -> Result<ApiConfig> {
    let s = fs::read_to_string(path).map_err(|e| {
        NotepinError::Config(format!("read config failed ({path}): {e}"))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ApiConfig> {
    let cfg: ApiConfig = serde_yaml::from_str(s)
        .map_err(|e| NotepinError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Apply a `PORT` value on top of the file config. Blank means unset.
pub fn apply_port_override(mut cfg: ApiConfig, port: Option<&str>) -> Result<ApiConfig> {
    let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(cfg);
    };
    cfg.server.port = raw
        .parse()
        .map_err(|e| NotepinError::Config(format!("PORT must be a port number: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
