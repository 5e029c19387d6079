use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use notepin_core::error::{NotepinError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NotepinError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(NotepinError::Config("server.port must not be 0".into()));
        }
        self.host
            .parse::<IpAddr>()
            .map_err(|e| NotepinError::Config(format!("server.host must be an IP address: {e}")))?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| NotepinError::Config(format!("server.host must be an IP address: {e}")))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    4000
}
