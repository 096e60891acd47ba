//! Process configuration loaded via OrthoConfig.
//!
//! Values come from `HOTEL_API_*` environment variables, configuration files,
//! or command-line flags. Everything except the JWT secret has a default.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::security::DEFAULT_BCRYPT_COST;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;

/// Errors raised while resolving configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// No signing secret was configured.
    #[error("HOTEL_API_JWT_SECRET must be set to a non-empty value")]
    MissingJwtSecret,
    /// The host is not an IP address.
    #[error("invalid listen host `{host}`")]
    InvalidHost { host: String },
}

/// Server settings. Every layer is optional, so an empty environment still
/// loads and the missing secret is reported by [`AppSettings::jwt_secret`].
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HOTEL_API")]
#[serde(default)]
pub struct AppSettings {
    /// Listen address; defaults to `0.0.0.0`.
    pub host: Option<String>,
    /// Listen port; defaults to 4000.
    pub port: Option<u16>,
    /// PostgreSQL URL. Without one the server keeps data in memory.
    pub database_url: Option<String>,
    /// HMAC secret used to sign access tokens.
    pub jwt_secret: Option<String>,
    /// bcrypt work factor; defaults to 10.
    pub bcrypt_cost: Option<u32>,
    /// JSON array of hotels loaded into the catalogue at startup.
    pub hotel_seed_path: Option<PathBuf>,
}

impl AppSettings {
    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::InvalidHost {
            host: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Signing secret; startup aborts without one.
    pub fn jwt_secret(&self) -> Result<&str, SettingsError> {
        match self.jwt_secret.as_deref() {
            Some(secret) if !secret.is_empty() => Ok(secret),
            _ => Err(SettingsError::MissingJwtSecret),
        }
    }

    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST)
    }

    /// Non-blank database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
