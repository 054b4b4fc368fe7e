//! Server Configuration
//!
//! Settings read from the environment (after `.env` is loaded).

use anyhow::{Context, bail};
use base64::Engine;
use base64::engine::general_purpose;
use std::net::SocketAddr;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub listen_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    /// Decoded `PASSWORD_PEPPER`
    pub password_pepper: Option<Vec<u8>>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid DATABASE_MAX_CONNECTIONS: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        let listen_raw = get("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_raw
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid LISTEN_ADDR: {listen_raw}"))?;

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let password_pepper = match get("PASSWORD_PEPPER") {
            Some(encoded) => {
                let pepper = general_purpose::STANDARD
                    .decode(encoded.trim())
                    .context("PASSWORD_PEPPER must be base64")?;
                if pepper.is_empty() {
                    bail!("PASSWORD_PEPPER must not be empty");
                }
                Some(pepper)
            }
            None => None,
        };

        Ok(Self {
            database_url,
            max_connections,
            listen_addr,
            frontend_origins,
            password_pepper,
        })
    }
}
