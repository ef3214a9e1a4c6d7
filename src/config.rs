//! Environment-driven server configuration.

use std::env;
use std::net::SocketAddr;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

/// Server configuration.
///
/// # Environment Variables
///
/// - `HOST`: bind host (default: 0.0.0.0)
/// - `PORT`: bind port (default: 8080)
/// - `OPENAI_API_KEY`: upstream credential; when unset the generation
///   endpoint reports 500 as the contract requires
/// - `OPENAI_MODEL`: upstream model name (default: gpt-4.1-mini)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| default_host()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_port),
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| default_model()),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            openai_api_key: None,
            openai_model: default_model(),
        }
    }
}
