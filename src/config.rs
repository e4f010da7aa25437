use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::error::{config_error, Error};

pub const RECENT_LIMIT: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Upstream tower API. When unset the session keeps towers in memory.
    pub server_url: Option<String>,
    pub recent_limit: usize,
    pub seed_examples: bool,
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_addr = SocketAddr::from(([127, 0, 0, 1], 3000));
        let bind_addr = parse_or(&lookup, "SIGINT_BIND_ADDR", default_addr)?;
        let recent_limit = parse_or(&lookup, "SIGINT_RECENT_LIMIT", RECENT_LIMIT)?;
        let seed_examples = parse_or(&lookup, "SIGINT_SEED_EXAMPLES", true)?;

        let server_url = lookup("SIGINT_SERVER_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Self {
            bind_addr,
            server_url,
            recent_limit,
            seed_examples,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => {
            value.trim().parse().map_err(|_| config_error(key))
        }
        _ => Ok(default),
    }
}
