//! Runtime settings from environment variables (`.env` is loaded by the binary).

use crate::error::ConfigError;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 5000));
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// `DATABASE_URL`. When unset the site runs on the in-memory store.
    pub database_url: Option<String>,
    /// `DB_SCHEMA`: PostgreSQL schema holding the site tables.
    pub db_schema: String,
    /// `DB_MAX_CONNECTIONS`
    pub max_connections: u32,
    /// `BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `SEED_ON_START`: insert default FAQs and gallery items into empty tables.
    pub seed_on_start: bool,
    /// `BODY_LIMIT_BYTES`: maximum request body size.
    pub body_limit_bytes: usize,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let db_schema = get("DB_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        if !is_identifier(&db_schema) {
            return Err(ConfigError::Invalid {
                key: "DB_SCHEMA",
                value: db_schema,
            });
        }

        Ok(Self {
            database_url: get("DATABASE_URL"),
            db_schema,
            max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            bind_addr: match get("BIND_ADDR") {
                Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                    key: "BIND_ADDR",
                    value: v,
                })?,
                None => DEFAULT_BIND_ADDR,
            },
            seed_on_start: match get("SEED_ON_START") {
                Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid {
                    key: "SEED_ON_START",
                    value: v,
                })?,
                None => true,
            },
            body_limit_bytes: parse_or(get("BODY_LIMIT_BYTES"), "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT_BYTES)?,
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            db_schema: DEFAULT_SCHEMA.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            bind_addr: DEFAULT_BIND_ADDR,
            seed_on_start: true,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key, value: v }),
        None => Ok(default),
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Unquoted PostgreSQL identifier: letter or underscore, then letters, digits, underscores.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && s.len() <= 63
}
