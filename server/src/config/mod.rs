use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::apply_security_headers;

const DEFAULT_DATABASE_URL: &str = "sqlite://bookings.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_PORT: u16 = 3001;
// Resolved at build time so the client is found whatever the working directory.
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/web");

/// Process-wide settings, read once at startup and handed to whoever needs them.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    pub cors_allowed_origins: String,
    pub static_dir: PathBuf,
    pub production: bool,
    pub seed_sample_events: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            max_connections: parse_or_default("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
            host: parse_or_default("HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: parse_or_default("PORT", DEFAULT_PORT),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| cors::ANY_ORIGIN.to_string()),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR)),
            production: env::var("RUST_ENV")
                .map(|v| v.eq_ignore_ascii_case("production"))
                .unwrap_or(false),
            seed_sample_events: parse_or_default("SEED_SAMPLE_EVENTS", false),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_allowed_origins: cors::ANY_ORIGIN.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            production: false,
            seed_sample_events: false,
        }
    }
}

fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_value<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Config: invalid {} '{}' ({}), using {}", key, raw, e, default);
            default
        }
    }
}
