use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SNAPLINK_GATEWAY_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "SNAPLINK_GATEWAY_BASE_URL";
pub const STORAGE_BACKEND_ENV: &str = "SNAPLINK_GATEWAY_STORAGE_BACKEND";
pub const SQLITE_DSN_ENV: &str = "SNAPLINK_GATEWAY_SQLITE_DSN";
pub const CODE_LENGTH_ENV: &str = "SNAPLINK_GATEWAY_CODE_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "SNAPLINK_GATEWAY_MAX_ATTEMPTS";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "sqlite")]
    Sqlite,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Sqlite => write!(f, "sqlite"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "snaplink-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Public base used when composing short URLs in responses.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = SQLITE_DSN_ENV, required_if_eq("storage", "sqlite"))]
    pub sqlite_dsn: Option<String>,

    #[arg(long, env = CODE_LENGTH_ENV, default_value_t = 6)]
    pub code_length: usize,

    #[arg(long, env = MAX_ATTEMPTS_ENV, default_value_t = 5)]
    pub max_attempts: u32,
}
