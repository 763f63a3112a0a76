// src/config.rs
use std::env;

/// Process-level settings, resolved once at startup.
/// Everything has a local-dev default so `cargo run` just works.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub db_path: String,
    pub schema_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("MOTORMART_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into()),
            db_path: env::var("MOTORMART_DB").unwrap_or_else(|_| "motormart.sqlite3".into()),
            schema_path: env::var("MOTORMART_SCHEMA").unwrap_or_else(|_| "sql/schema.sql".into()),
        }
    }
}
