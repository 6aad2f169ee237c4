use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_DATA_FILE: &str = "careers.json";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON document holding every career record.
    pub data_file: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_file: std::env::var("CAREERS_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE)),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    raw.unwrap_or("8080")
        .parse::<u16>()
        .context("PORT must be a valid port number")
}
