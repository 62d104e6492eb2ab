use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_CATALOG_PATH: &str = "data/clubs.json";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Generated catalog produced by `catalog-builder`.
    pub catalog_path: PathBuf,
    pub listen_addr: String,
}

impl Config {
    /// Optional:
    /// - `CLUBS_CATALOG_PATH` (default: "data/clubs.json")
    /// - `CLUBS_LISTEN_ADDR` (default: "127.0.0.1:3000")
    pub fn from_env() -> Result<Self, AppError> {
        let catalog_path = std::env::var("CLUBS_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH));
        if !catalog_path.is_file() {
            return Err(AppError::Config(format!(
                "catalog not found at {} (run catalog-builder first)",
                catalog_path.display()
            )));
        }

        let listen_addr = std::env::var("CLUBS_LISTEN_ADDR")
            .ok()
            .filter(|addr| !addr.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self {
            catalog_path,
            listen_addr,
        })
    }
}
