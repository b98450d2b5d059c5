//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path of the JSON document holding live + logs
    pub storage_path: String,

    /// Directory for decoded snapshot images
    pub snapshot_dir: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            storage_path: env::var("STORAGE_PATH")
                .unwrap_or_else(|_| "data/detections.json".to_string()),

            snapshot_dir: env::var("SNAPSHOT_DIR")
                .unwrap_or_else(|_| "snapshots".to_string()),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
