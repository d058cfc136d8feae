use std::fs;

use anyhow::{Context, Error, Result, anyhow};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::Deserialize;
use tracing::info;

use crate::models::destination::Destination;

const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub destinations_file: String,

    #[serde(default)]
    pub timezone: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

fn default_server_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let mut config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;

        if config.timezone.is_empty() {
            info!("TIMEZONE is not set, using default {}", DEFAULT_TIMEZONE);
            config.timezone = DEFAULT_TIMEZONE.to_string();
        }

        config.tz()?;

        Ok(config)
    }

    pub fn tz(&self) -> Result<Tz, Error> {
        self.timezone
            .parse()
            .map_err(|_| anyhow!("'{}' is not a valid IANA timezone", self.timezone))
    }

    pub fn load_destinations(&self) -> Result<Vec<Destination>, Error> {
        let raw = fs::read_to_string(&self.destinations_file).with_context(|| {
            format!("Failed to read destinations file {}", self.destinations_file)
        })?;

        let destinations = serde_json::from_str::<Vec<Destination>>(&raw).with_context(|| {
            format!(
                "Failed to parse destinations file {}",
                self.destinations_file
            )
        })?;

        Ok(destinations)
    }
}
