//! Adapter configuration.
//!
//! The only setting is the time zone timestamps are rendered in. Sources, from
//! lowest to highest precedence: the built-in default, an optional file, and
//! `ROWBIND_*` environment variables.

use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, RowbindError};

pub const DEFAULT_TIME_ZONE: &str = "Europe/London";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdapterConfig {
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.to_owned()
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self { time_zone: default_time_zone() }
    }
}

impl AdapterConfig {
    pub fn with_time_zone(time_zone: impl Into<String>) -> Self {
        Self { time_zone: time_zone.into() }
    }

    /// Loads the configuration, reading `path` when given. The file's format
    /// follows its extension.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder().set_default("time_zone", DEFAULT_TIME_ZONE)?;
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }
        let settings = builder
            .add_source(Environment::with_prefix("ROWBIND"))
            .build()?
            .try_deserialize::<AdapterConfig>()?;
        debug!(time_zone = %settings.time_zone, "configuration loaded");
        Ok(settings)
    }

    pub fn zone(&self) -> Result<Tz> {
        self.time_zone
            .parse::<Tz>()
            .map_err(|e| RowbindError::Config(format!("Unknown time zone {}: {}", self.time_zone, e)))
    }
}
