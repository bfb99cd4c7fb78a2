//! Handles settings for the application. Configuration is written in
//! `settings.toml`.
//!
//! The file is optional; every key has a default.
use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .add_source(File::with_name("settings").required(false))
            .build()?;

        settings.try_deserialize()
    }
}
