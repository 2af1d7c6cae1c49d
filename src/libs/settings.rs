use crate::libs::error::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "config/tablesmith.toml";
pub const ENV_PREFIX: &str = "TABLESMITH";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_user() -> String {
    "root".to_string()
}

fn default_password() -> String {
    "admin".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    3306
}

fn default_name() -> String {
    "rest".to_string()
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            user: default_user(),
            password: default_password(),
            host: default_host(),
            port: default_port(),
            name: default_name(),
        }
    }
}

impl DatabaseSettings {
    /// Connection URL for the configured database.
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub database: DatabaseSettings,
    /// Directory holding `<table>.json` descriptions.
    #[serde(default = "default_structures_dir")]
    pub structures_dir: PathBuf,
}

fn default_structures_dir() -> PathBuf {
    PathBuf::from("./jsons/structures/")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseSettings::default(),
            structures_dir: default_structures_dir(),
        }
    }
}

impl Settings {
    /// Load from `config/tablesmith.toml` (optional) overlaid with `TABLESMITH__*` env vars.
    pub fn load() -> Result<Self> {
        Self::load_from(SETTINGS_FILE)
    }

    pub fn load_from(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;
        Ok(settings.try_deserialize::<Settings>()?)
    }
}
