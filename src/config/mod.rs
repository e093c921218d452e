mod backend;
mod basic;

pub use backend::BackendConfig;
pub use basic::BasicConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Store and logging settings (see `basic` table in vocalis.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Native backend settings (see `backend` table in vocalis.toml).
    #[serde(default)]
    pub backend: BackendConfig,
}

const DEFAULT_CONFIG_FILE: &str = "vocalis.toml";
const ENV_PREFIX: &str = "VOCALIS_";

impl Config {
    /// Builds a Figment that merges defaults, `vocalis.toml` if present, then
    /// `VOCALIS_`-prefixed env vars (`__` separates tables, e.g. `VOCALIS_BASIC__LOGLEVEL`).
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
