use anyhow::Result;
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;
use url::Url;

use crate::error::FolioError;

pub static CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_origin")]
    pub api_origin: String,
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_origin() -> String {
    "http://localhost:8000".into()
}

fn default_thumbnail_size() -> u32 {
    800
}

fn default_request_timeout_secs() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_origin: default_api_origin(),
            thumbnail_size: default_thumbnail_size(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    pub fn get_config() -> Result<Self> {
        let config: Self = Figment::new()
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("FOLIO_"))
            .extract()?;
        Ok(config.validated()?)
    }

    /// Check the origin is an absolute http(s) url and drop any trailing slash
    pub fn validated(mut self) -> Result<Self, FolioError> {
        let origin = self.api_origin.trim().trim_end_matches('/').to_owned();
        match Url::parse(&origin) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
                self.api_origin = origin;
                Ok(self)
            }
            _ => Err(FolioError::ConfigOrigin(self.api_origin)),
        }
    }
}
