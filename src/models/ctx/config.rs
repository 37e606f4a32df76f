use std::convert::TryFrom;
use std::env;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{API_URL_ENV_VAR, DEFAULT_API_URL, RESOURCES_PATH, TAGS_PATH};
use crate::models::ctx::ConfigError;

/// Where the hub API lives.
///
/// (De)serialized as the bare API url string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(try_from = "Url", into = "Url")]
pub struct Config {
    api_url: Url,
    resources_url: Url,
    tags_url: Url,
}

impl Config {
    /// The path of `api_url` always ends with `/`, so `http://host/api`
    /// serves resources from `http://host/api/resources`.
    pub fn new(mut api_url: Url) -> Result<Self, ConfigError> {
        if api_url.cannot_be_a_base() {
            return Err(ConfigError::NotABaseUrl(api_url));
        }
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }
        let resources_url = api_url.join(RESOURCES_PATH)?;
        let tags_url = api_url.join(TAGS_PATH)?;
        Ok(Config {
            api_url,
            resources_url,
            tags_url,
        })
    }
    /// Reads the API url from the `API_URL` environment variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_api_url_var(env::var(API_URL_ENV_VAR).ok())
    }
    /// Falls back to [`DEFAULT_API_URL`] when the value is missing or blank.
    pub fn from_api_url_var(value: Option<String>) -> Result<Self, ConfigError> {
        match value.as_deref().map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => {
                let api_url = Url::parse(value).map_err(|source| ConfigError::InvalidApiUrl {
                    value: value.to_owned(),
                    source,
                })?;
                Self::new(api_url)
            }
            None => Self::new(DEFAULT_API_URL.to_owned()),
        }
    }
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
    pub fn resources_url(&self) -> &Url {
        &self.resources_url
    }
    pub fn tags_url(&self) -> &Url {
        &self.tags_url
    }
}

impl TryFrom<Url> for Config {
    type Error = ConfigError;
    fn try_from(api_url: Url) -> Result<Self, Self::Error> {
        Config::new(api_url)
    }
}

impl From<Config> for Url {
    fn from(config: Config) -> Self {
        config.api_url
    }
}
