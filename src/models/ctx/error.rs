use thiserror::Error;
use url::Url;

#[derive(Clone, PartialEq, Eq, Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API url {value:?}: {source}")]
    InvalidApiUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("API url {0} cannot be used as a base url")]
    NotABaseUrl(Url),
    #[error("Failed to build the resources url: {0}")]
    ResourcesUrl(#[from] url::ParseError),
}
