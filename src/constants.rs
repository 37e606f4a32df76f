use lazy_static::lazy_static;
use url::Url;

/// Environment variable holding the API base url.
pub const API_URL_ENV_VAR: &str = "API_URL";
/// Path of the resource list, relative to the API base url.
pub const RESOURCES_PATH: &str = "resources";
/// Path of a single resource, followed by its id.
pub const RESOURCE_PATH: &str = "resource";
pub const TAGS_PATH: &str = "tags";

lazy_static! {
    pub static ref DEFAULT_API_URL: Url =
        Url::parse("http://localhost:5000").expect("DEFAULT_API_URL parse failed");
}
