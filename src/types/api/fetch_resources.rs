use futures::{future, TryFutureExt};
use url::Url;

use crate::constants::RESOURCE_PATH;
use crate::runtime::{Env, EnvError, EnvFutureExt, TryEnvFuture};
use crate::types::api::{fetch_api, CollectionResponse};
use crate::types::resource::{ResourceRecord, Tag};

pub fn fetch_resources<E: Env>(endpoint: &Url) -> TryEnvFuture<Vec<ResourceRecord>> {
    fetch_api::<E, CollectionResponse<ResourceRecord>>(endpoint)
        .map_ok(|response| response.items)
        .boxed_env()
}

/// `GET {api_url}/resource/{id}`
pub fn fetch_resource<E: Env>(api_url: &Url, id: u64) -> TryEnvFuture<ResourceRecord> {
    match api_url.join(&format!("{RESOURCE_PATH}/{id}")) {
        Ok(endpoint) => fetch_api::<E, ResourceRecord>(&endpoint),
        Err(error) => future::err(EnvError::Fetch(error.to_string())).boxed_env(),
    }
}

pub fn fetch_tags<E: Env>(endpoint: &Url) -> TryEnvFuture<Vec<Tag>> {
    fetch_api::<E, CollectionResponse<Tag>>(endpoint)
        .map_ok(|response| response.items)
        .boxed_env()
}
