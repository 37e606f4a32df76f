use futures::future;
use http::Request;
use serde::Deserialize;
use url::Url;

use crate::runtime::{ConditionalSend, Env, EnvError, EnvFutureExt, TryEnvFuture};

/// `GET {url}` with no headers, query or body.
pub fn fetch_api<E, OUT>(url: &Url) -> TryEnvFuture<OUT>
where
    E: Env,
    OUT: for<'de> Deserialize<'de> + ConditionalSend + 'static,
{
    match Request::get(url.as_str()).body(()) {
        Ok(request) => E::fetch::<_, OUT>(request),
        Err(error) => future::err(EnvError::Fetch(error.to_string())).boxed_env(),
    }
}
