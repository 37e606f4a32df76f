use futures::Future;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::Request;
use hub_core::runtime::{ConditionalSend, Env, EnvError, EnvFutureExt, TryEnvFuture};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "hub_env_native=debug,info";

lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("http client build failed");
}

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// [`Env`] for native hosts, backed by `reqwest` and the ambient `tokio` runtime.
#[derive(Debug, PartialEq)]
pub enum NativeEnv {}

impl Env for NativeEnv {
    fn fetch<
        IN: Serialize + ConditionalSend + 'static,
        OUT: for<'de> Deserialize<'de> + ConditionalSend + 'static,
    >(
        request: Request<IN>,
    ) -> TryEnvFuture<OUT> {
        let (parts, body) = request.into_parts();
        let body = serde_json::to_string(&body);
        async move {
            let mut request = CLIENT
                .request(parts.method, parts.uri.to_string())
                .headers(parts.headers);
            match body? {
                body if body != "null" => {
                    request = request
                        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                        .body(body);
                }
                _ => {}
            };
            let response = request
                .send()
                .await
                .map_err(|error| EnvError::Fetch(error.to_string()))?;
            if !response.status().is_success() {
                return Err(EnvError::HttpStatusCode(response.status().as_u16()));
            }
            let body = response
                .bytes()
                .await
                .map_err(|error| EnvError::Fetch(error.to_string()))?;
            Ok(serde_json::from_slice(&body)?)
        }
        .boxed_env()
    }
    fn exec_concurrent<F: Future<Output = ()> + ConditionalSend + 'static>(future: F) {
        tokio::spawn(future);
    }
    fn log(message: String) {
        debug!("{message}");
    }
}
