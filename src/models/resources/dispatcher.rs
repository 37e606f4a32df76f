use derivative::Derivative;
use futures::FutureExt;
use std::marker::PhantomData;
use url::Url;

use crate::models::ctx::Config;
use crate::runtime::msg::{Internal, Msg, Transition};
use crate::runtime::{ConditionalSend, Effect, Env, EnvFuture, EnvFutureExt};
use crate::types::api::fetch_resources;

/// Fetches the resource list and turns the outcome into a [`Transition`].
///
/// Every invocation performs exactly one request: nothing is cached, retried
/// or deduplicated, and a request in flight cannot be cancelled.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct ResourcesDispatcher<E: Env> {
    endpoint: Url,
    #[derivative(Debug = "ignore")]
    env: PhantomData<E>,
}

impl<E: Env + 'static> ResourcesDispatcher<E> {
    pub fn new(config: &Config) -> Self {
        ResourcesDispatcher {
            endpoint: config.resources_url().to_owned(),
            env: PhantomData,
        }
    }
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
    /// Resolves to `FetchSuccess` with the parsed body, or to `FetchFailure`
    /// for network, status and parse errors alike.
    pub fn fetch(&self) -> EnvFuture<'static, Transition> {
        let endpoint = self.endpoint.to_owned();
        fetch_resources::<E>(&self.endpoint)
            .map(move |result| match result {
                Ok(records) => {
                    E::log(format!(
                        "Fetched {} resources from {endpoint}",
                        records.len()
                    ));
                    Transition::FetchSuccess(records)
                }
                Err(error) => {
                    E::log(format!("Failed to fetch resources from {endpoint}: {error}"));
                    Transition::FetchFailure(error)
                }
            })
            .boxed_env()
    }
    /// Calls `dispatch` exactly once, with the transition [`fetch`] resolves to.
    ///
    /// [`fetch`]: ResourcesDispatcher::fetch
    pub fn dispatch<D>(&self, dispatch: D) -> EnvFuture<'static, ()>
    where
        D: FnOnce(Transition) + ConditionalSend + 'static,
    {
        self.fetch().map(dispatch).boxed_env()
    }
    pub fn effect(&self) -> Effect {
        Effect::Future(
            self.fetch()
                .map(|transition| Msg::Internal(Internal::Transition(transition)))
                .boxed_env(),
        )
    }
}
