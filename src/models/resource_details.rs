use futures::FutureExt;
use serde::Serialize;

use crate::models::common::{eq_update, Loadable};
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionLoad, Internal, Msg};
use crate::runtime::{Effect, Effects, Env, EnvError, EnvFutureExt, UpdateWithCtx};
use crate::types::api::fetch_resource;
use crate::types::resource::ResourceRecord;

/// A single resource, loaded by id.
#[derive(Clone, Default, PartialEq, Serialize, Debug)]
pub struct ResourceDetails {
    pub selected: Option<u64>,
    pub resource: Option<Loadable<ResourceRecord, EnvError>>,
}

impl<E: Env + 'static> UpdateWithCtx<E> for ResourceDetails {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::ResourceDetails(id))) => {
                let selected_effects = eq_update(&mut self.selected, Some(*id));
                let resource_effects = eq_update(&mut self.resource, Some(Loadable::Loading));
                Effects::one(resource_from_api::<E>(ctx, *id))
                    .unchanged()
                    .join(selected_effects)
                    .join(resource_effects)
            }
            // Results of an earlier selection are dropped.
            Msg::Internal(Internal::ResourceDetailsResult(id, result))
                if self.selected == Some(*id) =>
            {
                if let Err(error) = result {
                    E::log(format!("Failed to fetch resource {id}: {error}"));
                }
                eq_update(&mut self.resource, Some(result.to_owned().into()))
            }
            _ => Effects::none().unchanged(),
        }
    }
}

fn resource_from_api<E: Env + 'static>(ctx: &Ctx, id: u64) -> Effect {
    Effect::Future(
        fetch_resource::<E>(ctx.config.api_url(), id)
            .map(move |result| Msg::Internal(Internal::ResourceDetailsResult(id, result)))
            .boxed_env(),
    )
}
