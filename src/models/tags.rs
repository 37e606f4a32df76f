use futures::FutureExt;
use serde::Serialize;

use crate::models::common::{eq_update, Loadable};
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionLoad, Internal, Msg};
use crate::runtime::{Effect, Effects, Env, EnvError, EnvFutureExt, UpdateWithCtx};
use crate::types::api::fetch_tags;
use crate::types::resource::Tag;

#[derive(Clone, Default, PartialEq, Serialize, Debug)]
pub struct Tags {
    pub content: Option<Loadable<Vec<Tag>, EnvError>>,
}

impl<E: Env + 'static> UpdateWithCtx<E> for Tags {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::Tags)) => {
                let content_effects = eq_update(&mut self.content, Some(Loadable::Loading));
                Effects::one(tags_from_api::<E>(ctx))
                    .unchanged()
                    .join(content_effects)
            }
            Msg::Internal(Internal::TagsResult(result)) => {
                if let Err(error) = result {
                    E::log(format!("Failed to fetch tags: {error}"));
                }
                eq_update(&mut self.content, Some(result.to_owned().into()))
            }
            _ => Effects::none().unchanged(),
        }
    }
}

fn tags_from_api<E: Env + 'static>(ctx: &Ctx) -> Effect {
    Effect::Future(
        fetch_tags::<E>(ctx.config.tags_url())
            .map(|result| Msg::Internal(Internal::TagsResult(result)))
            .boxed_env(),
    )
}
