use serde::Serialize;

use crate::models::common::eq_update;
use crate::models::ctx::Config;
use crate::runtime::msg::{Action, ActionCtx, Msg};
use crate::runtime::{Effects, Env, Update};

/// State shared by every other slice of the model.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct Ctx {
    pub config: Config,
}

impl Ctx {
    pub fn new(config: Config) -> Self {
        Ctx { config }
    }
}

impl<E: Env> Update<E> for Ctx {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Ctx(ActionCtx::UpdateConfig(config))) => {
                let config_effects = eq_update(&mut self.config, config.to_owned());
                if config_effects.has_changed {
                    E::log(format!("API url set to {}", self.config.api_url()));
                }
                config_effects
            }
            _ => Effects::none().unchanged(),
        }
    }
}
