use serde::Deserialize;

use crate::models::ctx::Config;

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionCtx {
    /// Replaces the configuration used by loads dispatched from now on.
    UpdateConfig(Config),
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "model", content = "args")]
pub enum ActionLoad {
    /// Fetches the resource list from the configured API.
    Resources,
    /// Fetches a single resource by its id.
    ResourceDetails(u64),
    Tags,
}

/// Action messages
///
/// Those messages are meant to be dispatched only by the users of the
/// `hub-core` crate and handled by the `hub-core` crate.
#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum Action {
    Ctx(ActionCtx),
    Load(ActionLoad),
}
