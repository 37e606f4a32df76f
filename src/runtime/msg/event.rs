use serde::Serialize;

use crate::runtime::EnvError;

/// Event messages
///
/// Those messages are meant to be dispatched by the `hub-core` crate and
/// handled by the users of the `hub-core` crate.
#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
#[serde(tag = "event", content = "args")]
pub enum Event {
    ResourcesFetched { count: usize },
    ResourcesFetchFailed { error: EnvError },
}
