use crate::runtime::msg::Transition;
use crate::runtime::EnvError;
use crate::types::resource::{ResourceRecord, Tag};

//
// Those messages are meant to be dispatched and handled only inside hub-core crate
//
#[derive(Debug)]
pub enum Internal {
    /// Result of a resources fetch, waiting to be reduced.
    Transition(Transition),
    /// Result of fetching the resource with the given id.
    ResourceDetailsResult(u64, Result<ResourceRecord, EnvError>),
    TagsResult(Result<Vec<Tag>, EnvError>),
}
