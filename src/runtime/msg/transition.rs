use serde::Serialize;

use crate::runtime::EnvError;
use crate::types::resource::ResourceRecord;

/// The outcome of one resources fetch.
///
/// Serialized the way the web store names its actions:
/// `{ "type": "FETCH_SUCCESS", "payload": [...] }`.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(tag = "type", content = "payload")]
pub enum Transition {
    #[serde(rename = "FETCH_SUCCESS")]
    FetchSuccess(Vec<ResourceRecord>),
    #[serde(rename = "FETCH_FAILURE")]
    FetchFailure(EnvError),
}
