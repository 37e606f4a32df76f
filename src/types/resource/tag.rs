use serde::{Deserialize, Serialize};

use crate::types::{null_as_default, number_as_u64};

/// A tag resources can be filtered by, as listed by `GET /tags`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Tag {
    #[serde(rename = "ID", default, deserialize_with = "number_as_u64")]
    pub id: u64,
    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,
}
