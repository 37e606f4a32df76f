use serde::{Deserialize, Serialize};

use crate::types::{null_as_default, number_as_u64};

/// A catalog resource (task or pipeline) as listed by the hub API.
///
/// Parsing is lenient: missing or `null` fields take their default, any number
/// is accepted for `Downloads`, and fields the API may add are ignored.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "number_as_u64")]
    pub downloads: u64,
    /// The resource definition, serialized as YAML.
    #[serde(rename = "YAML", default, deserialize_with = "null_as_default")]
    pub yaml: String,
}
