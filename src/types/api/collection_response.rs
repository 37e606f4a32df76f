use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::types::deserialize_single_as_vec;

/// Body of a listing endpoint: an array, a lone item or `null`.
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(transparent, bound(deserialize = "T: DeserializeOwned"))]
pub struct CollectionResponse<T> {
    #[serde(deserialize_with = "deserialize_single_as_vec")]
    pub items: Vec<T>,
}
