use serde::de::{DeserializeOwned, Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;

/// Accepts a JSON array, a single value or `null`, always yielding a `Vec`.
///
/// `null` is an empty collection. Errors come from the element that failed to
/// parse, so their message names the offending field.
pub fn deserialize_single_as_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(vec![]),
        Value::Array(values) => values
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(D::Error::custom),
        value => serde_json::from_value(value)
            .map(|value| vec![value])
            .map_err(D::Error::custom),
    }
}
