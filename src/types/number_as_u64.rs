use serde::de::{Deserializer, Error, Visitor};
use std::fmt;

/// Reads any JSON number (or `null`) as a count.
///
/// Negative values become `0`, fractions are truncated and values past
/// `u64::MAX` saturate.
pub fn number_as_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct NumberAsU64Visitor;

    impl<'de> Visitor<'de> for NumberAsU64Visitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "a number or null")
        }
        fn visit_u64<E: Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(value)
        }
        fn visit_i64<E: Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(u64::try_from(value).unwrap_or_default())
        }
        fn visit_f64<E: Error>(self, value: f64) -> Result<Self::Value, E> {
            // `as` saturates and maps NaN to 0
            Ok(value as u64)
        }
        fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
            Ok(0)
        }
        fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
            Ok(0)
        }
    }

    deserializer.deserialize_any(NumberAsU64Visitor)
}
