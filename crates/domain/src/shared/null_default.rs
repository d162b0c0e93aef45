//! Lenient decoding of nullable fields.

use serde::{Deserialize, Deserializer};

/// Deserialize a field, treating an explicit JSON `null` the same as a
/// missing field.
///
/// Pair with `#[serde(default)]` so that both absent and `null` values end
/// up as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a list whose elements may be `null`, replacing each `null`
/// element with `T::default()`. A `null` list becomes empty.
pub fn null_elements_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(optional_null_elements_as_default(deserializer)?.unwrap_or_default())
}

/// Like [`null_elements_as_default`], but keeps a `null` list as `None`.
pub fn optional_null_elements_as_default<'de, D, T>(
    deserializer: D,
) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.map(|items| items.into_iter().map(Option::unwrap_or_default).collect()))
}
