//! Serde helpers for YAML nulls (`key: ~`, `key: null`, or a bare `key:`).

use serde::{Deserialize, Deserializer};

/// A null value reads as the type's default, same as a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keeps a present key distinct from a missing one: with `#[serde(default)]`
/// a missing key is `None` and a present null is `Some(None)`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
