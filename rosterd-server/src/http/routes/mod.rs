//! Route handlers organized by resource

use serde::{Deserialize, Deserializer};

pub mod heroes;
pub mod root;
pub mod teams;

/// Deserialize helper for PATCH bodies: keeps `"field": null` (clear)
/// distinguishable from an absent field (keep) when paired with
/// `#[serde(default)]` on an `Option<Option<T>>` field.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
