//! Helpers for partial-update payloads.
//!
//! Nullable columns are patched through `Option<Option<T>>` fields:
//! an absent key leaves the column untouched (`None`), an explicit
//! `null` clears it (`Some(None)`), and a value replaces it (`Some(Some(v))`).
//! Serde collapses `null` and "absent" into `None` by default, so such
//! fields must combine `#[serde(default)]` with this deserializer.

use serde::{Deserialize, Deserializer};

/// Deserialize a present field (including `null`) as `Some(..)`.
///
/// ```ignore
/// #[serde(default, deserialize_with = "deserialize_some")]
/// pub descricao: Option<Option<String>>,
/// ```
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
