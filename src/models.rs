//! Frontend Models
//!
//! Data structures matching backend records.

use serde::{Deserialize, Deserializer, Serialize};

/// Consumable stock item (matches the `/api/consommables/` payload)
///
/// The backend serializer leaves out or nulls fields freely, so the
/// numeric fields coerce anything non-numeric to 0 instead of failing
/// the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumable {
    #[serde(default)]
    pub id: u32,
    pub name: Option<String>,
    pub reference: Option<String>,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub price_eur: f64,
}

/// Accepts any JSON value and keeps it only if it reads as a number.
fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()).unwrap_or(0.0))
}
