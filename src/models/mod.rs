//! Data models for the ticketing API.
//!
//! These models match the JSON records the ticketing backend returns, field names included.

mod dataset;
mod event;
mod ticket;
mod user;

pub use dataset::*;
pub use event::*;
pub use ticket::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

/// Nullable text columns arrive as `null`; read them as empty strings.
pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
