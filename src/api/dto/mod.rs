//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with camelCase field names, matching the public wire
//! format. Request DTOs carry `validator` rules where applicable.

pub mod events;
pub mod health;
pub mod links;

/// Serde helper for optional RFC 3339 datetime fields.
///
/// Rejects values that are present but unparseable, so malformed datetimes
/// surface as deserialization errors at the boundary.
pub(crate) mod rfc3339_option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            None => Ok(None),
            Some(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(serde::de::Error::custom),
        }
    }
}
