/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt::Display;

/// Converts a datetime into the integer UNIX timestamp TestRail expects
///
/// Sub-second parts are rounded half to even, so `12.5` becomes `12`
/// and `13.5` becomes `14`.
pub fn to_unix_timestamp(value: &DateTime<Utc>) -> i64 {
    let secs = value.timestamp() as f64 + f64::from(value.timestamp_subsec_nanos()) / 1e9;
    secs.round_ties_even() as i64
}

/// Wraps a datetime as a JSON number, for custom fields in pass-through maps
pub fn timestamp_value(value: &DateTime<Utc>) -> Value {
    Value::from(to_unix_timestamp(value))
}

/// Joins IDs into the comma-separated form some endpoints take in JSON bodies
pub fn join_ids<T: Display>(ids: &[T]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Adds builder helpers for the flattened `custom` map of request structs
#[macro_export]
macro_rules! impl_custom_fields {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Adds a field sent as-is next to the typed ones, e.g. `custom_automated`
                #[must_use]
                pub fn with_custom(
                    mut self,
                    key: impl Into<String>,
                    value: impl Into<serde_json::Value>,
                ) -> Self {
                    self.custom.insert(key.into(), value.into());
                    self
                }
            }
        )+
    };
}

/// Serde adapter writing `DateTime<Utc>` as an integer UNIX timestamp
pub mod timestamp {
    use super::to_unix_timestamp;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    /// Serializes a datetime as seconds since the epoch
    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(to_unix_timestamp(value))
    }

    /// Deserializes seconds since the epoch into a datetime
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let secs = i64::deserialize(deserializer)?;
        DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {secs}")))
    }
}

/// Serde adapter for optional datetimes; pair with `skip_serializing_if = "Option::is_none"`
pub mod timestamp_option {
    use super::to_unix_timestamp;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    /// Serializes an optional datetime as seconds since the epoch or `null`
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_i64(to_unix_timestamp(value)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes optional seconds since the epoch
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<i64>::deserialize(deserializer)? {
            Some(secs) => DateTime::from_timestamp(secs, 0)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {secs}"))),
            None => Ok(None),
        }
    }
}
