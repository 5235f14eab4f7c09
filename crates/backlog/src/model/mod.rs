//! Typed records for a work-tracker API.
//!
//! Each record decodes from the JSON the service returns and implements
//! [`Fields`] so the whole family can be filtered, sorted, and grouped
//! with [`backlog_sift::Query`]. Decoding is strict: a record's required
//! keys are checked up front and every absent key is reported in one
//! error rather than failing piecemeal.

use backlog_sift::{Fields, Timestamp, Value};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::de::DeserializeOwned;

pub mod error;
pub mod project;
pub mod resource;
pub mod story;
pub mod tag;
pub mod task;
pub mod user;
pub mod workspace;

pub use error::{ModelError, Result};
pub use project::{Project, ProjectStatus};
pub use resource::{ResourceKind, ResourceRef};
pub use story::Story;
pub use tag::Tag;
pub use task::{Like, Membership, Task};
pub use user::{Photo, User};
pub use workspace::Workspace;

/// A record that can be decoded from an API payload.
///
/// Implementors name themselves and the keys a payload must carry.
/// [`from_json`](ApiResource::from_json) rejects non-object payloads and
/// collects every missing required key before handing the value to serde,
/// so shape errors surface together instead of one field at a time.
pub trait ApiResource: DeserializeOwned {
    /// Human-readable record name used in error messages.
    const NAME: &'static str;

    /// Keys a payload must contain to decode as this record.
    const REQUIRED_KEYS: &'static [&'static str];

    /// Decodes one record, validating required keys first.
    fn from_json(value: serde_json::Value) -> Result<Self> {
        let Some(object) = value.as_object() else {
            return Err(ModelError::NotAnObject {
                resource: Self::NAME,
            });
        };
        let missing: Vec<String> = Self::REQUIRED_KEYS
            .iter()
            .filter(|key| !object.contains_key(**key))
            .map(|key| (*key).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ModelError::MissingKeys {
                resource: Self::NAME,
                keys: missing,
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Decodes a JSON array of records, validating each element.
    fn vec_from_json(value: serde_json::Value) -> Result<Vec<Self>> {
        let serde_json::Value::Array(items) = value else {
            return Err(ModelError::NotAnArray {
                resource: Self::NAME,
            });
        };
        items.into_iter().map(Self::from_json).collect()
    }
}

/// Exposes an instant as a queryable timestamp.
pub(crate) fn time_value(at: &DateTime<Utc>) -> Value<'static> {
    Value::Time(Timestamp::from_millis(at.timestamp_millis()))
}

/// Exposes a calendar date as the timestamp of its UTC midnight.
pub(crate) fn date_value(day: &NaiveDate) -> Value<'static> {
    time_value(&day.and_time(NaiveTime::MIN).and_utc())
}

/// Exposes an optional nested record, mapping absence to null.
pub(crate) fn record_value<R: Fields>(record: &Option<R>) -> Value<'_> {
    match record {
        Some(fields) => Value::Record(fields),
        None => Value::Null,
    }
}
