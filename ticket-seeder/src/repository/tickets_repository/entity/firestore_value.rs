use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime, UtcOffset};

///
/// Typed value in the shape Firestore REST API expects,
/// e.g. `{"stringValue": "VIP"}`
///
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FirestoreValue {
    StringValue(String),
    /// int64 is transported as decimal string
    IntegerValue(String),
    BooleanValue(bool),
    TimestampValue(String),
}

impl FirestoreValue {
    pub fn string(value: &str) -> Self {
        Self::StringValue(value.to_string())
    }

    pub fn integer(value: i64) -> Self {
        Self::IntegerValue(value.to_string())
    }

    pub fn timestamp(value: OffsetDateTime) -> Result<Self, time::error::Format> {
        let value = value.to_offset(UtcOffset::UTC).format(&Rfc3339)?;

        Ok(Self::TimestampValue(value))
    }
}
