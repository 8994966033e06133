use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinition {
    pub title: String,
    pub image: String,
    pub price: i64,
    pub zone: String,

    /// `HH:MM`
    pub time: String,
    /// Localized, e.g. `6 de diciembre de 2025`
    pub date: String,
    #[serde(with = "time::serde::rfc3339")]
    pub event_date_time: OffsetDateTime,
}
