use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub count: i64,
    pub created_at: OffsetDateTime,
    pub date: String,
    pub event_date_time: OffsetDateTime,
    pub event_title: String,
    pub image: String,
    pub price: i64,
    pub qr_data: String,
    pub qr_id: Uuid,
    pub time: String,
    pub used: bool,
    pub zone: String,
}
