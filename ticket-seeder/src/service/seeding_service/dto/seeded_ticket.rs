use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct SeededTicket {
    pub id: String,
    pub event_title: String,
    pub qr_id: Uuid,
}
