use super::FirestoreValue;
use crate::repository::NewTicket;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct TicketInsertEntity {
    pub fields: BTreeMap<&'static str, FirestoreValue>,
}

impl TryFrom<&NewTicket> for TicketInsertEntity {
    type Error = time::error::Format;

    fn try_from(ticket: &NewTicket) -> Result<Self, Self::Error> {
        let fields = BTreeMap::from([
            ("count", FirestoreValue::integer(ticket.count)),
            ("createdAt", FirestoreValue::timestamp(ticket.created_at)?),
            ("date", FirestoreValue::string(&ticket.date)),
            (
                "eventDateTime",
                FirestoreValue::timestamp(ticket.event_date_time)?,
            ),
            ("eventTitle", FirestoreValue::string(&ticket.event_title)),
            ("image", FirestoreValue::string(&ticket.image)),
            ("price", FirestoreValue::integer(ticket.price)),
            ("qrData", FirestoreValue::string(&ticket.qr_data)),
            ("qrId", FirestoreValue::StringValue(ticket.qr_id.to_string())),
            ("time", FirestoreValue::string(&ticket.time)),
            ("used", FirestoreValue::BooleanValue(ticket.used)),
            ("zone", FirestoreValue::string(&ticket.zone)),
        ]);

        Ok(Self { fields })
    }
}
