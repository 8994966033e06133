mod document_entity;
mod firestore_value;
mod ticket_insert_entity;

pub use document_entity::{DocumentEntity, ListDocumentsEntity};
pub use firestore_value::FirestoreValue;
pub use ticket_insert_entity::TicketInsertEntity;
