pub mod dto;
pub mod error;
pub mod token_source;
pub mod util;

pub use dto::ServiceAccountKey;
pub use error::Error;
pub use token_source::*;

/// Scope granting read/write access to Cloud Firestore
pub const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
