#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("firestore responded with {status}: {message}")]
    Firestore {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("auth error: {0}")]
    Auth(#[from] google_auth::Error),

    #[error("timestamp format error: {0}")]
    TimestampFormat(#[from] time::error::Format),

    #[error("invalid document name: {0}")]
    InvalidDocumentName(String),
}
