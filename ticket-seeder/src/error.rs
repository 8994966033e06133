use crate::repository;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    #[error("catalog error: {0}")]
    Catalog(&'static str),
}
