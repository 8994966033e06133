use crate::Error;
use async_trait::async_trait;

#[async_trait]
pub trait TokenSource: Send + Sync {
    ///
    /// Returns bearer token valid for at least the next request
    ///
    async fn access_token(&self) -> Result<String, Error>;
}
