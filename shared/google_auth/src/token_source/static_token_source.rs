use super::TokenSource;
use crate::Error;
use async_trait::async_trait;

///
/// Always returns the same token.
/// Firestore emulator accepts `owner` as an admin token.
///
pub struct StaticTokenSource {
    token: String,
}

impl StaticTokenSource {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn access_token(&self) -> Result<String, Error> {
        Ok(self.token.clone())
    }
}
