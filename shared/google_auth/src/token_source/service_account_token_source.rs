use super::TokenSource;
use crate::{
    dto::TokenResponse,
    util::{encode_assertion, parse_encoding_key},
    Error, ServiceAccountKey,
};
use async_trait::async_trait;
use jsonwebtoken::EncodingKey;
use reqwest::Client;
use std::time::Duration;
use time::OffsetDateTime;
use tokio::sync::Mutex;

const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Cached token is refreshed when it expires sooner than this
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

struct CachedToken {
    value: String,
    expire_at: OffsetDateTime,
}

pub struct ServiceAccountTokenSource {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    scope: String,
    client: Client,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokenSource {
    ///
    /// ### Errors
    /// - [Error::Jwt] when private key is not a valid RSA PEM key
    ///
    pub fn new(
        key: ServiceAccountKey,
        scope: impl Into<String>,
        client: Client,
    ) -> Result<Self, Error> {
        let encoding_key = parse_encoding_key(&key)?;

        Ok(Self {
            key,
            encoding_key,
            scope: scope.into(),
            client,
            cached: Mutex::new(None),
        })
    }

    async fn fetch_token(&self) -> Result<CachedToken, Error> {
        let issued_at = OffsetDateTime::now_utc();
        let assertion = encode_assertion(&self.key, &self.encoding_key, &self.scope, issued_at)?;

        tracing::debug!(token_uri = %self.key.token_uri, "requesting access token");
        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::TokenEndpoint { status, message });
        }

        let token = response.json::<TokenResponse>().await?;
        let expire_at = issued_at + Duration::from_secs(token.expires_in);
        tracing::debug!(%expire_at, "received access token");

        Ok(CachedToken {
            value: token.access_token,
            expire_at,
        })
    }
}

#[async_trait]
impl TokenSource for ServiceAccountTokenSource {
    async fn access_token(&self) -> Result<String, Error> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if OffsetDateTime::now_utc() + REFRESH_MARGIN < token.expire_at {
                return Ok(token.value.clone());
            }
        }

        let token = self.fetch_token().await?;
        let value = token.value.clone();
        *cached = Some(token);

        Ok(value)
    }
}
