use crate::{dto::AssertionClaims, Error, ServiceAccountKey};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use std::{path::Path, time::Duration};
use time::OffsetDateTime;

/// Longest lifetime Google accepts for a signed assertion
pub const ASSERTION_LIFESPAN: Duration = Duration::from_secs(3600);

pub fn read_service_account_key(path: impl AsRef<Path>) -> Result<ServiceAccountKey, Error> {
    let content = std::fs::read_to_string(path)?;
    let key = serde_json::from_str(&content)?;

    Ok(key)
}

pub fn parse_encoding_key(key: &ServiceAccountKey) -> Result<EncodingKey, Error> {
    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;

    Ok(encoding_key)
}

///
/// Creates RS256 signed JWT that is exchanged for an access token
/// at the key's `token_uri`
///
pub fn encode_assertion(
    key: &ServiceAccountKey,
    encoding_key: &EncodingKey,
    scope: &str,
    issued_at: OffsetDateTime,
) -> Result<String, Error> {
    let iat = issued_at.unix_timestamp();
    let claims = AssertionClaims {
        iss: &key.client_email,
        scope,
        aud: &key.token_uri,
        iat,
        exp: iat + ASSERTION_LIFESPAN.as_secs() as i64,
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let jwt = jsonwebtoken::encode(&header, &claims, encoding_key)?;

    Ok(jwt)
}
