#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("credentials file error: {0}")]
    CredentialsIo(#[from] std::io::Error),

    #[error("credentials parse error: {0}")]
    CredentialsParse(#[from] serde_json::Error),

    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("token request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token endpoint responded with {status}: {message}")]
    TokenEndpoint {
        status: reqwest::StatusCode,
        message: String,
    },
}
