mod assertion_claims;
mod service_account_key;
mod token_response;

pub use assertion_claims::AssertionClaims;
pub use service_account_key::ServiceAccountKey;
pub use token_response::TokenResponse;
