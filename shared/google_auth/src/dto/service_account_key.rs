use serde::Deserialize;

///
/// Subset of the JSON key file downloaded for a service account.
/// Must not implement `Debug`, it holds the private key.
///
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub project_id: String,
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    pub token_uri: String,
}
