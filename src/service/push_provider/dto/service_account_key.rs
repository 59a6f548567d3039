use serde::Deserialize;

/// Service account credentials of the push project,
/// loaded from the provider's JSON key file
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub project_id: String,
    pub private_key: String,
    pub client_email: String,
    pub token_uri: String,
}
