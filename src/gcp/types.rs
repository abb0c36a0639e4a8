use serde::Deserialize;

// Wire types shared across GCP services (service-agnostic).

/// The layout of a service-account key file, as written by
/// `gcloud iam service-accounts keys create`. Only the fields this tool
/// touches are modeled; unknown fields are ignored on deserialization.
#[derive(Debug, Deserialize)]
pub struct ServiceAccount {
    #[serde(rename = "type")]
    pub account_type: String,
    pub project_id: String,
    pub private_key_id: String,
    pub private_key: String,
    pub client_email: String,
}

/// Response from the OAuth2 token endpoint.
#[derive(Debug, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}
