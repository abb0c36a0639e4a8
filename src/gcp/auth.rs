//! # GCP Authentication
//!
//! This module handles authentication with Google Cloud Platform using the
//! OAuth 2.0 flow for service accounts. It provides a function to obtain a
//! temporary access token that can be used to authorize API requests.

use anyhow::{Context, Result};
use cached::proc_macro::once;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::gcp::types::{AccessToken, ServiceAccount};

/// The Google OAuth2 token endpoint.
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Represents the claims in the JSON Web Token (JWT) used for authentication.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// The issuer of the token (the service account's email address).
    iss: String,
    /// The scope of the requested permissions.
    scope: String,
    /// The audience for the token (the token endpoint URL).
    aud: String,
    /// The expiration time of the token (Unix timestamp).
    exp: u64,
    /// The time the token was issued (Unix timestamp).
    iat: u64,
}

/// Fetches a GCP access token for the ambient service account.
///
/// This function performs the server-to-server OAuth 2.0 flow:
/// 1. Reads the service-account key file named by the
///    `GOOGLE_APPLICATION_CREDENTIALS` environment variable.
/// 2. Creates a JWT with claims asserting the service account's identity
///    and the requested API scope.
/// 3. Signs the JWT using the service account's private key (RS256).
/// 4. Sends the signed JWT to the Google OAuth2 token endpoint.
/// 5. Receives an access token in exchange.
///
/// The token is fetched once per process and memoized.
#[once(result = true)]
pub async fn get_access_token() -> Result<String> {
    // 1. Read the service-account key file.
    let key_path = std::env::var("GOOGLE_APPLICATION_CREDENTIALS")
        .context("GOOGLE_APPLICATION_CREDENTIALS not set")?;
    let service_account_json = fs::read_to_string(&key_path)
        .with_context(|| format!("Failed to read service account key file: {}", key_path))?;
    let service_account: ServiceAccount =
        serde_json::from_str(&service_account_json).context("Invalid service account key file")?;

    // 2. Create the JWT claims.
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let exp = now + 3600; // Token is valid for 1 hour.

    let claims = Claims {
        iss: service_account.client_email.clone(),
        scope: "https://www.googleapis.com/auth/cloud-platform".to_string(),
        aud: TOKEN_URL.to_string(),
        exp,
        iat: now,
    };

    // 3. Sign the JWT.
    let header = Header::new(Algorithm::RS256);
    let encoding_key = EncodingKey::from_rsa_pem(service_account.private_key.as_bytes())?;
    let jwt = encode(&header, &claims, &encoding_key)?;

    // 4. Exchange the JWT for an access token.
    let params = [
        ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
        ("assertion", &jwt),
    ];

    let client = &*crate::client::CLIENT;
    let response = client.post(TOKEN_URL).form(&params).send().await?;

    if !response.status().is_success() {
        let error_text = response.text().await?;
        return Err(anyhow::anyhow!(
            "Failed to get access token: {}",
            error_text
        ));
    }

    // 5. Parse the response and return the token.
    let token_response: AccessToken = response.json().await?;
    Ok(token_response.access_token)
}
