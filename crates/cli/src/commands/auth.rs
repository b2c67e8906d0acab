//! Authentication service calls.

#![allow(clippy::print_stdout)]

use brightcart_storefront::config::AuthConfig;
use brightcart_storefront::services::auth::{AuthClient, Credentials};
use tracing::info;

/// Send credentials to the authenticate endpoint and print its response.
///
/// # Errors
///
/// Returns an error if `AUTH_BASE_URL` is missing, the email is invalid,
/// or the request fails.
pub async fn login(email: &str, password: String) -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AuthConfig::from_env()?;
    let base_url = config.require_base_url()?;
    let client = AuthClient::new(base_url, &config)?;
    let credentials = Credentials::new(email, password)?;

    info!(endpoint = %client.endpoint(), "Authenticating");
    let response = client.authenticate(&credentials).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
