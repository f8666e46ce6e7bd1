//! Server functions
//!
//! These run on the server, where the API endpoint and page settings are
//! read from the environment.

use dioxus::prelude::*;
use registration_core::{Member, RegisteredMember};

/// Forward a validated member to the registration API
#[server]
pub async fn register_member(member: Member) -> Result<RegisteredMember, ServerFnError> {
    let client = server_graphql_client()?;
    tracing::info!(
        username = %member.username,
        endpoint = client.endpoint(),
        "Forwarding registration"
    );

    client
        .register_member(&member)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// How long toasts stay on screen, in milliseconds
#[server]
pub async fn toast_duration() -> Result<u32, ServerFnError> {
    let config = load_config()?;
    Ok(config.toast_duration_ms)
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
fn load_config() -> Result<registration_core::Config, ServerFnError> {
    registration_core::Config::from_env().map_err(|e| ServerFnError::new(format!("{:#}", e)))
}

#[cfg(feature = "server")]
fn server_graphql_client() -> Result<registration_core::GraphQLClient, ServerFnError> {
    let config = load_config()?;
    Ok(registration_core::GraphQLClient::new(config.api_url))
}
