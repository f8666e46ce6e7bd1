//! GraphQL client for the member registration API

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Member, RegisteredMember};
use crate::error::RegistrationError;
use crate::library::MemberLibrary;

/// `input` is a camelCase [`Member`]. Empty optional fields (`phoneNumber`,
/// `address.unitNumber`) are sent as `null`, never as `""`.
pub const REGISTER_MEMBER: &str = r#"
  mutation RegisterMember($input: RegisterMemberInput!) {
    registerMember(input: $input) {
      id
      status
    }
  }
"#;

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<V: Serialize> {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// GraphQL response wrapper
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

/// GraphQL error
#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    pub path: Option<Vec<String>>,
}

impl<T> GraphQLResponse<T> {
    /// First error wins; a response without errors must carry data.
    pub fn into_data(self) -> Result<T, RegistrationError> {
        if let Some(first_error) = self.errors.as_ref().and_then(|errors| errors.first()) {
            return Err(RegistrationError::GraphQL(first_error.message.clone()));
        }

        self.data.ok_or(RegistrationError::NoData)
    }
}

#[derive(Debug, Serialize)]
struct RegisterMemberVariables<'a> {
    input: &'a Member,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterMemberResponse {
    register_member: RegisteredMember,
}

/// GraphQL client for making requests
#[derive(Clone)]
pub struct GraphQLClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphQLClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a GraphQL mutation
    pub async fn mutate<V, R>(
        &self,
        mutation: &'static str,
        variables: Option<V>,
    ) -> Result<R, RegistrationError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let request = GraphQLRequest {
            query: mutation,
            variables,
        };

        let response = self.client.post(&self.endpoint).json(&request).send().await?;
        let graphql_response: GraphQLResponse<R> = response.json().await?;

        graphql_response.into_data()
    }

    /// Send a member to the `registerMember` mutation
    pub async fn register_member(
        &self,
        member: &Member,
    ) -> Result<RegisteredMember, RegistrationError> {
        debug!(endpoint = %self.endpoint, username = %member.username, "Sending registerMember");

        let result: RegisterMemberResponse = self
            .mutate(REGISTER_MEMBER, Some(RegisterMemberVariables { input: member }))
            .await?;

        Ok(result.register_member)
    }
}

#[async_trait(?Send)]
impl MemberLibrary for GraphQLClient {
    async fn register_member(
        &self,
        member: &Member,
    ) -> Result<RegisteredMember, RegistrationError> {
        GraphQLClient::register_member(self, member).await
    }
}
