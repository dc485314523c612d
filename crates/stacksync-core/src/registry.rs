//! The stack registry capability.
//!
//! This module defines the trait the reconciler drives and the wire payloads
//! it sends. Implementations live in separate crates (the Portainer binding
//! is `stacksync-client`) and must be thread-safe (`Send + Sync`).

use async_trait::async_trait;
use serde::Serialize;

use crate::error::RegistryError;
use crate::intent::GitAuth;
use crate::stack::{ListFilter, Stack};

/// Status of a completed mutation call, as reported by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationStatus {
    pub http_status: u16,
}

impl MutationStatus {
    pub fn new(http_status: u16) -> Self {
        Self { http_status }
    }
}

impl std::fmt::Display for MutationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}", self.http_status)
    }
}

/// Request body for "create a standalone stack from a Git repository".
///
/// Field names follow the registry's camelCase wire format. The credential
/// fields are skipped when absent so a partial pair can never be emitted:
/// `repository_authentication` is true exactly when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFromGitPayload {
    pub name: String,
    pub compose_file: String,
    #[serde(rename = "repositoryURL")]
    pub repository_url: String,
    pub repository_authentication: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_password: Option<String>,
}

impl CreateFromGitPayload {
    pub fn new(
        name: impl Into<String>,
        compose_file: impl Into<String>,
        repository_url: impl Into<String>,
        auth: Option<&GitAuth>,
    ) -> Self {
        Self {
            name: name.into(),
            compose_file: compose_file.into(),
            repository_url: repository_url.into(),
            repository_authentication: auth.is_some(),
            repository_username: auth.map(|a| a.username.clone()),
            repository_password: auth.map(|a| a.password.clone()),
        }
    }
}

/// Request body for "redeploy an existing stack from its Git repository".
///
/// Deliberately does not carry the stack name, compose file path, or
/// repository URL: the registry already knows the repository binding from
/// creation time, and an update only refreshes credentials and redeploy
/// behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRedeployPayload {
    pub prune: bool,
    pub pull_image: bool,
    pub repository_authentication: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_password: Option<String>,
}

impl GitRedeployPayload {
    pub fn new(auth: Option<&GitAuth>) -> Self {
        Self {
            prune: true,
            pull_image: true,
            repository_authentication: auth.is_some(),
            repository_username: auth.map(|a| a.username.clone()),
            repository_password: auth.map(|a| a.password.clone()),
        }
    }
}

/// The remote control-plane API, reduced to the four operations the
/// reconciler needs.
///
/// Transport-level concerns (base URL, API key header, timeouts) belong to
/// the implementation; the core never sees them. No operation retries.
#[async_trait]
pub trait StackRegistry: Send + Sync {
    /// Lists stack records, optionally passing a server-side filter.
    ///
    /// The filter is a performance hint only — implementations forward it
    /// verbatim and callers always re-filter the result client-side.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures or non-success responses;
    /// an empty listing is not an error.
    async fn list(&self, filter: Option<&ListFilter>) -> Result<Vec<Stack>, RegistryError>;

    /// Creates a standalone stack on `endpoint_id` from a Git repository.
    async fn create_from_git(
        &self,
        endpoint_id: i64,
        payload: &CreateFromGitPayload,
    ) -> Result<MutationStatus, RegistryError>;

    /// Redeploys stack `stack_id` on `endpoint_id` from its bound repository.
    async fn git_redeploy(
        &self,
        stack_id: i64,
        payload: &GitRedeployPayload,
        endpoint_id: i64,
    ) -> Result<MutationStatus, RegistryError>;

    /// Deletes stack `stack_id` on `endpoint_id`.
    async fn delete(&self, stack_id: i64, endpoint_id: i64)
    -> Result<MutationStatus, RegistryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_serializes_with_credentials() {
        let auth = GitAuth {
            username: "ci".into(),
            password: "token".into(),
        };
        let payload = CreateFromGitPayload::new(
            "myStack",
            "myStack/docker-compose.yml",
            "https://github.com/acme/deploy",
            Some(&auth),
        );
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "myStack",
                "composeFile": "myStack/docker-compose.yml",
                "repositoryURL": "https://github.com/acme/deploy",
                "repositoryAuthentication": true,
                "repositoryUsername": "ci",
                "repositoryPassword": "token",
            })
        );
    }

    #[test]
    fn create_payload_omits_absent_credentials() {
        let payload = CreateFromGitPayload::new("s", "docker-compose.yml", "https://r", None);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["repositoryAuthentication"], false);
        assert!(json.get("repositoryUsername").is_none());
        assert!(json.get("repositoryPassword").is_none());
    }

    #[test]
    fn redeploy_payload_carries_only_flags_and_credentials() {
        let payload = GitRedeployPayload::new(None);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "prune": true,
                "pullImage": true,
                "repositoryAuthentication": false,
            })
        );
        assert!(json.get("name").is_none());
        assert!(json.get("composeFile").is_none());
        assert!(json.get("repositoryURL").is_none());
    }
}
