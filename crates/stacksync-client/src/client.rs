use async_trait::async_trait;
use tracing::debug;
use url::Url;

use stacksync_core::{
    CreateFromGitPayload, GitRedeployPayload, ListFilter, MutationStatus, RegistryError, Stack,
    StackRegistry,
};

const API_KEY_HEADER: &str = "X-API-Key";

/// HTTP client for a Portainer CE control plane.
///
/// Holds the API base URL (`{host}/api`) and the static API key; every
/// request carries the key in the `X-API-Key` header and nothing else — no
/// Authorization header, no cookies. No timeout or retry policy is applied
/// here beyond reqwest's defaults.
pub struct PortainerClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PortainerClient {
    /// Creates a client for the Portainer instance at `host`
    /// (e.g. `https://portainer.example.com:9443`).
    ///
    /// # Errors
    ///
    /// Fails if `host` is not a valid absolute URL.
    pub fn new(host: &str, api_key: impl Into<String>) -> Result<Self, url::ParseError> {
        let host = Url::parse(host)?;
        let base_url = format!("{}/api", host.as_str().trim_end_matches('/'));
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, path);
        self.http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
    }
}

#[async_trait]
impl StackRegistry for PortainerClient {
    async fn list(&self, filter: Option<&ListFilter>) -> Result<Vec<Stack>, RegistryError> {
        let mut req = self.request(reqwest::Method::GET, "stacks");
        if let Some(filter) = filter {
            let filters = serde_json::to_string(filter).map_err(RegistryError::transport)?;
            req = req.query(&[("filters", filters)]);
        }

        debug!(filter = ?filter, "listing stacks");
        let resp = req.send().await.map_err(RegistryError::transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(RegistryError::transport)?;
        if !status.is_success() {
            return Err(RegistryError::api(status.as_u16(), body));
        }
        serde_json::from_str(&body).map_err(RegistryError::transport)
    }

    async fn create_from_git(
        &self,
        endpoint_id: i64,
        payload: &CreateFromGitPayload,
    ) -> Result<MutationStatus, RegistryError> {
        debug!(endpoint_id, name = %payload.name, "creating stack from git repository");
        let resp = self
            .request(reqwest::Method::POST, "stacks/create/standalone/repository")
            .query(&[("endpointId", endpoint_id.to_string())])
            .json(payload)
            .send()
            .await
            .map_err(RegistryError::transport)?;
        mutation_status(resp).await
    }

    async fn git_redeploy(
        &self,
        stack_id: i64,
        payload: &GitRedeployPayload,
        endpoint_id: i64,
    ) -> Result<MutationStatus, RegistryError> {
        debug!(stack_id, endpoint_id, "redeploying stack from git repository");
        let resp = self
            .request(
                reqwest::Method::PUT,
                &format!("stacks/{stack_id}/git/redeploy"),
            )
            .query(&[("endpointId", endpoint_id.to_string())])
            .json(payload)
            .send()
            .await
            .map_err(RegistryError::transport)?;
        mutation_status(resp).await
    }

    async fn delete(
        &self,
        stack_id: i64,
        endpoint_id: i64,
    ) -> Result<MutationStatus, RegistryError> {
        debug!(stack_id, endpoint_id, "deleting stack");
        let resp = self
            .request(reqwest::Method::DELETE, &format!("stacks/{stack_id}"))
            .query(&[("endpointId", endpoint_id.to_string())])
            .send()
            .await
            .map_err(RegistryError::transport)?;
        mutation_status(resp).await
    }
}

async fn mutation_status(resp: reqwest::Response) -> Result<MutationStatus, RegistryError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(RegistryError::api(status.as_u16(), body));
    }
    Ok(MutationStatus::new(status.as_u16()))
}
