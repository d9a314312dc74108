//! REST client for the remote invite API.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::time::timeout;

use crate::config::ServiceConfig;
use crate::invites::{Invite, InviteId, ProjectId, Role};

use super::error::ServiceError;
use super::InviteService;

#[derive(Serialize)]
struct CreateInviteBody<'a> {
    email: &'a str,
    role: Role,
}

#[derive(Serialize)]
struct UpdateInviteBody {
    role: Role,
}

/// Invite service backed by `{base_url}/projects/{project}/invites`.
pub struct HttpInviteService {
    client: Client,
    base_url: Url,
    api_token: Option<String>,
    request_timeout: Duration,
}

impl HttpInviteService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ServiceError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ServiceError::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(ServiceError::Transport)?;

        Ok(Self {
            client,
            base_url,
            api_token: config.api_token.clone(),
            request_timeout: Duration::from_secs(config.timeout_seconds),
        })
    }

    /// URL of a project's invite collection, or of one invite in it.
    fn invites_url(
        &self,
        project_id: &ProjectId,
        invite_id: Option<&InviteId>,
    ) -> Result<Url, ServiceError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ServiceError::InvalidUrl(self.base_url.to_string()))?;
            segments
                .pop_if_empty()
                .push("projects")
                .push(project_id.as_str())
                .push("invites");
            if let Some(invite_id) = invite_id {
                segments.push(invite_id.as_str());
            }
        }
        Ok(url)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn with_timeout<T>(
        &self,
        request: impl Future<Output = Result<T, ServiceError>>,
    ) -> Result<T, ServiceError> {
        match timeout(self.request_timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::Timeout {
                seconds: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ServiceError> {
        let builder = self.authorize(builder);
        self.with_timeout(async move {
            let response = send_checked(builder).await?;
            let body = response.bytes().await.map_err(ServiceError::Transport)?;
            serde_json::from_slice(&body).map_err(|e| ServiceError::Decode(e.to_string()))
        })
        .await
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ServiceError> {
        let builder = self.authorize(builder);
        self.with_timeout(async move {
            send_checked(builder).await?;
            Ok(())
        })
        .await
    }
}

async fn send_checked(builder: RequestBuilder) -> Result<Response, ServiceError> {
    let response = builder.send().await.map_err(ServiceError::Transport)?;
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(ServiceError::Status {
        status,
        message: error_message_from_body(&body),
    })
}

/// Pull a human readable message out of an error body.
///
/// Prefers a JSON `message` or `error` string field and falls back to the
/// raw body text.
fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"].iter().find_map(|key| {
                value
                    .get(*key)
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl InviteService for HttpInviteService {
    async fn find(&self, project_id: &ProjectId) -> Result<Vec<Invite>, ServiceError> {
        let url = self.invites_url(project_id, None)?;
        tracing::debug!(%url, "GET invites");
        self.send_json(self.client.get(url)).await
    }

    async fn create(
        &self,
        project_id: &ProjectId,
        email: &str,
        role: Role,
    ) -> Result<Invite, ServiceError> {
        let url = self.invites_url(project_id, None)?;
        tracing::debug!(%url, %role, "POST invite");
        let builder = self.client.post(url).json(&CreateInviteBody { email, role });
        self.send_json(builder).await
    }

    async fn update(
        &self,
        project_id: &ProjectId,
        invite_id: &InviteId,
        role: Role,
    ) -> Result<Invite, ServiceError> {
        let url = self.invites_url(project_id, Some(invite_id))?;
        tracing::debug!(%url, %role, "PATCH invite");
        let builder = self.client.patch(url).json(&UpdateInviteBody { role });
        self.send_json(builder).await
    }

    async fn remove(
        &self,
        project_id: &ProjectId,
        invite_id: &InviteId,
    ) -> Result<(), ServiceError> {
        let url = self.invites_url(project_id, Some(invite_id))?;
        tracing::debug!(%url, "DELETE invite");
        self.send_empty(self.client.delete(url)).await
    }
}
