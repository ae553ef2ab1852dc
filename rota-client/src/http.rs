//! HTTP client for the schedule document store

use crate::store::ScheduleStore;
use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{Setup, SetupUpdate};

/// HTTP client for the key-value schedule store
///
/// The store speaks bare `Setup` documents: `GET /schedules/{id}`
/// returns one, `PUT /schedules/{id}` replaces one and returns the
/// authoritative copy (the server may normalize, so the response - not
/// the request body - is the new baseline).
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build the authorization header, rejecting up front when no token
    /// is available - persistence must never be attempted unauthenticated.
    fn auth_header(&self) -> ClientResult<String> {
        self.token
            .as_ref()
            .map(|t| format!("Bearer {}", t))
            .ok_or(ClientError::MissingToken)
    }

    fn schedule_url(&self, schedule_id: &str) -> String {
        format!(
            "{}/schedules/{}",
            self.base_url.trim_end_matches('/'),
            schedule_id
        )
    }

    /// Fetch the full schedule document
    pub async fn fetch_setup(&self, schedule_id: &str) -> ClientResult<Setup> {
        let auth = self.auth_header()?;
        let response = self
            .client
            .get(self.schedule_url(schedule_id))
            .header(reqwest::header::AUTHORIZATION, auth)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Replace the schedule document, returning the authoritative copy
    pub async fn replace_setup(
        &self,
        schedule_id: &str,
        update: &SetupUpdate,
    ) -> ClientResult<Setup> {
        let auth = self.auth_header()?;
        let response = self
            .client
            .put(self.schedule_url(schedule_id))
            .header(reqwest::header::AUTHORIZATION, auth)
            .json(update)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl ScheduleStore for HttpClient {
    async fn fetch(&self, schedule_id: &str) -> ClientResult<Setup> {
        self.fetch_setup(schedule_id).await
    }

    async fn replace(&self, schedule_id: &str, update: &SetupUpdate) -> ClientResult<Setup> {
        self.replace_setup(schedule_id, update).await
    }
}
