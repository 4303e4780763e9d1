//! HTTP client for the external user directory

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::{User, UserDirectory};
use crate::domain::{DomainError, Resource};

/// User directory backed by reqwest. Same absence/unavailable contract as
/// the team directory client.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserDirectory {
    pub fn new(base_url: impl Into<String>, timeout: std::time::Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let url = format!("{}/users/{}", self.base_url, id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::directory_unavailable(Resource::User, e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(DomainError::directory_unavailable(
                Resource::User,
                format!("unexpected status {} from {}", response.status(), url),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::directory_unavailable(Resource::User, e.to_string()))?;

        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(None);
        }

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| DomainError::directory_unavailable(Resource::User, e.to_string()))
    }

    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        let url = format!("{}/users", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::directory_unavailable(Resource::User, e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::directory_unavailable(
                Resource::User,
                format!("unexpected status {} from {}", response.status(), url),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::directory_unavailable(Resource::User, e.to_string()))
    }
}
