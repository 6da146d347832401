use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::core::profile::Profile;
use crate::core::work_item::{NewWorkItem, WorkItem};
use crate::sync::WorkItemService;

/// Failure talking to the remote data service. Non-2xx responses are
/// treated uniformly, regardless of body content.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: StatusCode,
    },
}

/// Health report of the remote service (`GET /health`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// REST client for the ops data service.
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder().build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the service health endpoint.
    pub async fn health(&self) -> Result<ServiceHealth, ApiError> {
        let url = format!("{}/health", self.base_url);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                method: "GET",
                url,
                status: resp.status(),
            });
        }
        Ok(resp.json().await?)
    }

    async fn get_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        let url = format!("{}/profiles", self.base_url);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                method: "GET",
                url,
                status: resp.status(),
            });
        }
        Ok(resp.json().await?)
    }

    async fn get_work_items(&self, profile_key: Option<&str>) -> Result<Vec<WorkItem>, ApiError> {
        let url = format!("{}/work-items", self.base_url);
        let mut req = self.http.get(&url);
        if let Some(key) = profile_key {
            req = req.query(&[("profile_key", key)]);
        }
        let resp = req.send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                method: "GET",
                url,
                status: resp.status(),
            });
        }
        Ok(resp.json().await?)
    }

    async fn post_work_item(&self, item: &NewWorkItem) -> Result<WorkItem, ApiError> {
        let url = format!("{}/work-items", self.base_url);
        let resp = self.http.post(&url).json(item).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                method: "POST",
                url,
                status: resp.status(),
            });
        }
        Ok(resp.json().await?)
    }

    async fn put_work_item(&self, item: &WorkItem) -> Result<WorkItem, ApiError> {
        let url = format!("{}/work-items/{}", self.base_url, item.id);
        let resp = self.http.put(&url).json(item).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                method: "PUT",
                url,
                status: resp.status(),
            });
        }
        Ok(resp.json().await?)
    }
}

impl WorkItemService for ApiClient {
    async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        self.get_profiles().await
    }

    async fn list_work_items(&self, profile_key: Option<&str>) -> Result<Vec<WorkItem>, ApiError> {
        self.get_work_items(profile_key).await
    }

    async fn create_work_item(&self, item: &NewWorkItem) -> Result<WorkItem, ApiError> {
        self.post_work_item(item).await
    }

    async fn update_work_item(&self, item: &WorkItem) -> Result<WorkItem, ApiError> {
        self.put_work_item(item).await
    }
}
