use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::{ApiError, FailureKind, QueueItemDto, StatsDto};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8765".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The three remote calls the dashboard relies on.
///
/// No retries at this layer; recovery is the next scheduled poll tick.
#[async_trait::async_trait]
pub trait QueueService: Send + Sync {
    async fn fetch_queue(&self) -> Result<Vec<QueueItemDto>, ApiError>;
    async fn fetch_status(&self) -> Result<StatsDto, ApiError>;
    async fn trigger_rescan(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestQueueService {
    client: reqwest::Client,
    base: reqwest::Url,
}

impl ReqwestQueueService {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let base = reqwest::Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ApiError> {
        self.base
            .join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.endpoint(path)?)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&bytes)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl QueueService for ReqwestQueueService {
    async fn fetch_queue(&self) -> Result<Vec<QueueItemDto>, ApiError> {
        self.get_json("/api/queue").await
    }

    async fn fetch_status(&self) -> Result<StatsDto, ApiError> {
        self.get_json("/api/status").await
    }

    async fn trigger_rescan(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint("/api/refresh")?)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        // Response body is ignored; the rescan is a fire-and-forget signal.
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
