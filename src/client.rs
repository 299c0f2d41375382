use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::models::meeting::Meeting;

/// Path of the meetings collection on the API server
pub const MEETINGS_PATH: &str = "/api/v1/meetings";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(StatusCode),
}

/// Operations the meetings API offers.
///
/// Any non-success status is a failure; callers do not distinguish codes.
#[allow(async_fn_in_trait)]
pub trait MeetingsApi {
    async fn list_meetings(&self) -> Result<Vec<Meeting>, ClientError>;

    async fn create_meeting(&self, meeting: &Meeting) -> Result<(), ClientError>;

    async fn update_meeting(&self, id: i64, meeting: &Meeting) -> Result<(), ClientError>;

    async fn delete_meeting(&self, id: i64) -> Result<(), ClientError>;
}

/// Client for the meetings REST API
pub struct MeetingsClient {
    client: Client,
    base_url: String,
}

impl MeetingsClient {
    /// Create a client for the API at `base_url` (scheme, host and port).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(&config.api_url, config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, MEETINGS_PATH)
    }

    fn meeting_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.base_url, MEETINGS_PATH, id)
    }

    fn check_status(res: Response) -> Result<Response, ClientError> {
        info!("Response received with status: {}", res.status());

        if res.status().is_success() {
            Ok(res)
        } else {
            Err(ClientError::Status(res.status()))
        }
    }
}

impl MeetingsApi for MeetingsClient {
    async fn list_meetings(&self) -> Result<Vec<Meeting>, ClientError> {
        let url = self.collection_url();
        info!("Making request to list meetings");
        debug!("API URL: {}", url);

        let res = self.client.get(&url).send().await?;
        let meetings = Self::check_status(res)?.json::<Vec<Meeting>>().await?;

        debug!("Decoded {} meetings", meetings.len());
        Ok(meetings)
    }

    async fn create_meeting(&self, meeting: &Meeting) -> Result<(), ClientError> {
        let url = self.collection_url();
        info!("Making request to create meeting: {}", meeting.topic);
        debug!("API URL: {}", url);

        let res = self.client.post(&url).json(meeting).send().await?;
        Self::check_status(res)?;
        Ok(())
    }

    async fn update_meeting(&self, id: i64, meeting: &Meeting) -> Result<(), ClientError> {
        let url = self.meeting_url(id);
        info!("Making request to update meeting {}: {}", id, meeting.topic);
        debug!("API URL: {}", url);

        let res = self.client.put(&url).json(meeting).send().await?;
        Self::check_status(res)?;
        Ok(())
    }

    async fn delete_meeting(&self, id: i64) -> Result<(), ClientError> {
        let url = self.meeting_url(id);
        info!("Making request to delete meeting {}", id);
        debug!("API URL: {}", url);

        let res = self.client.delete(&url).send().await?;
        Self::check_status(res)?;
        Ok(())
    }
}
