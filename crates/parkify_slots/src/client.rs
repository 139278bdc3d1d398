//! HTTP client for the `bookedSlots` REST collection.
//!
//! The collection lives at `{base_url}/bookedSlots`:
//!
//! - `GET /bookedSlots` lists every booking,
//! - `GET /bookedSlots/{id}` fetches one,
//! - `POST /bookedSlots` creates one and echoes it back,
//! - `DELETE /bookedSlots/{id}` removes one.
//!
//! Calls are plain request/response: no retries, no caching.

use async_trait::async_trait;
use parkify_common::{create_client, DEFAULT_TIMEOUT_SECS, HTTP_CLIENT};
use parkify_config::ApiConfig;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::SlotsError;
use crate::models::Booking;

/// Remote operations on the booked-slots collection.
#[async_trait]
pub trait BookedSlotsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Booking>, SlotsError>;

    async fn fetch(&self, id: &str) -> Result<Booking, SlotsError>;

    /// Stores a new booking and returns the record as the service saved it.
    async fn create(&self, booking: &Booking) -> Result<Booking, SlotsError>;

    async fn delete(&self, id: &str) -> Result<(), SlotsError>;
}

/// [`BookedSlotsApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpBookedSlotsClient {
    client: Client,
    collection_url: String,
}

impl HttpBookedSlotsClient {
    /// Builds a client with the configured base URL and request timeout. The
    /// shared `HTTP_CLIENT` is reused when the timeout is the default.
    pub fn new(api: &ApiConfig) -> Result<Self, SlotsError> {
        let client = if api.timeout_secs == DEFAULT_TIMEOUT_SECS {
            HTTP_CLIENT.clone()
        } else {
            create_client(api.timeout_secs)?
        };
        Ok(Self {
            client,
            collection_url: api.booked_slots_url(),
        })
    }

    /// Uses an existing `reqwest::Client`, e.g. the shared `HTTP_CLIENT`.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            collection_url: format!("{}/bookedSlots", base_url.trim_end_matches('/')),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url, id)
    }
}

/// Maps non-success statuses to errors; `404` becomes [`SlotsError::NotFound`] for `id`.
async fn check_status(response: Response, id: Option<&str>) -> Result<Response, SlotsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(SlotsError::NotFound(id.to_string()));
        }
    }
    let message = response.text().await.unwrap_or_default();
    Err(SlotsError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SlotsError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| SlotsError::Decode(e.to_string()))
}

#[async_trait]
impl BookedSlotsApi for HttpBookedSlotsClient {
    async fn list(&self) -> Result<Vec<Booking>, SlotsError> {
        debug!("GET {}", self.collection_url);
        let response = self.client.get(&self.collection_url).send().await?;
        let response = check_status(response, None).await?;
        decode(response).await
    }

    async fn fetch(&self, id: &str) -> Result<Booking, SlotsError> {
        let url = self.item_url(id);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let response = check_status(response, Some(id)).await?;
        decode(response).await
    }

    async fn create(&self, booking: &Booking) -> Result<Booking, SlotsError> {
        debug!("POST {} (id {})", self.collection_url, booking.id);
        let response = self
            .client
            .post(&self.collection_url)
            .json(booking)
            .send()
            .await?;
        let response = check_status(response, None).await?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(booking.clone());
        }
        serde_json::from_str(&body).map_err(|e| SlotsError::Decode(e.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), SlotsError> {
        let url = self.item_url(id);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        check_status(response, Some(id)).await?;
        Ok(())
    }
}
