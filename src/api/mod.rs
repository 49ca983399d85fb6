mod types;

use reqwest::Client;
use serde_json::{Map, Value};

pub use types::*;

use crate::config::Config;
use crate::core::{ImageParameters, Orientation, UnsplashError};
use crate::http_client::HTTP_CLIENT;

pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Unsplash API client
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    access_key: String,
    secret_key: Option<String>,
    base_url: String,
    http: Client,
}

impl UnsplashClient {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: HTTP_CLIENT.clone(),
        }
    }

    /// Create a new client from config
    pub fn from_config(config: &Config) -> Result<Self, UnsplashError> {
        let access_key = config
            .access_key()
            .ok_or(UnsplashError::MissingAccessKey)?;

        let mut client = Self::new(access_key).with_base_url(&config.api.base_url);
        if let Some(secret) = config.api.secret_key.as_deref().filter(|s| !s.is_empty()) {
            client = client.with_secret_key(secret);
        }
        Ok(client)
    }

    /// Store the secret key. Requests only ever send the access key.
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint, returning an empty object for any non-2xx response.
    ///
    /// Transport failures and non-JSON success bodies are still errors.
    pub async fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value, UnsplashError> {
        match self.get_checked(endpoint, params).await {
            Err(UnsplashError::Status { status, message }) => {
                tracing::warn!("GET {} failed with HTTP {}: {}", endpoint, status, message);
                Ok(Value::Object(Map::new()))
            }
            other => other,
        }
    }

    /// GET an endpoint, reporting non-2xx responses as [`UnsplashError::Status`]
    pub async fn get_checked(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, UnsplashError> {
        let url = format!("{}/{}/", self.base_url, endpoint.trim_matches('/'));

        tracing::debug!("Sending GET request to: {} with params {:?}", url, params);

        let response = self
            .http
            .get(&url)
            .query(&[("client_id", self.access_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = if status.is_success() {
            response.text().await?
        } else {
            response.text().await.unwrap_or_default()
        };

        tracing::debug!("Response status: {}", status);
        tracing::debug!("Response body: {}", body);

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .ok()
                .filter(|e| !e.errors.is_empty())
                .map(|e| e.errors.join("; "))
                .unwrap_or(body);
            return Err(UnsplashError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            UnsplashError::InvalidResponse(format!("response body is not JSON: {}", e))
        })
    }

    /// Fetch one random photo, optionally filtered by search terms and orientation
    pub async fn fetch_random_photo(
        &self,
        query: Option<&str>,
        orientation: Option<Orientation>,
    ) -> Result<RandomPhoto, UnsplashError> {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            params.push(("query", query));
        }
        if let Some(orientation) = orientation {
            params.push(("orientation", orientation.as_str()));
        }

        let body = self.get_checked("photos/random", &params).await?;

        serde_json::from_value(body).map_err(|e| {
            UnsplashError::InvalidResponse(format!("unexpected random photo payload: {}", e))
        })
    }

    /// Fetch a random photo as an editable image
    pub async fn get_random_image(
        &self,
        query: Option<&str>,
        orientation: Option<Orientation>,
    ) -> Result<ImageParameters, UnsplashError> {
        let photo = self.fetch_random_photo(query, orientation).await?;
        tracing::info!("Fetched random photo {}", photo.id.as_deref().unwrap_or("<unknown>"));
        Ok(photo.to_image_parameters())
    }
}

impl RandomPhoto {
    pub fn owner_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.name.as_deref())
    }

    pub fn to_image_parameters(&self) -> ImageParameters {
        match self.owner_name() {
            Some(name) => ImageParameters::with_owner(&self.urls.raw, name),
            None => ImageParameters::new(&self.urls.raw),
        }
    }
}
