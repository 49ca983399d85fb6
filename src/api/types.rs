use serde::{Deserialize, Serialize};

/// Response from the `photos/random` endpoint (only the fields we use)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomPhoto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    pub urls: PhotoUrls,
    #[serde(default)]
    pub user: Option<PhotoUser>,
    #[serde(default)]
    pub links: Option<PhotoLinks>,
}

/// Image URLs at the sizes Unsplash pre-renders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub raw: String,
    pub full: Option<String>,
    pub regular: Option<String>,
    pub small: Option<String>,
    pub thumb: Option<String>,
}

/// Photographer credited for the photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUser {
    pub name: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoLinks {
    pub html: Option<String>,
}

/// Error body returned by the API, e.g. `{"errors": ["OAuth error: ..."]}`
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub errors: Vec<String>,
}
