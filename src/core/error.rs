use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnsplashError {
    #[error("Access key not configured. Set UNSPLASH_ACCESS_KEY environment variable or run: unsplash config set api.access_key <your-key>")]
    MissingAccessKey,

    #[error("API error: {message}")]
    Api {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Unsplash returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl From<reqwest::Error> for UnsplashError {
    fn from(err: reqwest::Error) -> Self {
        UnsplashError::Api {
            message: err.to_string(),
            source: Some(err),
        }
    }
}
