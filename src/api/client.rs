//! HTTP client for the WatchMe API.
//!
//! [`HttpMovieApi`] is a thin accessor over `reqwest` configured with a base
//! URL. The [`MovieApi`] trait abstracts the three operations so tests can
//! substitute a mock implementation.

use super::models::{ApiError, Genre, Movie};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Operations the WatchMe API exposes.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Fetch the full genre list.
    async fn genres(&self) -> Result<Vec<Genre>, ApiError>;

    /// Fetch the detail record for a single genre.
    async fn genre(&self, id: u32) -> Result<Genre, ApiError>;

    /// Fetch the movie list filtered by genre id.
    async fn movies_by_genre(&self, id: u32) -> Result<Vec<Movie>, ApiError>;
}

/// Production [`MovieApi`] implementation over HTTP.
pub struct HttpMovieApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpMovieApi {
    /// Create a client for the API at `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Issue a GET for `path` and decode the JSON body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "fetching");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        let response = response
            .error_for_status()
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::MalformedResponse {
                url,
                reason: err.to_string(),
            })
    }
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    async fn genres(&self) -> Result<Vec<Genre>, ApiError> {
        self.get_json("genres").await
    }

    async fn genre(&self, id: u32) -> Result<Genre, ApiError> {
        self.get_json(&format!("genres/{id}")).await
    }

    async fn movies_by_genre(&self, id: u32) -> Result<Vec<Movie>, ApiError> {
        let path = format!("movies/?Genre_id={id}");
        let movies: Vec<Movie> = self.get_json(&path).await?;

        // Enforce data-model invariants before the list reaches the store.
        for movie in &movies {
            movie.validate().map_err(|reason| ApiError::MalformedResponse {
                url: format!("{}/{}", self.base_url, path),
                reason,
            })?;
        }

        Ok(movies)
    }
}
