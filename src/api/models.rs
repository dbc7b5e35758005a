//! Wire records for the WatchMe API.
//!
//! Field names on the wire are the API's own (`Title`, `Poster`, `imdbID`,
//! ...); serde renames map them onto snake_case struct fields. Validation
//! happens here, at the decoding boundary, so the rest of the application
//! only ever sees well-formed records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the API boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request itself failed (connection, DNS, non-2xx status).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but could not be decoded or violated an
    /// invariant of the data model.
    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
}

/// The fixed set of genre categories the API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenreName {
    Action,
    Comedy,
    Documentary,
    Drama,
    Horror,
    Family,
}

/// A movie category with numeric id and display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: GenreName,
    pub title: String,
}

/// A single rating source/value pair, e.g. `("Internet Movie Database", "8.5/10")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// A movie display record.
///
/// A validated `Movie` always has at least one rating; see
/// [`Movie::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Poster")]
    pub poster: String,
    #[serde(rename = "Runtime")]
    pub runtime: String,
    #[serde(rename = "Ratings")]
    pub ratings: Vec<Rating>,
}

impl Movie {
    /// Check the invariants the display layer relies on.
    ///
    /// The card renderer unconditionally shows the first rating, so a movie
    /// with an empty `Ratings` sequence is rejected here rather than failing
    /// at render time.
    pub fn validate(&self) -> Result<(), String> {
        if self.ratings.is_empty() {
            return Err(format!("movie {} has no ratings", self.imdb_id));
        }
        Ok(())
    }

    /// The rating shown on the movie card.
    ///
    /// Only call on validated movies; an unrated movie never gets past the
    /// API boundary.
    pub fn primary_rating(&self) -> &Rating {
        &self.ratings[0]
    }
}
