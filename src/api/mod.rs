//! # API Module
//!
//! Typed access to the WatchMe HTTP API.
//!
//! ## Components
//!
//! - [`models`] - Wire records ([`Genre`], [`Movie`]) and their validation
//! - [`client`] - The [`MovieApi`] trait and its [`HttpMovieApi`] implementation
//!
//! ## Endpoints
//!
//! ```text
//! GET {base}/genres                    -> [Genre]
//! GET {base}/genres/{id}               -> Genre
//! GET {base}/movies/?Genre_id={id}     -> [Movie]
//! ```
//!
//! Responses are decoded and validated at this boundary: undecodable JSON or
//! records that violate invariants (a movie with no ratings) surface as
//! [`ApiError::MalformedResponse`] instead of failing later in the UI.

pub mod client;
pub mod models;

pub use client::{HttpMovieApi, MovieApi};
pub use models::{ApiError, Genre, GenreName, Movie, Rating};
