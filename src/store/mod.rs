//! # Store Module
//!
//! The movie state store: the single source of truth for genres, movies,
//! and the current selection.
//!
//! ## Refresh protocol
//!
//! ```text
//! select_genre(id) ─┬─> spawn movies_by_genre(id)  ──┐
//!                   └─> spawn genre(id)             ──┤ FetchEvent { cycle, .. }
//!                                                     v
//!                        UI loop ──> MovieStore::apply(event)
//! ```
//!
//! Every selection change bumps a monotonically increasing refresh cycle.
//! Fetch completions carry the cycle they were issued under; `apply`
//! discards completions whose cycle is no longer current, so overlapping
//! selections settle on the latest selection rather than the latest network
//! response.

mod movies;

pub use movies::{spawn_genre_load, spawn_refresh, FetchEvent, MovieStore, DEFAULT_GENRE_ID};
