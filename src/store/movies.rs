//! Movie state store and the fetch/refresh protocol.

use crate::api::{ApiError, Genre, Movie, MovieApi};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

/// Default genre selected before the user picks one.
pub const DEFAULT_GENRE_ID: u32 = 1;

/// Completion events posted by background fetch tasks.
///
/// Movie-list and genre-detail events are tagged with the refresh cycle they
/// were issued under; the genre list is fetched once at startup and carries
/// no cycle.
#[derive(Debug)]
pub enum FetchEvent {
    Genres(Result<Vec<Genre>, ApiError>),
    Movies {
        cycle: u64,
        result: Result<Vec<Movie>, ApiError>,
    },
    GenreDetail {
        cycle: u64,
        result: Result<Genre, ApiError>,
    },
}

/// Single source of truth for genres, movies, and the current selection.
///
/// The store is only ever mutated from the UI loop: fetch tasks post
/// [`FetchEvent`]s over a channel, and the loop feeds them to
/// [`MovieStore::apply`]. Fetch failures keep the previous value.
pub struct MovieStore {
    pub genres: Vec<Genre>,
    pub movies: Vec<Movie>,
    pub selected_genre_id: u32,
    pub selected_genre: Option<Genre>,
    cycle: u64,
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieStore {
    pub fn new() -> Self {
        Self {
            genres: Vec::new(),
            movies: Vec::new(),
            selected_genre_id: DEFAULT_GENRE_ID,
            selected_genre: None,
            cycle: 0,
        }
    }

    /// The refresh cycle the store currently considers live.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Change the selected genre and start a new refresh cycle.
    ///
    /// Returns the new cycle number; the caller dispatches the two fetches
    /// for it via [`spawn_refresh`]. The id is not checked against the genre
    /// list — selecting an unknown id just leaves the dependent slots empty
    /// once its fetches settle.
    pub fn select_genre(&mut self, id: u32) -> u64 {
        self.selected_genre_id = id;
        self.cycle += 1;
        self.cycle
    }

    /// Apply a fetch completion to the store.
    ///
    /// Completions from a superseded cycle are discarded; failed fetches
    /// retain the previous value.
    pub fn apply(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Genres(Ok(genres)) => {
                self.genres = genres;
            }
            FetchEvent::Genres(Err(err)) => {
                warn!(error = %err, "genre list fetch failed, keeping previous list");
            }
            FetchEvent::Movies { cycle, result } => {
                if cycle != self.cycle {
                    debug!(cycle, current = self.cycle, "discarding stale movie list");
                    return;
                }
                match result {
                    Ok(movies) => self.movies = movies,
                    Err(err) => {
                        warn!(error = %err, "movie list fetch failed, keeping previous list");
                    }
                }
            }
            FetchEvent::GenreDetail { cycle, result } => {
                if cycle != self.cycle {
                    debug!(cycle, current = self.cycle, "discarding stale genre detail");
                    return;
                }
                match result {
                    Ok(genre) => self.selected_genre = Some(genre),
                    Err(err) => {
                        warn!(error = %err, "genre detail fetch failed, keeping previous detail");
                    }
                }
            }
        }
    }
}

/// Spawn the one-time genre-list fetch.
pub fn spawn_genre_load(api: Arc<dyn MovieApi>, tx: UnboundedSender<FetchEvent>) {
    tokio::spawn(async move {
        let result = api.genres().await;
        // The receiver only goes away on shutdown.
        let _ = tx.send(FetchEvent::Genres(result));
    });
}

/// Spawn the two concurrent fetches for a refresh cycle: the movie list for
/// `genre_id` and its genre detail.
pub fn spawn_refresh(
    api: Arc<dyn MovieApi>,
    genre_id: u32,
    cycle: u64,
    tx: &UnboundedSender<FetchEvent>,
) {
    let movies_api = Arc::clone(&api);
    let movies_tx = tx.clone();
    tokio::spawn(async move {
        let result = movies_api.movies_by_genre(genre_id).await;
        let _ = movies_tx.send(FetchEvent::Movies { cycle, result });
    });

    let detail_tx = tx.clone();
    tokio::spawn(async move {
        let result = api.genre(genre_id).await;
        let _ = detail_tx.send(FetchEvent::GenreDetail { cycle, result });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GenreName;

    fn genre(id: u32, name: GenreName, title: &str) -> Genre {
        Genre {
            id,
            name,
            title: title.to_string(),
        }
    }

    fn movie(imdb_id: &str, title: &str) -> Movie {
        Movie {
            imdb_id: imdb_id.to_string(),
            title: title.to_string(),
            poster: format!("https://img.example.com/{imdb_id}.jpg"),
            runtime: "120 min".to_string(),
            ratings: vec![crate::api::Rating {
                source: "Internet Movie Database".to_string(),
                value: "7.5/10".to_string(),
            }],
        }
    }

    fn fetch_error() -> ApiError {
        ApiError::MalformedResponse {
            url: "http://localhost:3333/genres".to_string(),
            reason: "connection refused".to_string(),
        }
    }

    #[test]
    fn test_new_store_defaults() {
        let store = MovieStore::new();
        assert_eq!(store.selected_genre_id, DEFAULT_GENRE_ID);
        assert_eq!(store.cycle(), 0);
        assert!(store.genres.is_empty());
        assert!(store.movies.is_empty());
        assert!(store.selected_genre.is_none());
    }

    #[test]
    fn test_select_genre_bumps_cycle() {
        let mut store = MovieStore::new();
        let first = store.select_genre(2);
        assert_eq!(first, 1);
        assert_eq!(store.selected_genre_id, 2);

        let second = store.select_genre(3);
        assert_eq!(second, 2);
        assert_eq!(store.selected_genre_id, 3);
    }

    #[test]
    fn test_apply_genres_replaces_list() {
        let mut store = MovieStore::new();
        store.apply(FetchEvent::Genres(Ok(vec![
            genre(1, GenreName::Action, "Action"),
            genre(2, GenreName::Comedy, "Comedy"),
        ])));
        assert_eq!(store.genres.len(), 2);
        assert_eq!(store.genres[0].title, "Action");
    }

    #[test]
    fn test_genre_fetch_failure_keeps_empty_list() {
        let mut store = MovieStore::new();
        store.apply(FetchEvent::Genres(Err(fetch_error())));
        assert!(store.genres.is_empty());
    }

    #[test]
    fn test_apply_movies_for_current_cycle() {
        let mut store = MovieStore::new();
        store.apply(FetchEvent::Movies {
            cycle: 0,
            result: Ok(vec![movie("tt0001", "First")]),
        });
        assert_eq!(store.movies.len(), 1);
        assert_eq!(store.movies[0].title, "First");
    }

    #[test]
    fn test_stale_movie_list_is_discarded() {
        let mut store = MovieStore::new();

        // Genre 1's fetch is in flight when the user selects genre 2.
        let stale_cycle = store.cycle();
        let live_cycle = store.select_genre(2);

        // Genre 2's response lands first.
        store.apply(FetchEvent::Movies {
            cycle: live_cycle,
            result: Ok(vec![movie("tt0002", "Comedy Movie")]),
        });

        // Genre 1's late response must not overwrite it.
        store.apply(FetchEvent::Movies {
            cycle: stale_cycle,
            result: Ok(vec![movie("tt0001", "Action Movie")]),
        });

        assert_eq!(store.movies.len(), 1);
        assert_eq!(store.movies[0].title, "Comedy Movie");
    }

    #[test]
    fn test_stale_genre_detail_is_discarded() {
        let mut store = MovieStore::new();
        let stale_cycle = store.cycle();
        let live_cycle = store.select_genre(2);

        store.apply(FetchEvent::GenreDetail {
            cycle: live_cycle,
            result: Ok(genre(2, GenreName::Comedy, "Comedy")),
        });
        store.apply(FetchEvent::GenreDetail {
            cycle: stale_cycle,
            result: Ok(genre(1, GenreName::Action, "Action")),
        });

        assert_eq!(store.selected_genre.as_ref().map(|g| g.id), Some(2));
    }

    #[test]
    fn test_movie_fetch_failure_keeps_previous_list() {
        let mut store = MovieStore::new();
        store.apply(FetchEvent::Movies {
            cycle: 0,
            result: Ok(vec![movie("tt0001", "First")]),
        });

        let cycle = store.select_genre(2);
        store.apply(FetchEvent::Movies {
            cycle,
            result: Err(fetch_error()),
        });

        // Previous list survives the failed refresh.
        assert_eq!(store.movies.len(), 1);
        assert_eq!(store.movies[0].title, "First");
    }

    #[test]
    fn test_reselecting_same_genre_is_idempotent() {
        let mut store = MovieStore::new();

        let first = store.select_genre(2);
        store.apply(FetchEvent::Movies {
            cycle: first,
            result: Ok(vec![movie("tt0002", "Comedy Movie")]),
        });
        store.apply(FetchEvent::GenreDetail {
            cycle: first,
            result: Ok(genre(2, GenreName::Comedy, "Comedy")),
        });

        // Selecting the same id again and settling the same responses
        // leaves the state unchanged.
        let second = store.select_genre(2);
        store.apply(FetchEvent::Movies {
            cycle: second,
            result: Ok(vec![movie("tt0002", "Comedy Movie")]),
        });
        store.apply(FetchEvent::GenreDetail {
            cycle: second,
            result: Ok(genre(2, GenreName::Comedy, "Comedy")),
        });

        assert_eq!(store.selected_genre_id, 2);
        assert_eq!(store.movies.len(), 1);
        assert_eq!(store.movies[0].imdb_id, "tt0002");
        assert_eq!(store.selected_genre.as_ref().map(|g| g.id), Some(2));
    }
}
