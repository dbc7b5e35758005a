//! Movie store integration tests
//!
//! Exercises the fetch/refresh protocol end-to-end: a mock API feeds
//! background tasks whose completions flow over the channel into the store,
//! exactly as in the application event loop.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::Notify;
use watchme::api::{ApiError, Genre, GenreName, Movie, MovieApi, Rating};
use watchme::store::{spawn_genre_load, spawn_refresh, FetchEvent, MovieStore};

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
        ratings: vec![Rating {
            source: "Internet Movie Database".to_string(),
            value: "8.4/10".to_string(),
        }],
    }
}

/// Mock [`MovieApi`] serving canned data, with an optional gate that holds
/// back one genre's movie-list response until released.
struct MockApi {
    genres: Result<Vec<Genre>, ()>,
    movies: HashMap<u32, Vec<Movie>>,
    gated_genre: Option<(u32, Arc<Notify>)>,
}

impl MockApi {
    fn new(genres: Vec<Genre>, movies: HashMap<u32, Vec<Movie>>) -> Self {
        Self {
            genres: Ok(genres),
            movies,
            gated_genre: None,
        }
    }

    fn failing_genres() -> Self {
        Self {
            genres: Err(()),
            movies: HashMap::new(),
            gated_genre: None,
        }
    }

    fn gate_movies(mut self, genre_id: u32) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gated_genre = Some((genre_id, Arc::clone(&gate)));
        (self, gate)
    }

    fn error(url: &str) -> ApiError {
        ApiError::MalformedResponse {
            url: url.to_string(),
            reason: "mock failure".to_string(),
        }
    }
}

#[async_trait]
impl MovieApi for MockApi {
    async fn genres(&self) -> Result<Vec<Genre>, ApiError> {
        self.genres
            .clone()
            .map_err(|()| Self::error("mock:/genres"))
    }

    async fn genre(&self, id: u32) -> Result<Genre, ApiError> {
        self.genres
            .clone()
            .map_err(|()| Self::error("mock:/genres"))?
            .into_iter()
            .find(|g| g.id == id)
            .ok_or_else(|| Self::error(&format!("mock:/genres/{id}")))
    }

    async fn movies_by_genre(&self, id: u32) -> Result<Vec<Movie>, ApiError> {
        if let Some((gated_id, gate)) = &self.gated_genre {
            if *gated_id == id {
                gate.notified().await;
            }
        }
        Ok(self.movies.get(&id).cloned().unwrap_or_default())
    }
}

fn two_genre_api() -> MockApi {
    let genres = vec![
        genre(1, GenreName::Action, "Action"),
        genre(2, GenreName::Comedy, "Comedy"),
    ];
    let mut movies = HashMap::new();
    movies.insert(1, vec![movie("tt0001", "Action Movie")]);
    movies.insert(2, vec![movie("tt0002", "Comedy Movie")]);
    MockApi::new(genres, movies)
}

async fn recv_and_apply(store: &mut MovieStore, rx: &mut mpsc::UnboundedReceiver<FetchEvent>) {
    let event = rx.recv().await.expect("fetch event");
    store.apply(event);
}

/// Startup scenario: genres resolve, then the default selection's movie
/// list and detail resolve, and the store exposes the fetched data.
#[tokio::test]
async fn test_initial_mount_populates_store() {
    let api: Arc<dyn MovieApi> = Arc::new(two_genre_api());
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut store = MovieStore::new();
    spawn_genre_load(Arc::clone(&api), tx.clone());
    spawn_refresh(Arc::clone(&api), store.selected_genre_id, store.cycle(), &tx);

    // One genre-list event plus the two refresh completions.
    for _ in 0..3 {
        recv_and_apply(&mut store, &mut rx).await;
    }

    assert_eq!(store.genres.len(), 2);
    assert_eq!(store.movies.len(), 1);
    assert_eq!(store.movies[0].title, "Action Movie");
    assert_eq!(store.movies[0].ratings[0].value, "8.4/10");
    assert_eq!(store.selected_genre.as_ref().map(|g| g.id), Some(1));
}

/// Selecting a valid genre id eventually yields that genre's detail and
/// movie list.
#[tokio::test]
async fn test_select_genre_settles_on_selection() {
    let api: Arc<dyn MovieApi> = Arc::new(two_genre_api());
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut store = MovieStore::new();
    let cycle = store.select_genre(2);
    spawn_refresh(Arc::clone(&api), 2, cycle, &tx);

    for _ in 0..2 {
        recv_and_apply(&mut store, &mut rx).await;
    }

    assert_eq!(store.selected_genre.as_ref().map(|g| g.id), Some(2));
    assert_eq!(store.movies.len(), 1);
    assert_eq!(store.movies[0].title, "Comedy Movie");
}

/// Race regression: genre 1's movie fetch is still pending when genre 2 is
/// selected, and its response arrives last. The stale completion must be
/// discarded, leaving genre 2's data in place.
#[tokio::test]
async fn test_late_response_from_superseded_selection_is_discarded() {
    let (mock, gate) = two_genre_api().gate_movies(1);
    let api: Arc<dyn MovieApi> = Arc::new(mock);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut store = MovieStore::new();

    // Genre 1's refresh goes out first; its movie list is held at the gate.
    spawn_refresh(Arc::clone(&api), store.selected_genre_id, store.cycle(), &tx);

    // The user selects genre 2 while genre 1 is still in flight.
    let cycle = store.select_genre(2);
    spawn_refresh(Arc::clone(&api), 2, cycle, &tx);

    // Genre 1's detail plus genre 2's two completions arrive first.
    for _ in 0..3 {
        recv_and_apply(&mut store, &mut rx).await;
    }

    // Now genre 1's movie list finally lands.
    gate.notify_one();
    recv_and_apply(&mut store, &mut rx).await;

    assert_eq!(store.selected_genre_id, 2);
    assert_eq!(store.movies.len(), 1);
    assert_eq!(
        store.movies[0].title, "Comedy Movie",
        "stale genre-1 data must not overwrite the live selection"
    );
    assert_eq!(store.selected_genre.as_ref().map(|g| g.id), Some(2));
}

/// A failed genre-list fetch leaves the genre list empty with no crash.
#[tokio::test]
async fn test_genre_list_failure_leaves_genres_empty() {
    let api: Arc<dyn MovieApi> = Arc::new(MockApi::failing_genres());
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut store = MovieStore::new();
    spawn_genre_load(Arc::clone(&api), tx.clone());
    recv_and_apply(&mut store, &mut rx).await;

    assert!(store.genres.is_empty());
}

/// Selecting an id with no data settles on an empty movie list.
#[tokio::test]
async fn test_unknown_genre_id_yields_empty_data() {
    let api: Arc<dyn MovieApi> = Arc::new(two_genre_api());
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut store = MovieStore::new();
    // Load genre 1's movies first so there is something to clear.
    spawn_refresh(Arc::clone(&api), 1, store.cycle(), &tx);
    for _ in 0..2 {
        recv_and_apply(&mut store, &mut rx).await;
    }
    assert_eq!(store.movies.len(), 1);

    let cycle = store.select_genre(99);
    spawn_refresh(Arc::clone(&api), 99, cycle, &tx);
    for _ in 0..2 {
        recv_and_apply(&mut store, &mut rx).await;
    }

    assert!(store.movies.is_empty());
    // The detail lookup failed, so the previous detail is retained.
    assert_eq!(store.selected_genre.as_ref().map(|g| g.id), Some(1));
    assert_eq!(store.selected_genre_id, 99);
}
