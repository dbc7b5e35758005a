//! # WatchMe CLI Entry Point
//!
//! This is the main entry point for the WatchMe TUI application.
//!
//! ## Overview
//!
//! WatchMe is a terminal user interface for browsing movies by genre. It
//! fetches genres and movies from a WatchMe API instance and presents them
//! in a sidebar/content layout.
//!
//! ## Usage
//!
//! ```bash
//! # Use the configured API (default http://localhost:3333)
//! watchme
//!
//! # Point at a different API instance
//! watchme --api-url http://movies.example.com
//!
//! # Debug mode - print fetched genres and movies and exit
//! watchme --debug
//! ```
//!
//! ## Architecture
//!
//! 1. **Composition**: the movie store is constructed here and passed
//!    explicitly into the UI
//! 2. **Fetching**: genre/movie fetches run as background tasks posting
//!    completion events over a channel
//! 3. **UI**: the event loop drains fetch events, applies them to the
//!    store, draws, and polls the keyboard
//!
//! ## Key Bindings
//!
//! - `q` / `Q` - Quit the application
//! - `j` / `Down` - Move cursor down
//! - `k` / `Up` - Move cursor up
//! - `Enter` - Select the highlighted genre (sidebar)
//! - `Tab` - Toggle focus between panes
//! - `r` - Refresh the current genre
//! - `i` - Show/hide the help modal

use watchme::api::{HttpMovieApi, MovieApi};
use watchme::store::{spawn_genre_load, spawn_refresh, FetchEvent, MovieStore, DEFAULT_GENRE_ID};
use watchme::ui::config::Config;
use watchme::ui::theme::Theme;
use watchme::ui::{render, App};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// WatchMe - browse movies by genre from your terminal
#[derive(Parser, Debug)]
#[command(name = "watchme")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse movies by genre from your terminal", long_about = None)]
struct Args {
    /// Base URL of the WatchMe API (overrides the config file)
    #[arg(short, long, value_name = "URL")]
    api_url: Option<String>,

    /// Print fetched genres and movies and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    if let Err(e) = init_logging() {
        eprintln!("Warning: Could not initialize logging: {}", e);
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        // Call the original panic hook
        original_hook(panic_info);
    }));

    // Run the application and ensure cleanup happens
    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

/// Route tracing output to a file in the XDG data directory. The TUI owns
/// the terminal, so nothing may log to stdout/stderr while it runs.
fn init_logging() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let dirs = directories::ProjectDirs::from("", "", "watchme")
        .context("Could not determine application data directory")?;
    std::fs::create_dir_all(dirs.data_dir()).with_context(|| {
        format!(
            "Failed to create data directory: {}",
            dirs.data_dir().display()
        )
    })?;

    let log_path = dirs.data_dir().join("watchme.log");
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

async fn run_application(args: Args) -> Result<()> {
    let config = Config::load();

    // The --api-url flag wins over the config file.
    let api_url = args.api_url.unwrap_or_else(|| config.api_url.clone());

    let theme = Theme::by_name(&config.theme)
        .unwrap_or_else(Theme::default_theme)
        .clone();

    let api: Arc<dyn MovieApi> = Arc::new(HttpMovieApi::new(api_url));

    // Debug mode: fetch once, print, exit
    if args.debug {
        return run_debug(api.as_ref()).await;
    }

    // Construct the store once; it is passed explicitly into the UI.
    let store = MovieStore::new();
    let (tx, rx) = mpsc::unbounded_channel::<FetchEvent>();

    // Initial fetches: the genre list plus the default selection's data.
    spawn_genre_load(Arc::clone(&api), tx.clone());
    spawn_refresh(Arc::clone(&api), store.selected_genre_id, store.cycle(), &tx);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(store, theme);

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &api, rx, &tx, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

/// Fetch the genre list and the default genre's movies, print both, exit.
async fn run_debug(api: &dyn MovieApi) -> Result<()> {
    let genres = api.genres().await.context("Failed to fetch genre list")?;

    println!("=== Genres ===");
    for genre in &genres {
        println!("  {:>3}  {:?}  {}", genre.id, genre.name, genre.title);
    }

    let movies = api
        .movies_by_genre(DEFAULT_GENRE_ID)
        .await
        .with_context(|| format!("Failed to fetch movies for genre {}", DEFAULT_GENRE_ID))?;

    println!("\n=== Movies (Genre_id={}) ===", DEFAULT_GENRE_ID);
    for movie in &movies {
        println!(
            "  {}  {}  [{} | {}]",
            movie.imdb_id,
            movie.title,
            movie.primary_rating().value,
            movie.runtime
        );
    }

    println!("\nTotal: {} genres, {} movies", genres.len(), movies.len());
    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: &Arc<dyn MovieApi>,
    mut events: mpsc::UnboundedReceiver<FetchEvent>,
    tx: &mpsc::UnboundedSender<FetchEvent>,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        // Apply any fetch completions that arrived since the last tick.
        while let Ok(fetch_event) = events.try_recv() {
            app.apply_event(fetch_event);
        }

        terminal
            .draw(|f| render(f, app))
            .context("Failed to draw terminal UI")?;

        // Short poll timeout so fetch completions show up promptly.
        let input = event_reader.read_event(Duration::from_millis(100))?;

        let input = match input {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = input {
            if let Some(request) = app.handle_key(key) {
                spawn_refresh(Arc::clone(api), request.genre_id, request.cycle, tx);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
