use crate::api::Genre;
use crate::store::{FetchEvent, MovieStore};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Sidebar,
    Movies,
}

/// A refresh requested by key handling.
///
/// Key handling is a pure state transition; the event loop dispatches the
/// actual fetches for the returned request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshRequest {
    pub genre_id: u32,
    pub cycle: u64,
}

/// UI state around the injected [`MovieStore`].
///
/// The store is constructed once in `main` and passed in here; nothing else
/// in the application holds movie state.
pub struct App {
    pub store: MovieStore,
    pub theme: Theme,
    pub focus: FocusPane,
    pub sidebar_index: usize,
    pub movie_index: usize,
    pub should_quit: bool,
    pub show_help: bool,
}

impl App {
    pub fn new(store: MovieStore, theme: Theme) -> Self {
        Self {
            store,
            theme,
            focus: FocusPane::Sidebar,
            sidebar_index: 0,
            movie_index: 0,
            should_quit: false,
            show_help: false,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Sidebar => FocusPane::Movies,
            FocusPane::Movies => FocusPane::Sidebar,
        };
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Move the cursor down in the focused pane, wrapping at the end.
    pub fn next(&mut self) {
        match self.focus {
            FocusPane::Sidebar => {
                let count = self.store.genres.len();
                if count > 0 {
                    self.sidebar_index = (self.sidebar_index + 1) % count;
                }
            }
            FocusPane::Movies => {
                let count = self.store.movies.len();
                if count > 0 {
                    self.movie_index = (self.movie_index + 1) % count;
                }
            }
        }
    }

    /// Move the cursor up in the focused pane, wrapping at the start.
    pub fn previous(&mut self) {
        match self.focus {
            FocusPane::Sidebar => {
                let count = self.store.genres.len();
                if count > 0 {
                    self.sidebar_index = if self.sidebar_index > 0 {
                        self.sidebar_index - 1
                    } else {
                        count - 1
                    };
                }
            }
            FocusPane::Movies => {
                let count = self.store.movies.len();
                if count > 0 {
                    self.movie_index = if self.movie_index > 0 {
                        self.movie_index - 1
                    } else {
                        count - 1
                    };
                }
            }
        }
    }

    /// The genre row the sidebar cursor is on (bounds-checked).
    pub fn highlighted_genre(&self) -> Option<&Genre> {
        self.store.genres.get(self.sidebar_index)
    }

    /// Select the highlighted genre and request a refresh for it.
    pub fn select_highlighted(&mut self) -> Option<RefreshRequest> {
        let genre_id = self.highlighted_genre()?.id;
        let cycle = self.store.select_genre(genre_id);
        Some(RefreshRequest { genre_id, cycle })
    }

    /// Request a fresh fetch of the current selection.
    pub fn refresh_current(&mut self) -> RefreshRequest {
        let genre_id = self.store.selected_genre_id;
        let cycle = self.store.select_genre(genre_id);
        RefreshRequest { genre_id, cycle }
    }

    /// Apply a fetch completion and keep the cursors inside the new lists.
    pub fn apply_event(&mut self, event: FetchEvent) {
        self.store.apply(event);

        if self.store.genres.is_empty() {
            self.sidebar_index = 0;
        } else {
            self.sidebar_index = self.sidebar_index.min(self.store.genres.len() - 1);
        }
        if self.store.movies.is_empty() {
            self.movie_index = 0;
        } else {
            self.movie_index = self.movie_index.min(self.store.movies.len() - 1);
        }
    }

    /// Handle a key press. Returns a refresh request when the selection
    /// changed; the caller dispatches the fetches.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<RefreshRequest> {
        // The help modal swallows everything except its own close keys.
        if self.show_help {
            match key.code {
                KeyCode::Char('i') | KeyCode::Esc => self.toggle_help(),
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('i') => {
                self.toggle_help();
            }
            KeyCode::Tab => {
                self.toggle_focus();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
            }
            KeyCode::Char('r') => {
                return Some(self.refresh_current());
            }
            KeyCode::Enter => {
                if self.focus == FocusPane::Sidebar {
                    return self.select_highlighted();
                }
            }
            _ => {}
        }

        None
    }
}
