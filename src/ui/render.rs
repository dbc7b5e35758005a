use crate::api::{GenreName, Movie};
use crate::ui::app::{App, FocusPane};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    // Main layout: Header + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);

    // Split body into sidebar (genres) and content (movie cards)
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[1]);

    render_sidebar(frame, app, body_chunks[0]);
    render_movies(frame, app, body_chunks[1]);

    render_footer(frame, app, main_chunks[2]);

    if app.show_help {
        render_help_modal(frame, app);
    }
}

/// Icon shown next to a genre in the sidebar.
fn genre_icon(name: GenreName) -> &'static str {
    match name {
        GenreName::Action => "🎬",
        GenreName::Comedy => "😄",
        GenreName::Documentary => "🎥",
        GenreName::Drama => "🎭",
        GenreName::Horror => "👻",
        GenreName::Family => "👪",
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut spans = vec![Span::styled(
        "  WatchMe ",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(genre) = &app.store.selected_genre {
        spans.push(Span::styled("· ", Style::default().fg(theme.fg_dim)));
        spans.push(Span::styled(
            format!("Category: {}", genre.title),
            Style::default().fg(theme.secondary),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().bg(theme.bg));

    frame.render_widget(header, area);
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let border_color = if app.focus == FocusPane::Sidebar {
        theme.accent
    } else {
        theme.fg_dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Genres")
        .border_style(Style::default().fg(border_color));

    if app.store.genres.is_empty() {
        let placeholder = Paragraph::new("No genres loaded")
            .style(Style::default().fg(theme.fg_dim))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .genres
        .iter()
        .enumerate()
        .map(|(i, genre)| {
            let is_cursor = i == app.sidebar_index;
            let is_selected = genre.id == app.store.selected_genre_id;

            let marker = if is_selected { "●" } else { " " };
            let content = format!(" {} {} {}", marker, genre_icon(genre.name), genre.title);

            let style = if is_cursor {
                Style::default()
                    .fg(theme.bg)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.fg)
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(theme.fg));

    frame.render_widget(list, area);
}

/// Lines making up a single movie card.
fn movie_card<'a>(app: &'a App, movie: &'a Movie, is_cursor: bool) -> Text<'a> {
    let theme = &app.theme;

    let title_style = if is_cursor {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
    };
    let cursor_marker = if is_cursor { "▸ " } else { "  " };

    let rating = movie.primary_rating();

    Text::from(vec![
        Line::from(vec![
            Span::styled(cursor_marker, Style::default().fg(theme.accent)),
            Span::styled(&movie.title, title_style),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled("⭐ ", Style::default().fg(theme.rating)),
            Span::styled(&rating.value, Style::default().fg(theme.rating)),
            Span::raw("   "),
            Span::styled("🕐 ", Style::default().fg(theme.fg_dim)),
            Span::styled(&movie.runtime, Style::default().fg(theme.fg_dim)),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(&movie.poster, Style::default().fg(theme.fg_dim)),
        ]),
        Line::from(""),
    ])
}

// Rows a card occupies in the list: title, rating/runtime, poster, spacer.
const CARD_HEIGHT: usize = 4;

fn render_movies(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let border_color = if app.focus == FocusPane::Movies {
        theme.accent
    } else {
        theme.fg_dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Movies")
        .border_style(Style::default().fg(border_color));

    if app.store.movies.is_empty() {
        let placeholder = Paragraph::new("No movies in this category")
            .style(Style::default().fg(theme.fg_dim))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    // Window the list so the cursor's card stays visible.
    let visible_cards = (area.height.saturating_sub(2) as usize / CARD_HEIGHT).max(1);
    let window_start = if app.movie_index >= visible_cards {
        app.movie_index + 1 - visible_cards
    } else {
        0
    };

    let items: Vec<ListItem> = app
        .store
        .movies
        .iter()
        .enumerate()
        .skip(window_start)
        .take(visible_cards)
        .map(|(i, movie)| ListItem::new(movie_card(app, movie, i == app.movie_index)))
        .collect();

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(theme.fg));

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        FocusPane::Sidebar => {
            "[↑↓/jk] Navigate  [Enter] Select Genre  [Tab] Switch  [r] Refresh  [i] Help  [q] Quit"
        }
        FocusPane::Movies => "[↑↓/jk] Scroll  [Tab] Switch  [r] Refresh  [i] Help  [q] Quit",
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(app.theme.fg_dim))
        .block(Block::default());

    frame.render_widget(footer, area);
}

fn render_help_modal(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(50, 40, frame.area());

    let text = vec![
        Line::from(Span::styled(
            "Key Bindings",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  j / Down     Move cursor down"),
        Line::from("  k / Up       Move cursor up"),
        Line::from("  Enter        Select genre (sidebar)"),
        Line::from("  Tab          Switch pane"),
        Line::from("  r            Refresh current genre"),
        Line::from("  i / Esc      Close this help"),
        Line::from("  q            Quit"),
    ];

    let modal = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().fg(theme.fg).bg(theme.bg))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}

/// A centered rect taking `percent_x` / `percent_y` of `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
