//! # UI Module
//!
//! This module provides the terminal user interface components for WatchMe.
//!
//! ## Components
//!
//! - [`App`] - UI state management (focus, cursors, modal flags) around the
//!   injected movie store
//! - [`mod@render`] - Rendering functions for drawing the TUI
//! - [`theme`] - Color themes
//! - [`config`] - Persisted user configuration
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │             Header (WatchMe · Category)         │
//! ├──────────────┬──────────────────────────────────┤
//! │              │                                  │
//! │   Sidebar    │           Movie Cards            │
//! │  (genres)    │   (title, rating, runtime,       │
//! │              │    poster URL)                   │
//! │              │                                  │
//! ├──────────────┴──────────────────────────────────┤
//! │                    Footer                       │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Features
//!
//! - Genre selection in the sidebar triggers a refresh of the movie list
//! - Focus switching between panes with Tab
//! - Help modal with key bindings

pub mod app;
pub mod config;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
