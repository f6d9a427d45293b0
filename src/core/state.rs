//! # Application State
//!
//! Core business state for Marquee. Domain data only; presentation state
//! (focus, cursors, touched fields) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── movies: Vec<Movie>         // the catalog, in insertion order
//! ├── status_message: String     // status bar text
//! └── alert: Option<String>      // blocking notification, if open
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::movie::Movie;

pub struct App {
    pub movies: Vec<Movie>,
    pub status_message: String,
    /// While `Some`, the notification overlay is shown and swallows input.
    pub alert: Option<String>,
}

impl App {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies,
            status_message: String::from("Add a movie"),
            alert: None,
        }
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }
}
