//! # TitleBar Component
//!
//! Top status bar: application name, catalog size, and the latest status
//! message (e.g. `Added "Inception"`, `Please enter a valid URL`).
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.movies.len(), &app.status_message);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Marquee (3 movies) | Added \"Heat\""`
//! 2. **Default**: `"Marquee (3 movies)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Top status bar component showing catalog size and status.
pub struct TitleBar<'a> {
    /// Number of movies in the catalog
    pub movie_count: usize,
    /// Status message from the last action
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(movie_count: usize, status_message: &'a str) -> Self {
        Self {
            movie_count,
            status_message,
        }
    }

    fn heading(&self) -> String {
        let noun = if self.movie_count == 1 { "movie" } else { "movies" };
        format!("Marquee ({} {})", self.movie_count, noun)
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.heading(),
            Style::default().fg(Color::Yellow),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
