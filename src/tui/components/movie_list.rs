//! # Movie List Component
//!
//! Read-only view of the catalog, newest entries at the bottom. Each entry
//! shows the title, a one-line description, and the IMDb link.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::movie::Movie;
use crate::tui::component::Component;

pub struct MovieList<'a> {
    pub movies: &'a [Movie],
}

impl<'a> MovieList<'a> {
    pub fn new(movies: &'a [Movie]) -> Self {
        Self { movies }
    }
}

impl Component for MovieList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Movies ({}) ", self.movies.len()))
            .padding(Padding::horizontal(1));

        if self.movies.is_empty() {
            let empty = Paragraph::new("No movies yet.\nUse the form to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // borders + padding
        let inner_width = area.width.saturating_sub(4) as usize;

        let items: Vec<ListItem> = self
            .movies
            .iter()
            .map(|movie| {
                let id_tag = format!("  [{}]", movie.imdb_id());
                let title_width = inner_width.saturating_sub(id_tag.width());
                let mut lines = vec![Line::from(vec![
                    Span::styled(
                        truncate_str(movie.title(), title_width),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(id_tag, Style::default().fg(Color::Yellow)),
                ])];
                if !movie.description().is_empty() {
                    let first_line = movie.description().lines().next().unwrap_or("");
                    lines.push(Line::from(Span::styled(
                        truncate_str(first_line, inner_width),
                        Style::default().fg(Color::Gray),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    truncate_str(movie.imdb_url(), inner_width),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
                )));
                lines.push(Line::default());
                ListItem::new(lines)
            })
            .collect();

        // Keep the newest entry in view
        let mut list_state = ListState::default();
        list_state.select(Some(self.movies.len() - 1));

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut kept = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        kept.push(c);
    }
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_movie;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(movies: &[Movie], width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| MovieList::new(movies).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_empty_catalog_message() {
        let text = render_text(&[], 40, 6);
        assert!(text.contains("Movies (0)"));
        assert!(text.contains("No movies yet."));
    }

    #[test]
    fn test_renders_entries() {
        let movies = vec![
            sample_movie("tt1"),
            Movie::new("Heat", "", "https://x.com/h.png", "https://imdb.com/tt2", "tt2"),
        ];
        let text = render_text(&movies, 60, 12);
        assert!(text.contains("Movies (2)"));
        assert!(text.contains("Movie tt1"));
        assert!(text.contains("A sample entry"));
        assert!(text.contains("Heat"));
        assert!(text.contains("[tt2]"));
        assert!(text.contains("https://imdb.com/tt2"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Inception", 20), "Inception");
        assert_eq!(truncate_str("Inception", 6), "Inc...");
        assert_eq!(truncate_str("Inception", 2), "..");
        assert_eq!(truncate_str("Amélie Poulain", 8), "Améli...");
    }

    #[test]
    fn test_truncate_str_counts_display_columns() {
        // Each of these takes two columns
        let title = "千と千尋の神隠し";
        assert_eq!(truncate_str(title, 16), title);
        assert_eq!(truncate_str(title, 9), "千と千...");
        // A wide char that would overshoot the budget is dropped, not split
        assert_eq!(truncate_str(title, 8), "千と...");
        assert!(truncate_str(title, 8).width() <= 8);
    }

    #[test]
    fn test_wide_title_fits_its_row() {
        let movies = vec![Movie::new(
            "千と千尋の神隠し 千と千尋の神隠し",
            "",
            "https://x.com/s.png",
            "https://imdb.com/tt0245429",
            "tt0245429",
        )];
        let text = render_text(&movies, 40, 8);
        // The id tag after the title is still on screen
        assert!(text.contains("[tt0245429]"));
        assert!(text.contains("..."));
    }
}
