//! # TextField Component
//!
//! A single-line labelled input that owns its own "touched" tracking and
//! renders its own inline validation message.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TextFieldState` lives in the parent view, one per field
//! - `TextField` is created per frame/event with borrowed props and state
//!
//! ## Props
//!
//! `name`, `label`, `value`, `required`, `validate`, plus `forced_error`
//! (a marker the parent sets after a failed submit) and `focused`.
//!
//! ## Reset by generation
//!
//! The parent passes its reset generation with every call. When it differs
//! from the one the state last saw, the field drops back to untouched with
//! the cursor at the start. No other invalidation message exists.
//!
//! ## Error display
//!
//! 1. `forced_error` set → `invalid_message`
//! 2. touched, required and empty → "<Label> is required"
//! 3. touched and `validate` returns false → `invalid_message`
//!
//! Without an `invalid_message` the field falls back to "<Label> is invalid".

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Bordered input (3) + message line (1)
pub const FIELD_HEIGHT: u16 = 4;

/// Events emitted by a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFieldEvent {
    /// The value was edited; carries the full new value.
    Changed(String),
}

/// Per-field presentation state, keyed by the parent's reset generation.
#[derive(Debug, Clone, Default)]
pub struct TextFieldState {
    touched: bool,
    generation: u64,
    /// Cursor as byte offset in the value
    cursor: usize,
}

impl TextFieldState {
    pub fn new(generation: u64) -> Self {
        Self {
            touched: false,
            generation,
            cursor: 0,
        }
    }

    /// Drop back to untouched if the parent moved to a new generation.
    pub fn sync(&mut self, generation: u64) {
        if self.generation != generation {
            *self = Self::new(generation);
        }
    }

    /// Focus left the field.
    pub fn blur(&mut self) {
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Place the cursor at the end of `value` (used when focus arrives).
    pub fn move_to_end(&mut self, value: &str) {
        self.cursor = value.len();
    }

    /// Cursor clamped to `value` and snapped back to a char boundary.
    fn cursor_in(&self, value: &str) -> usize {
        let mut pos = self.cursor.min(value.len());
        while !value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}

/// Transient wrapper binding props to a `TextFieldState`.
pub struct TextField<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub value: &'a str,
    pub required: bool,
    pub validate: Option<fn(&str) -> bool>,
    pub forced_error: bool,
    pub focused: bool,
    pub invalid_message: Option<&'a str>,
    state: &'a mut TextFieldState,
}

impl<'a> TextField<'a> {
    pub fn new(
        name: &'a str,
        label: &'a str,
        value: &'a str,
        state: &'a mut TextFieldState,
        generation: u64,
    ) -> Self {
        state.sync(generation);
        Self {
            name,
            label,
            value,
            required: false,
            validate: None,
            forced_error: false,
            focused: false,
            invalid_message: None,
            state,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn validate(mut self, validate: Option<fn(&str) -> bool>) -> Self {
        self.validate = validate;
        self
    }

    pub fn forced_error(mut self, forced_error: bool) -> Self {
        self.forced_error = forced_error;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn invalid_message(mut self, message: &'a str) -> Self {
        self.invalid_message = Some(message);
        self
    }

    /// The inline message to show, if any.
    pub fn error(&self) -> Option<String> {
        if self.forced_error {
            return Some(self.invalid_text());
        }
        if !self.state.touched {
            return None;
        }
        if self.required && self.value.is_empty() {
            return Some(format!("{} is required", self.label));
        }
        match self.validate {
            Some(validate) if !validate(self.value) => Some(self.invalid_text()),
            _ => None,
        }
    }

    fn invalid_text(&self) -> String {
        match self.invalid_message {
            Some(message) => message.to_string(),
            None => format!("{} is invalid", self.label),
        }
    }

    fn edited(&mut self, value: String, cursor: usize) -> Option<TextFieldEvent> {
        debug!("Field {} edited ({} bytes)", self.name, value.len());
        self.state.cursor = cursor;
        Some(TextFieldEvent::Changed(value))
    }
}

impl Component for TextField<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, message_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        let error = self.error();
        let border_color = match (&error, self.focused) {
            (Some(_), _) => Color::Red,
            (None, true) => Color::Cyan,
            (None, false) => Color::DarkGray,
        };

        let title = if self.required {
            format!(" {} * ", self.label)
        } else {
            format!(" {} ", self.label)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(title);

        let inner_width = input_area.width.saturating_sub(2) as usize;
        let cursor = self.state.cursor_in(self.value);
        let (visible, cursor_col) = visible_window(self.value, cursor, inner_width);

        let input = Paragraph::new(visible).block(block);
        frame.render_widget(input, input_area);

        if let Some(message) = error {
            let line = Line::from(Span::styled(
                format!(" {message}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
            ));
            frame.render_widget(Paragraph::new(line), message_area);
        }

        if self.focused {
            frame.set_cursor_position((input_area.x + 1 + cursor_col as u16, input_area.y + 1));
        }
    }
}

impl EventHandler for TextField<'_> {
    type Event = TextFieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let pos = self.state.cursor_in(self.value);
        match event {
            TuiEvent::InputChar(c) => {
                let mut value = self.value.to_string();
                value.insert(pos, *c);
                self.edited(value, pos + c.len_utf8())
            }
            TuiEvent::Paste(text) => {
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                if text.is_empty() {
                    return None;
                }
                let mut value = self.value.to_string();
                value.insert_str(pos, &text);
                self.edited(value, pos + text.len())
            }
            TuiEvent::Backspace => {
                if pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(self.value, pos);
                let mut value = self.value.to_string();
                value.drain(prev..pos);
                self.edited(value, prev)
            }
            TuiEvent::Delete => {
                if pos >= self.value.len() {
                    return None;
                }
                let next = next_char_boundary(self.value, pos);
                let mut value = self.value.to_string();
                value.drain(pos..next);
                self.edited(value, pos)
            }
            TuiEvent::CursorLeft => {
                self.state.cursor = prev_char_boundary(self.value, pos);
                None
            }
            TuiEvent::CursorRight => {
                self.state.cursor = next_char_boundary(self.value, pos);
                None
            }
            TuiEvent::CursorHome => {
                self.state.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.state.cursor = self.value.len();
                None
            }
            _ => None,
        }
    }
}

/// Tail of `value` that keeps the cursor inside `width` columns, and the
/// cursor column within it.
fn visible_window(value: &str, cursor: usize, width: usize) -> (&str, usize) {
    if width == 0 {
        return ("", 0);
    }
    let mut start = 0;
    while value[start..cursor].width() >= width {
        start = next_char_boundary(value, start);
    }
    (&value[start..], value[start..cursor].width())
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
