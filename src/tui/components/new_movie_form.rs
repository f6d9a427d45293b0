//! # NewMovieForm View
//!
//! Terminal rendering and input routing for `core::form::NewMovieForm`.
//!
//! ## Responsibilities
//!
//! - Keep one `TextFieldState` per input and a focus ring over the five
//!   fields plus the Add button
//! - Forward edits to the focused field and write the new value back into
//!   the draft
//! - Mark a field touched when focus leaves it
//! - Turn Enter (anywhere) or Space (on the button) into a submit request
//!
//! Submitting needs the catalog, which the view does not own, so the event
//! loop calls [`NewMovieFormView::submit`] with `&app.movies` when the view
//! emits `FormViewEvent::Submit`.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::action::Action;
use crate::core::form::{FieldName, NewMovieForm};
use crate::core::movie::Movie;
use crate::core::validation::UrlErrorPolicy;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{FIELD_HEIGHT, TextField, TextFieldEvent, TextFieldState};
use crate::tui::event::TuiEvent;

const HEADING_HEIGHT: u16 = 2;
const BUTTON_HEIGHT: u16 = 3;
const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

/// What currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    AddButton,
}

impl Focus {
    const RING: [Focus; 6] = [
        Focus::Field(FieldName::Title),
        Focus::Field(FieldName::Description),
        Focus::Field(FieldName::ImgUrl),
        Focus::Field(FieldName::ImdbUrl),
        Focus::Field(FieldName::ImdbId),
        Focus::AddButton,
    ];

    fn index(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::RING[(self.index() + 1) % Self::RING.len()]
    }

    fn prev(self) -> Self {
        Self::RING[(self.index() + Self::RING.len() - 1) % Self::RING.len()]
    }
}

/// High-level events emitted by the form view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormViewEvent {
    /// A draft value changed.
    Changed,
    /// The user asked to submit and the Add button is enabled.
    Submit,
    /// The user asked to submit while the Add button is disabled.
    SubmitDisabled,
}

pub struct NewMovieFormView {
    pub form: NewMovieForm,
    pub focus: Focus,
    fields: [TextFieldState; 5],
}

impl NewMovieFormView {
    pub fn new(policy: UrlErrorPolicy) -> Self {
        Self {
            form: NewMovieForm::new(policy),
            focus: Focus::Field(FieldName::Title),
            fields: Default::default(),
        }
    }

    /// Total rows the view wants; the parent may give it less.
    pub fn required_height() -> u16 {
        HEADING_HEIGHT + FIELD_HEIGHT * FieldName::ALL.len() as u16 + BUTTON_HEIGHT
    }

    pub fn field_state(&self, field: FieldName) -> &TextFieldState {
        &self.fields[field_index(field)]
    }

    /// Run the submit protocol against `movies`, returning the action to dispatch.
    pub fn submit(&mut self, movies: &[Movie]) -> Action {
        match self.form.submit(movies, Action::AddMovie) {
            Ok(action) => {
                self.focus = Focus::Field(FieldName::Title);
                action
            }
            Err(error) => Action::SubmitRejected(error),
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if let Focus::Field(field) = self.focus {
            let generation = self.form.generation();
            let state = &mut self.fields[field_index(field)];
            state.sync(generation);
            state.blur();
        }
        if let Focus::Field(field) = focus {
            let generation = self.form.generation();
            let value = self.form.draft().get(field);
            let state = &mut self.fields[field_index(field)];
            state.sync(generation);
            state.move_to_end(value);
        }
        debug!("Focus {:?} -> {:?}", self.focus, focus);
        self.focus = focus;
    }

    fn request_submit(&self) -> FormViewEvent {
        if self.form.can_submit() {
            FormViewEvent::Submit
        } else {
            FormViewEvent::SubmitDisabled
        }
    }

    fn render_button(&self, frame: &mut Frame, area: Rect) {
        let enabled = self.form.can_submit();
        let focused = self.focus == Focus::AddButton;

        let mut style = if enabled {
            Style::default().fg(Color::Black).bg(Color::Blue)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if focused {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        let label = if enabled { " Add " } else { " Add (disabled) " };
        let width = (label.len() as u16 + 2).min(area.width);
        let button_area = Rect { width, ..area };

        let button = Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );
        frame.render_widget(button, button_area);
    }
}

impl Component for NewMovieFormView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut constraints = vec![Constraint::Length(HEADING_HEIGHT)];
        constraints.extend(FieldName::ALL.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
        let areas = Layout::vertical(constraints).split(area);

        let heading = Paragraph::new(Line::from(Span::styled(
            "Add a movie",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(heading, areas[0]);

        let generation = self.form.generation();
        for (i, field) in FieldName::ALL.into_iter().enumerate() {
            let mut text_field = TextField::new(
                field.name(),
                field.label(),
                self.form.draft().get(field),
                &mut self.fields[i],
                generation,
            )
            .required(field.is_required())
            .validate(field.validator())
            .forced_error(self.form.has_url_error(field))
            .focused(self.focus == Focus::Field(field))
            .invalid_message(INVALID_URL_MESSAGE);
            text_field.render(frame, areas[i + 1]);
        }

        self.render_button(frame, areas[FieldName::ALL.len() + 1]);
    }
}

impl EventHandler for NewMovieFormView {
    type Event = FormViewEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match (event, self.focus) {
            (TuiEvent::FocusNext, focus) => {
                self.set_focus(focus.next());
                None
            }
            (TuiEvent::FocusPrev, focus) => {
                self.set_focus(focus.prev());
                None
            }
            (TuiEvent::Submit, _) | (TuiEvent::InputChar(' '), Focus::AddButton) => {
                Some(self.request_submit())
            }
            (_, Focus::AddButton) => None,
            (_, Focus::Field(field)) => {
                let generation = self.form.generation();
                let changed = {
                    let mut text_field = TextField::new(
                        field.name(),
                        field.label(),
                        self.form.draft().get(field),
                        &mut self.fields[field_index(field)],
                        generation,
                    );
                    text_field.handle_event(event)
                };
                match changed {
                    Some(TextFieldEvent::Changed(value)) => {
                        self.form.set_field(field, value);
                        Some(FormViewEvent::Changed)
                    }
                    None => None,
                }
            }
        }
    }
}

fn field_index(field: FieldName) -> usize {
    FieldName::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or(0)
}
