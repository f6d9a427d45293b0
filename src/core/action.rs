//! # Actions
//!
//! Everything that can happen in Marquee becomes an `Action`.
//! The form accepted a movie? That's `Action::AddMovie(movie)`.
//! The form refused one? That's `Action::SubmitRejected(error)`.
//!
//! The `update()` function applies an action to the current state and
//! returns an `Effect` telling the event loop what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info};

use crate::core::form::SubmitError;
use crate::core::movie::Movie;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddMovie(Movie),
    SubmitRejected(SubmitError),
    DismissAlert,
    Quit,
}

/// What the event loop should do after an `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::AddMovie(movie) => {
            app.status_message = format!("Added \"{}\"", movie.title());
            app.movies.push(movie);
            info!("Catalog now holds {} movies", app.movies.len());
            Effect::None
        }
        Action::SubmitRejected(error) => {
            match &error {
                SubmitError::Duplicate { imdb_id } => {
                    app.status_message = format!("{imdb_id} is already in the catalog");
                    app.alert = Some(error.to_string());
                }
                SubmitError::InvalidUrl(_) | SubmitError::Incomplete => {
                    app.status_message = error.to_string();
                }
            }
            Effect::None
        }
        Action::DismissAlert => {
            app.alert = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::UrlErrors;
    use crate::test_support::{sample_movie, test_app};

    #[test]
    fn test_add_movie_appends_and_reports() {
        let mut app = test_app();
        let effect = update(&mut app, Action::AddMovie(sample_movie("tt1")));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.movies.len(), 1);
        assert!(app.status_message.starts_with("Added"));
        assert!(!app.has_alert());
    }

    #[test]
    fn test_duplicate_opens_alert() {
        let mut app = test_app();
        update(
            &mut app,
            Action::SubmitRejected(SubmitError::Duplicate {
                imdb_id: "tt1".into(),
            }),
        );
        assert_eq!(app.alert.as_deref(), Some("This movie is already added!"));
        assert!(app.movies.is_empty());
    }

    #[test]
    fn test_invalid_url_sets_status_without_alert() {
        let mut app = test_app();
        update(
            &mut app,
            Action::SubmitRejected(SubmitError::InvalidUrl(UrlErrors {
                img_url: true,
                imdb_url: false,
            })),
        );
        assert!(!app.has_alert());
        assert_eq!(app.status_message, "Please enter a valid URL");
    }

    #[test]
    fn test_dismiss_alert() {
        let mut app = test_app();
        app.alert = Some("boom".into());
        update(&mut app, Action::DismissAlert);
        assert!(!app.has_alert());
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
