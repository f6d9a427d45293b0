//! # New Movie Form
//!
//! Draft state and the submit protocol for adding a movie to the catalog.
//! Knows nothing about rendering; the TUI wraps it in `NewMovieFormView`.
//!
//! ```text
//! submit(movies, on_add)
//!   ├── required fields missing?  → Err(Incomplete)       (no change)
//!   ├── URL pattern fails?        → Err(InvalidUrl)       (markers set)
//!   ├── imdb_id already present?  → Err(Duplicate)        (no change)
//!   └── on_add(movie), generation += 1, draft cleared → Ok(on_add's result)
//! ```
//!
//! `generation` is the reset signal for the text fields: each field keeps
//! its touched state keyed by the generation it last saw.

use std::fmt;

use log::{debug, info};

use crate::core::movie::Movie;
use crate::core::validation::{
    UrlErrorPolicy, UrlErrors, check_urls, has_required_fields, is_duplicate, is_valid_url,
};

/// In-progress, unsubmitted field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub img_url: String,
    pub imdb_url: String,
    pub imdb_id: String,
}

impl Draft {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Title => &self.title,
            FieldName::Description => &self.description,
            FieldName::ImgUrl => &self.img_url,
            FieldName::ImdbUrl => &self.imdb_url,
            FieldName::ImdbId => &self.imdb_id,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Title => &mut self.title,
            FieldName::Description => &mut self.description,
            FieldName::ImgUrl => &mut self.img_url,
            FieldName::ImdbUrl => &mut self.imdb_url,
            FieldName::ImdbId => &mut self.imdb_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Candidate record built from the current values.
    pub fn to_movie(&self) -> Movie {
        Movie::new(
            self.title.clone(),
            self.description.clone(),
            self.img_url.clone(),
            self.imdb_url.clone(),
            self.imdb_id.clone(),
        )
    }
}

/// The five inputs of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Title,
    Description,
    ImgUrl,
    ImdbUrl,
    ImdbId,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Title,
        FieldName::Description,
        FieldName::ImgUrl,
        FieldName::ImdbUrl,
        FieldName::ImdbId,
    ];

    /// Wire name, matching the `Movie` JSON keys.
    pub fn name(self) -> &'static str {
        match self {
            FieldName::Title => "title",
            FieldName::Description => "description",
            FieldName::ImgUrl => "imgUrl",
            FieldName::ImdbUrl => "imdbUrl",
            FieldName::ImdbId => "imdbId",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Title => "Title",
            FieldName::Description => "Description",
            FieldName::ImgUrl => "Image URL",
            FieldName::ImdbUrl => "Imdb URL",
            FieldName::ImdbId => "Imdb ID",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FieldName::Description)
    }

    pub fn validator(self) -> Option<fn(&str) -> bool> {
        match self {
            FieldName::ImgUrl | FieldName::ImdbUrl => Some(is_valid_url),
            _ => None,
        }
    }
}

/// Why a submit did not add a movie. Every variant leaves the draft intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A mandatory field is empty; the Add button is disabled.
    Incomplete,
    /// One or both URL fields failed the pattern.
    InvalidUrl(UrlErrors),
    /// A movie with this `imdb_id` is already in the catalog.
    Duplicate { imdb_id: String },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Incomplete => write!(f, "Fill in all required fields"),
            SubmitError::InvalidUrl(_) => write!(f, "Please enter a valid URL"),
            SubmitError::Duplicate { .. } => write!(f, "This movie is already added!"),
        }
    }
}

impl std::error::Error for SubmitError {}

pub struct NewMovieForm {
    draft: Draft,
    generation: u64,
    url_errors: UrlErrors,
    policy: UrlErrorPolicy,
}

impl NewMovieForm {
    pub fn new(policy: UrlErrorPolicy) -> Self {
        Self {
            draft: Draft::default(),
            generation: 0,
            url_errors: UrlErrors::default(),
            policy,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn url_errors(&self) -> UrlErrors {
        self.url_errors
    }

    /// Whether the sentinel URL marker is set on `field`.
    pub fn has_url_error(&self, field: FieldName) -> bool {
        match field {
            FieldName::ImgUrl => self.url_errors.img_url,
            FieldName::ImdbUrl => self.url_errors.imdb_url,
            _ => false,
        }
    }

    /// Replace one draft value. Editing a URL field clears its marker.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        *self.draft.slot_mut(field) = value.into();
        match field {
            FieldName::ImgUrl => self.url_errors.img_url = false,
            FieldName::ImdbUrl => self.url_errors.imdb_url = false,
            _ => {}
        }
    }

    pub fn can_submit(&self) -> bool {
        has_required_fields(&self.draft)
    }

    /// Run the submit protocol. `on_add` is called exactly once, and only on
    /// success; its return value is handed back in `Ok`.
    pub fn submit<F, R>(&mut self, movies: &[Movie], on_add: F) -> Result<R, SubmitError>
    where
        F: FnOnce(Movie) -> R,
    {
        if !self.can_submit() {
            debug!("Submit ignored: required fields missing");
            return Err(SubmitError::Incomplete);
        }

        let errors = check_urls(&self.draft, self.policy);
        if errors.any() {
            info!(
                "Submit rejected: invalid URL (img_url={}, imdb_url={}, policy={:?})",
                errors.img_url, errors.imdb_url, self.policy
            );
            self.url_errors = errors;
            return Err(SubmitError::InvalidUrl(errors));
        }

        let candidate = self.draft.to_movie();

        if is_duplicate(&candidate, movies) {
            info!("Submit rejected: duplicate imdb_id {}", candidate.imdb_id());
            return Err(SubmitError::Duplicate {
                imdb_id: candidate.imdb_id().to_string(),
            });
        }

        info!(
            "Adding movie \"{}\" ({})",
            candidate.title(),
            candidate.imdb_id()
        );
        let added = on_add(candidate);

        self.generation += 1;
        self.draft = Draft::default();
        self.url_errors = UrlErrors::default();
        Ok(added)
    }
}

impl Default for NewMovieForm {
    fn default() -> Self {
        Self::new(UrlErrorPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{INCEPTION, fill, inception_with, sample_movie};

    #[test]
    fn test_new_form_is_empty_and_disabled() {
        let form = NewMovieForm::default();
        assert!(form.draft().is_empty());
        assert_eq!(form.generation(), 0);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_can_submit_without_description() {
        let mut form = NewMovieForm::default();
        fill(&mut form, INCEPTION);
        assert!(form.can_submit());
    }

    #[test]
    fn test_disabled_when_any_required_field_empty() {
        for missing in [
            FieldName::Title,
            FieldName::ImgUrl,
            FieldName::ImdbUrl,
            FieldName::ImdbId,
        ] {
            let mut form = NewMovieForm::default();
            fill(&mut form, inception_with(FieldName::Description, "desc"));
            form.set_field(missing, "");
            assert!(!form.can_submit(), "{:?} should be required", missing);
        }
    }

    #[test]
    fn test_successful_submit_calls_on_add_once_and_resets() {
        let mut form = NewMovieForm::default();
        fill(&mut form, INCEPTION);

        let mut added = Vec::new();
        let result = form.submit(&[], |movie| added.push(movie));

        assert_eq!(result, Ok(()));
        assert_eq!(
            added,
            vec![Movie::new("Inception", "", "https://x.com/i.png", "https://imdb.com/tt1", "tt1")]
        );
        assert!(form.draft().is_empty());
        assert_eq!(form.generation(), 1);
    }

    #[test]
    fn test_incomplete_submit_is_noop() {
        let mut form = NewMovieForm::default();
        form.set_field(FieldName::Title, "Only a title");

        let mut called = false;
        let result = form.submit(&[], |_| called = true);

        assert_eq!(result, Err(SubmitError::Incomplete));
        assert!(!called);
        assert_eq!(form.draft().title, "Only a title");
        assert_eq!(form.generation(), 0);
    }

    #[test]
    fn test_invalid_url_blocks_and_keeps_draft() {
        let mut form = NewMovieForm::new(UrlErrorPolicy::Independent);
        fill(&mut form, inception_with(FieldName::ImgUrl, "not-a-url"));
        let before = form.draft().clone();

        let mut called = false;
        let result = form.submit(&[], |_| called = true);

        assert!(matches!(result, Err(SubmitError::InvalidUrl(_))));
        assert!(!called);
        assert_eq!(form.draft(), &before);
        assert_eq!(form.generation(), 0);
        assert!(form.has_url_error(FieldName::ImgUrl));
        assert!(!form.has_url_error(FieldName::ImdbUrl));
    }

    #[test]
    fn test_paired_policy_flags_both_url_fields() {
        let mut form = NewMovieForm::new(UrlErrorPolicy::Paired);
        fill(&mut form, inception_with(FieldName::ImgUrl, "not-a-url"));

        let result = form.submit(&[], |_| {});

        assert_eq!(
            result,
            Err(SubmitError::InvalidUrl(UrlErrors {
                img_url: true,
                imdb_url: true
            }))
        );
        assert!(form.has_url_error(FieldName::ImgUrl));
        assert!(form.has_url_error(FieldName::ImdbUrl));
    }

    #[test]
    fn test_editing_url_field_clears_its_marker() {
        let mut form = NewMovieForm::new(UrlErrorPolicy::Paired);
        fill(&mut form, inception_with(FieldName::ImgUrl, "not-a-url"));
        let _ = form.submit(&[], |_| {});

        form.set_field(FieldName::ImgUrl, "https://x.com/i.png");

        assert!(!form.has_url_error(FieldName::ImgUrl));
        assert!(form.has_url_error(FieldName::ImdbUrl));
    }

    #[test]
    fn test_duplicate_blocks_and_keeps_draft() {
        let movies = vec![sample_movie("tt1")];
        let mut form = NewMovieForm::default();
        fill(&mut form, INCEPTION);

        let mut called = false;
        let result = form.submit(&movies, |_| called = true);

        assert_eq!(
            result,
            Err(SubmitError::Duplicate {
                imdb_id: "tt1".to_string()
            })
        );
        assert!(!called);
        assert_eq!(form.draft().imdb_id, "tt1");
        assert_eq!(form.generation(), 0);
    }

    #[test]
    fn test_same_input_twice_is_blocked_second_time() {
        let mut movies = Vec::new();
        let mut form = NewMovieForm::default();

        fill(&mut form, INCEPTION);
        form.submit(&movies.clone(), |m| movies.push(m)).unwrap();

        fill(&mut form, INCEPTION);
        let result = form.submit(&movies.clone(), |m| movies.push(m));

        assert!(matches!(result, Err(SubmitError::Duplicate { .. })));
        assert_eq!(movies.len(), 1);
        assert_eq!(form.generation(), 1);
    }

    #[test]
    fn test_successful_submit_clears_stale_url_markers() {
        let mut form = NewMovieForm::new(UrlErrorPolicy::Paired);
        fill(&mut form, inception_with(FieldName::ImgUrl, "bad"));
        let _ = form.submit(&[], |_| {});

        // Fix only the failing field; the paired marker on the other one stays until submit.
        form.set_field(FieldName::ImgUrl, "https://x.com/i.png");
        assert!(form.url_errors().any());

        form.submit(&[], |_| {}).unwrap();
        assert!(!form.url_errors().any());
    }

    #[test]
    fn test_submit_error_messages() {
        assert_eq!(SubmitError::Incomplete.to_string(), "Fill in all required fields");
        assert_eq!(
            SubmitError::Duplicate {
                imdb_id: "tt1".into()
            }
            .to_string(),
            "This movie is already added!"
        );
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(FieldName::ImdbId.name(), "imdbId");
        assert_eq!(FieldName::ImgUrl.label(), "Image URL");
        assert!(!FieldName::Description.is_required());
        assert!(FieldName::ImdbUrl.validator().is_some());
        assert!(FieldName::Title.validator().is_none());
    }
}
