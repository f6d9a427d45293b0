//! # Validation
//!
//! Pure checks over a draft and the current catalog. Nothing here mutates
//! state or logs; `form::NewMovieForm` decides what to do with the answers.

use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::form::Draft;
use crate::core::movie::Movie;

/// http(s) scheme, optional userinfo, dotted host or localhost, optional
/// port, path, query and fragment. No whitespace anywhere.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i:https?)://(?:[-;:&=+$,\w]+@)?(?:localhost|[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+)(?::\d{1,5})?(?:/[-+~%/.,=@\w]*)?(?:\?[-+=&;%@,./\w]*)?(?:#[-,.!/\\\w]*)?$",
    )
    .expect("URL pattern is a valid regex")
});

/// How URL failures are reported on the two URL fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UrlErrorPolicy {
    /// Each field is flagged only when its own value fails the pattern.
    #[default]
    Independent,
    /// Both fields are flagged whenever either one fails.
    Paired,
}

/// Sentinel error markers for the two URL fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlErrors {
    pub img_url: bool,
    pub imdb_url: bool,
}

impl UrlErrors {
    pub fn any(&self) -> bool {
        self.img_url || self.imdb_url
    }
}

pub fn is_valid_url(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

/// Presence check for the mandatory fields. Whitespace counts as present.
pub fn has_required_fields(draft: &Draft) -> bool {
    !draft.title.is_empty()
        && !draft.img_url.is_empty()
        && !draft.imdb_url.is_empty()
        && !draft.imdb_id.is_empty()
}

pub fn is_duplicate(candidate: &Movie, movies: &[Movie]) -> bool {
    movies
        .iter()
        .any(|movie| movie.imdb_id() == candidate.imdb_id())
}

/// Which URL fields should carry an error marker under `policy`.
pub fn check_urls(draft: &Draft, policy: UrlErrorPolicy) -> UrlErrors {
    let img_ok = is_valid_url(&draft.img_url);
    let imdb_ok = is_valid_url(&draft.imdb_url);

    match policy {
        UrlErrorPolicy::Independent => UrlErrors {
            img_url: !img_ok,
            imdb_url: !imdb_ok,
        },
        UrlErrorPolicy::Paired => {
            let failed = !(img_ok && imdb_ok);
            UrlErrors {
                img_url: failed,
                imdb_url: failed,
            }
        }
    }
}
