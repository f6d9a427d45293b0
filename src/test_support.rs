//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::form::{Draft, FieldName, NewMovieForm};
use crate::core::movie::Movie;
use crate::core::state::App;

/// Field values, in display order, that pass every check against an empty catalog.
pub const INCEPTION: [&str; 5] = [
    "Inception",
    "",
    "https://x.com/i.png",
    "https://imdb.com/tt1",
    "tt1",
];

/// Creates an empty test App.
pub fn test_app() -> App {
    App::new(Vec::new())
}

/// A valid movie with the given IMDb id.
pub fn sample_movie(imdb_id: &str) -> Movie {
    Movie::new(
        format!("Movie {imdb_id}"),
        "A sample entry",
        "https://example.com/poster.png",
        format!("https://www.imdb.com/title/{imdb_id}/"),
        imdb_id,
    )
}

/// A draft that passes every check against an empty catalog.
pub fn complete_draft() -> Draft {
    Draft {
        title: "Inception".into(),
        description: "Dreams within dreams".into(),
        img_url: "https://x.com/i.png".into(),
        imdb_url: "https://imdb.com/tt1".into(),
        imdb_id: "tt1".into(),
    }
}

/// `INCEPTION` with one field replaced.
pub fn inception_with(field: FieldName, value: &'static str) -> [&'static str; 5] {
    let mut values = INCEPTION;
    for (slot, f) in values.iter_mut().zip(FieldName::ALL) {
        if f == field {
            *slot = value;
        }
    }
    values
}

/// Set all five draft fields in display order.
pub fn fill(form: &mut NewMovieForm, values: [&str; 5]) {
    for (field, value) in FieldName::ALL.into_iter().zip(values) {
        form.set_field(field, value);
    }
}
