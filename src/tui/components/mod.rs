//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with catalog size and status
//! - `MovieList`: The catalog
//! - `Alert`: Blocking notification overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TextField`: Single-line labelled input with touched tracking
//! - `NewMovieFormView`: Focus ring and routing around the form's draft
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (constructor arguments or
//! struct fields), not by reaching into global state:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! MovieList::new(&app.movies).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! MovieList::new().render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar)
//! ├── movie_list.rs      (Catalog view)
//! ├── alert.rs           (Blocking notification)
//! ├── text_field.rs      (Labelled input)
//! └── new_movie_form.rs  (The form)
//! ```

pub mod alert;
pub mod movie_list;
pub mod new_movie_form;
pub mod text_field;
mod title_bar;

pub use alert::{Alert, AlertEvent};
pub use movie_list::MovieList;
pub use new_movie_form::{FormViewEvent, NewMovieFormView};
pub use title_bar::TitleBar;
