//! # Core Application Logic
//!
//! This module contains Marquee's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Movie (the entity)   │
//!                    │  • NewMovieForm (draft) │
//!                    │  • validation (pure)    │
//!                    │  • State + Action       │
//!                    │                         │
//!                    │  No UI. Pure logic.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`movie`]: The `Movie` record
//! - [`validation`]: URL, presence and duplicate checks as free functions
//! - [`form`]: `NewMovieForm`, the draft and the submit protocol
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`catalog`]: Seed catalog loading
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod catalog;
pub mod config;
pub mod form;
pub mod movie;
pub mod state;
pub mod validation;
