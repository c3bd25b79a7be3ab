//! HTTP server for the scribe writing assistant
//!
//! Integration glue: the axum router, application state, and the mapping
//! from pipeline errors to HTTP responses. All text-processing decisions
//! live in `scribe-text-processing`; all transport concerns live in
//! `scribe-inference`.

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::{AppState, Collaborators};
