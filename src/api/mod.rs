//! API module for HTTP endpoints
//!
//! REST routes for chat, search and knowledge-base administration.

pub mod auth;
pub mod http;
pub mod rest;
pub mod session;
pub mod state;

pub use http::create_router;
pub use state::AppState;
