//! # API Module
//!
//! HTTP endpoints served by Moodtune.
//!
//! ## Endpoints
//!
//! - [`recommend`] - `POST /api/recommend`. Takes `{"message": "..."}` and answers
//!   `{"keyword": "...", "songs": [...]}`. A body that is not JSON or has no string
//!   `message` is answered with `500 {"error": "Server failed"}`, as is a pipeline
//!   that panics. Failures of the language model or Spotify never reach this
//!   layer; they degrade to a fallback keyword or an empty song list.
//! - [`health`] - `GET /health`. Status and crate version for monitoring.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::{get, post}};
//! use moodtune::api::{health, recommend};
//!
//! let app = Router::new()
//!     .route("/api/recommend", post(recommend))
//!     .route("/health", get(health))
//!     .layer(Extension(state));
//! ```

mod health;
mod recommend;

pub use health::health;
pub use recommend::{SERVER_FAILED, recommend};
