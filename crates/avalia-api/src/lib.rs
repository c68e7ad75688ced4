//! # avalia-api
//!
//! HTTP API layer for Avalia built on Axum.
//!
//! Provides the REST endpoints, bearer-token extractor, middleware (CORS,
//! request logging, compression, body limit), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiErrorResponse};
pub use state::AppState;
