//! Plexgate API Library
//!
//! This crate provides the HTTP handlers, the streaming relay, and the
//! application setup for the plexgate media-streaming gateway.

// Module declarations
mod handlers;
mod telemetry;

// Public modules
pub mod error;
pub mod proxy;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
