//! Core types shared across the plexgate crates: configuration and the
//! unified application error.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AppError, LogLevel};
