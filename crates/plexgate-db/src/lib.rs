//! Read-only access to the Plex library catalog.
//!
//! The catalog is externally owned: this crate never creates, migrates, or
//! writes anything. The only query the gateway needs is "which file backs
//! this media part", so that is the only query here.

pub mod catalog;

pub use catalog::PartCatalog;
