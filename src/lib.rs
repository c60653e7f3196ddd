//! Client-side document upload widget.
//!
//! A drop zone accepts up to five files, validates them by extension, tracks
//! them through a simulated upload, and previews images and plain text in a
//! modal. Everything is transient in-memory state; there is no server and
//! nothing is persisted.

pub mod app;
pub mod intake;
pub mod preview;
pub mod utils;
