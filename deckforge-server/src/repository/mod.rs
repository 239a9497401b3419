//! Repository Module
//!
//! Data access layer for the server.
//! Each repository handles database operations for a specific domain entity.

pub mod project;
pub mod slide;

// Re-export for convenience
pub use project as project_repository;
pub use slide as slide_repository;
