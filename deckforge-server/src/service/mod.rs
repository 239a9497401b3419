//! Service Module
//!
//! Business logic layer: sequences the outline pipeline between the
//! generation client and the repositories.

pub mod deck;

// Re-export for convenience
pub use deck as deck_service;
