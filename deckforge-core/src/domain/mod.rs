//! Core domain types
//!
//! This module contains the domain structures shared across deckforge
//! services: the persisted entities (Project, Slide) and the outline types
//! that flow from the generation step to the persistence writer.

pub mod outline;
pub mod project;
pub mod slide;
