//! Deckforge Core
//!
//! Shared types for the deckforge services.
//!
//! This crate contains:
//! - Domain types: persisted entities (Project, Slide) and the outline
//!   draft/normalization types the generation pipeline works with
//! - DTOs: request/response payloads for the HTTP surface

pub mod domain;
pub mod dto;
pub mod text;
