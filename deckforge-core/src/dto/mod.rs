//! Data Transfer Objects for the HTTP surface
//!
//! Payload shapes exchanged between the server and its callers. Kept here so
//! client code can share them without depending on the server crate.

pub mod deck;
