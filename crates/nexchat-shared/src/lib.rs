//! # nexchat-shared
//!
//! Identifiers and small common types shared between the store and client
//! crates.

pub mod types;

pub use types::*;
