//! # nexchat-store
//!
//! Remote-store abstraction for the chat client.
//!
//! The backing store is an external document database reachable only through
//! get / partial-update / bounded-query calls.  This crate defines the typed
//! records those documents deserialize into, the [`RemoteStore`] trait the
//! client controllers are written against, and [`MemoryStore`], an in-memory
//! implementation used for local development and tests.
//!
//! Records are read-modified-written wholesale.  There is no optimistic
//! concurrency: two sessions mutating the same list field race, and the last
//! full-list write wins.  Enforcement of access control lives in the remote
//! store's own rules, never here.

pub mod memory;
pub mod models;
pub mod remote;

mod error;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use models::*;
pub use remote::{GroupPatch, RemoteStore, UserPatch};
