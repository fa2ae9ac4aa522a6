//! # nexchat-client
//!
//! The chat client's view / notification / presence coordination layer.
//!
//! Controllers here are plain functions of `(store, session, ui, input)`:
//! they read from the [`nexchat_store::RemoteStore`] collaborator, compute a
//! declarative render description, and hand it to the [`ui::UiSurface`]
//! rendering adapter.  No controller touches presentation primitives
//! directly, and none holds global state; the [`session::Session`] context
//! is constructed at login and passed in everywhere.
//!
//! Failure policy: every remote call is caught at the operation boundary
//! and converted into a user notification plus a log line.  Nothing in this
//! crate is fatal — worst case is a panel that does not render.

pub mod admin;
pub mod config;
pub mod error;
pub mod info;
pub mod mentions;
pub mod notify;
pub mod relations;
pub mod session;
pub mod ui;
pub mod views;

#[cfg(test)]
mod testing;

pub use error::ClientError;

use tracing_subscriber::{fmt, EnvFilter};

/// Install the process-wide tracing subscriber.  Call once at startup.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nexchat_client=debug,nexchat_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
