//! Terminal host for the skip selection step.
//!
//! # Overview
//! Executes the requests `skip-core` builds (ureq), drives the selection
//! controller from typed commands and renders the page view to a terminal.
//!
//! # Design
//! - `Session` owns the controller and injects the executor, so everything
//!   except `transport` runs in tests without a network.
//! - Configuration comes from the environment, alongside the mock server's
//!   `PORT`.

pub mod command;
pub mod config;
pub mod render;
pub mod session;
pub mod transport;

pub use command::Command;
pub use config::PageConfig;
pub use session::{Flow, Session};
