//! Skip selection core: catalog client, selection state and view model.
//!
//! # Overview
//! Builds `HttpRequest` values and interprets what the host observed when it
//! executed them (host-does-IO pattern). The selection controller and the
//! view model are pure, so the whole workflow is deterministic and testable
//! without a network.
//!
//! # Design
//! - `SkipClient` holds only the base URL and timeout.
//! - The catalog fetch is split into `build_fetch_skips` and
//!   `parse_fetch_skips`; an empty catalog is an error at that layer.
//! - `SelectionController` issues fetch tickets and drops results that
//!   belong to a generation it has already reset away from.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod catalog;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod profile;
pub mod types;
pub mod view;

pub use client::SkipClient;
pub use config::ClientConfig;
pub use controller::{Action, FetchTicket, SelectionController, SelectionState, Status};
pub use error::{SkipError, TransportError};
pub use http::{FailureClass, HttpOutcome, HttpRequest, HttpResponse, QueryValue, TransportFailure};
pub use types::{Selection, SkipId, SkipOption};
pub use view::{PageView, SkipCard};
