//! Painting data-access core for La Galerie.
//!
//! # Overview
//! `PaintingClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network. `PaintingsApi` pairs it with a
//! `Transport` to run the round-trip, keeps a shared `BusyIndicator` up to
//! date, and returns an `Outcome` describing the notifications and
//! navigation the view should perform.
//!
//! # Design
//! - `PaintingClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and testable with canned responses.
//! - Presentation side effects are data (`Effect`), applied through an
//!   `EffectSink` the view implements.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod busy;
pub mod client;
pub mod config;
pub mod effect;
pub mod error;
pub mod http;
pub mod types;

pub use api::{Outcome, PaintingsApi};
pub use busy::{BusyGuard, BusyIndicator};
pub use client::PaintingClient;
pub use config::{ApiConfig, ConfigError};
pub use effect::{Effect, EffectLog, EffectSink, Notification, Route, Severity};
pub use error::{ApiError, FailureKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use types::{Painting, PaintingDraft, PaintingId};
