//! # Showroom Lifecycle & Orchestration
//!
//! Wires the standard catalog into a [`FactoryResolver`](factory_framework::FactoryResolver)
//! and drives requests through it.
//!
//! ## Startup
//!
//! 1. **Configuration** - [`ShowroomConfig::discover`] reads JSON from the CLI argument or
//!    the `SHOWROOM_CONFIG` path, or uses defaults.
//! 2. **Registration** - [`standard_registry`](crate::factories::standard_registry) lists
//!    every namespace the showroom knows.
//! 3. **Verification** - [`Showroom::new`] loads and checks every namespace, so broken
//!    wiring fails before any request is served.
//!
//! ## Serving Requests
//!
//! [`Showroom::test_drive`] resolves a single name, builds one vehicle, then starts and
//! stops it. Unknown names are served by the fallback namespace and reported through
//! [`DriveReport::fell_back`]; they are not errors.
//!
//! ## Observability & Tracing
//!
//! See the [`tracing`] module for [`setup_tracing`] and what each level shows.

pub mod config;
pub mod showroom;
pub mod tracing;

pub use config::*;
pub use showroom::*;
pub use self::tracing::setup_tracing;
