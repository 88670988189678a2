//! # Vehicle Factory Sample
//!
//! The concrete side of the factory framework: vehicles, the namespaces that build
//! them, and the showroom that resolves requests against that catalog.
//!
//! - **[model]**: vehicles ([`ChevyVolt`](model::ChevyVolt), [`FordFusion`](model::FordFusion),
//!   [`JeepSahara`](model::JeepSahara), and the fallback [`NullCar`](model::NullCar)).
//! - **[factories]**: one namespace per factory plus
//!   [`standard_registry`](factories::standard_registry).
//! - **[lifecycle]**: configuration, the [`Showroom`](lifecycle::Showroom) orchestrator,
//!   and tracing setup.

pub mod error;
pub mod factories;
pub mod lifecycle;
pub mod model;

pub use error::ShowroomError;
