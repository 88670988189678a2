//! # Capability Contracts
//!
//! The [`Vehicle`] trait is the contract every product must satisfy; the
//! [`VehicleFactory`] trait is the contract every factory must satisfy. The
//! resolver only ever sees these two traits, never the concrete types behind them.
//!
//! # Architecture Note
//! Vehicles do not print. They report through a [`SignalSink`] handed in by the
//! caller, so the same vehicle can log through `tracing`, write to stdout, or be
//! recorded by a test.

use crate::error::FactoryError;
use crate::signal::SignalSink;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Observable run state of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    /// Freshly built, never started.
    #[default]
    Parked,
    Running,
    Stopped,
}

/// Product capability: something that can be named, started, and stopped.
///
/// `start` must move the vehicle to [`RunState::Running`] and emit exactly one
/// signal. `stop` must move it to [`RunState::Stopped`] and emits at most one.
/// An empty name never makes either call fail.
pub trait Vehicle: Send + Debug {
    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    fn state(&self) -> RunState;

    fn start(&mut self, sink: &mut dyn SignalSink);

    fn stop(&mut self, sink: &mut dyn SignalSink);
}

/// Factory capability: builds a fresh, named vehicle on every call.
///
/// The returned vehicle is owned by the caller; the factory keeps no reference to it.
pub trait VehicleFactory: Send + Debug {
    fn create_auto(&self) -> Result<Box<dyn Vehicle>, FactoryError>;
}
