//! # Vehicle Signals
//!
//! Observable output of [`Vehicle::start`](crate::Vehicle::start) and
//! [`Vehicle::stop`](crate::Vehicle::stop). The exact wording is up to each
//! vehicle; what matters is one distinguishable [`Signal`] per vehicle and phase.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::io::Write;
use tracing::{info, warn};

/// Which transition produced a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Start,
    Stop,
}

impl Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Start => f.write_str("start"),
            Phase::Stop => f.write_str("stop"),
        }
    }
}

/// A single message emitted by a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub vehicle: String,
    pub phase: Phase,
    pub message: String,
}

impl Signal {
    pub fn new(vehicle: impl Into<String>, phase: Phase, message: impl Into<String>) -> Self {
        Self {
            vehicle: vehicle.into(),
            phase,
            message: message.into(),
        }
    }

    pub fn start(vehicle: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vehicle, Phase::Start, message)
    }

    pub fn stop(vehicle: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vehicle, Phase::Stop, message)
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Destination for vehicle signals.
pub trait SignalSink {
    fn emit(&mut self, signal: Signal);
}

/// Emits each signal as a structured `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SignalSink for TracingSink {
    fn emit(&mut self, signal: Signal) {
        info!(vehicle = %signal.vehicle, phase = %signal.phase, "{}", signal.message);
    }
}

/// Writes each signal as one plain line to any [`Write`] target.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> SignalSink for WriterSink<W> {
    fn emit(&mut self, signal: Signal) {
        if let Err(e) = writeln!(self.out, "{}", signal.message) {
            warn!(vehicle = %signal.vehicle, error = %e, "Signal write failed");
        }
    }
}
