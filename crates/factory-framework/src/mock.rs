//! # Test Doubles
//!
//! In-memory stand-ins for the pieces a test usually wants to observe or break.
//!
//! | Double | Stands in for | Use it to |
//! |--------|---------------|-----------|
//! | [`RecordingSink`] | [`TracingSink`](crate::TracingSink), [`WriterSink`](crate::WriterSink) | Assert on the exact signals a vehicle emitted |
//! | [`MockFactory`] | A concrete vendor factory | Register a working namespace without a vehicle catalog |
//! | [`FailingFactory`] | A factory whose assembly line breaks | Exercise [`FactoryError::ProductConstruction`] |
//!
//! ## Checking Signals
//!
//! ```rust
//! use factory_framework::mock::{MockFactory, RecordingSink};
//! use factory_framework::{Phase, VehicleFactory};
//!
//! let mut sink = RecordingSink::new();
//! let mut car = MockFactory::new("Test Mule").create_auto().unwrap();
//!
//! car.start(&mut sink);
//! car.stop(&mut sink);
//!
//! assert_eq!(sink.messages(), vec!["Test Mule started", "Test Mule stopped"]);
//! assert_eq!(sink.for_phase(Phase::Stop).count(), 1);
//! ```
//!
//! ## Injecting Failures
//!
//! ```rust
//! use factory_framework::mock::FailingFactory;
//! use factory_framework::{FactoryError, VehicleFactory};
//!
//! let err = FailingFactory.create_auto().unwrap_err();
//! assert!(matches!(err, FactoryError::ProductConstruction { .. }));
//! ```

use crate::error::FactoryError;
use crate::product::{RunState, Vehicle, VehicleFactory};
use crate::signal::{Phase, Signal, SignalSink};

/// Sink that keeps every signal in memory, in emission order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    signals: Vec<Signal>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn messages(&self) -> Vec<&str> {
        self.signals.iter().map(|s| s.message.as_str()).collect()
    }

    pub fn for_phase(&self, phase: Phase) -> impl Iterator<Item = &Signal> {
        self.signals.iter().filter(move |s| s.phase == phase)
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Drains the recorded signals, leaving the sink empty.
    pub fn take(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }
}

impl SignalSink for RecordingSink {
    fn emit(&mut self, signal: Signal) {
        self.signals.push(signal);
    }
}

/// Plain vehicle that announces both phases.
#[derive(Debug, Clone, PartialEq)]
pub struct MockVehicle {
    name: String,
    state: RunState,
}

impl MockVehicle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RunState::Parked,
        }
    }
}

impl Vehicle for MockVehicle {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn state(&self) -> RunState {
        self.state
    }

    fn start(&mut self, sink: &mut dyn SignalSink) {
        self.state = RunState::Running;
        sink.emit(Signal::start(&self.name, format!("{} started", self.name)));
    }

    fn stop(&mut self, sink: &mut dyn SignalSink) {
        self.state = RunState::Stopped;
        sink.emit(Signal::stop(&self.name, format!("{} stopped", self.name)));
    }
}

/// Factory building [`MockVehicle`]s with a fixed name.
#[derive(Debug, Clone)]
pub struct MockFactory {
    label: String,
}

impl MockFactory {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for MockFactory {
    fn default() -> Self {
        Self::new("Mock")
    }
}

impl VehicleFactory for MockFactory {
    fn create_auto(&self) -> Result<Box<dyn Vehicle>, FactoryError> {
        Ok(Box::new(MockVehicle::new(self.label.clone())))
    }
}

/// Factory whose every build fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingFactory;

impl VehicleFactory for FailingFactory {
    fn create_auto(&self) -> Result<Box<dyn Vehicle>, FactoryError> {
        Err(FactoryError::construction(
            "FailingFactory",
            "assembly line halted",
        ))
    }
}
