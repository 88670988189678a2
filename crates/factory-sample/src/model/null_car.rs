use factory_framework::{RunState, Signal, SignalSink, Vehicle};

/// Name a [`NullCar`] carries until someone renames it.
pub const UNKNOWN_VEHICLE: &str = "unknown";

/// Stand-in vehicle for requests no factory could serve.
///
/// Starting it reports the unknown request; stopping it is silent.
#[derive(Debug, Clone, PartialEq)]
pub struct NullCar {
    name: String,
    state: RunState,
}

impl Default for NullCar {
    fn default() -> Self {
        Self {
            name: UNKNOWN_VEHICLE.to_string(),
            state: RunState::Parked,
        }
    }
}

impl Vehicle for NullCar {
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
        sink.emit(Signal::start(&self.name, format!("Unknown car \"{}\".", self.name)));
    }

    fn stop(&mut self, _sink: &mut dyn SignalSink) {
        self.state = RunState::Stopped;
    }
}
