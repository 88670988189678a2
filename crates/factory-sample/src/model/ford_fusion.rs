use factory_framework::{RunState, Signal, SignalSink, Vehicle};

/// Represents a Ford Fusion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FordFusion {
    name: String,
    state: RunState,
}

impl Vehicle for FordFusion {
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
        sink.emit(Signal::start(&self.name, format!("{} running cooly!", self.name)));
    }

    fn stop(&mut self, sink: &mut dyn SignalSink) {
        self.state = RunState::Stopped;
        sink.emit(Signal::stop(&self.name, format!("{} shutting down.", self.name)));
    }
}
