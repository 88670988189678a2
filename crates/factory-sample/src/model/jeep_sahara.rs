use factory_framework::{RunState, Signal, SignalSink, Vehicle};

/// Represents a Jeep Sahara.
///
/// Unlike the other vehicles it takes its name at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct JeepSahara {
    name: String,
    state: RunState,
}

impl JeepSahara {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RunState::Parked,
        }
    }
}

impl Vehicle for JeepSahara {
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
        sink.emit(Signal::start(&self.name, format!("{} running ruggedly.", self.name)));
    }

    fn stop(&mut self, sink: &mut dyn SignalSink) {
        self.state = RunState::Stopped;
        sink.emit(Signal::stop(&self.name, format!("{} shutting down.", self.name)));
    }
}
