use factory_framework::{RunState, Signal, SignalSink, Vehicle};

/// Represents a Chevy Volt.
///
/// Built unnamed; [`ChevyFactory`](crate::factories::ChevyFactory) names it after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChevyVolt {
    name: String,
    state: RunState,
}

impl Vehicle for ChevyVolt {
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
        sink.emit(Signal::start(
            &self.name,
            format!("{} running with shocking power!", self.name),
        ));
    }

    fn stop(&mut self, sink: &mut dyn SignalSink) {
        self.state = RunState::Stopped;
        sink.emit(Signal::stop(&self.name, format!("{} shutting down.", self.name)));
    }
}
