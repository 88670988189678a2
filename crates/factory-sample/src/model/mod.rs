//! Concrete vehicles implementing the [`Vehicle`](factory_framework::Vehicle) contract.

pub mod chevy_volt;
pub mod ford_fusion;
pub mod jeep_sahara;
pub mod null_car;

pub use chevy_volt::*;
pub use ford_fusion::*;
pub use jeep_sahara::*;
pub use null_car::*;

#[cfg(test)]
mod tests {
    use super::*;
    use factory_framework::mock::RecordingSink;
    use factory_framework::{Phase, RunState, Vehicle};

    fn drive(car: &mut dyn Vehicle) -> RecordingSink {
        let mut sink = RecordingSink::new();
        car.start(&mut sink);
        assert_eq!(car.state(), RunState::Running);
        car.stop(&mut sink);
        assert_eq!(car.state(), RunState::Stopped);
        sink
    }

    #[test]
    fn test_branded_vehicles_announce_both_phases() {
        let mut volt = ChevyVolt::default();
        volt.set_name("Chevy Volt".into());
        let mut fusion = FordFusion::default();
        fusion.set_name("Ford Fusion".into());
        let mut sahara = JeepSahara::new("Jeep Sahara");

        assert_eq!(
            drive(&mut volt).messages(),
            vec!["Chevy Volt running with shocking power!", "Chevy Volt shutting down."]
        );
        assert_eq!(
            drive(&mut fusion).messages(),
            vec!["Ford Fusion running cooly!", "Ford Fusion shutting down."]
        );
        assert_eq!(
            drive(&mut sahara).messages(),
            vec!["Jeep Sahara running ruggedly.", "Jeep Sahara shutting down."]
        );
    }

    #[test]
    fn test_null_car_stops_silently() {
        let mut car = NullCar::default();
        car.set_name("tesla_factory".into());

        let sink = drive(&mut car);
        assert_eq!(sink.messages(), vec!["Unknown car \"tesla_factory\"."]);
        assert_eq!(sink.for_phase(Phase::Stop).count(), 0);
    }

    #[test]
    fn test_unnamed_vehicle_does_not_fail() {
        let mut volt = ChevyVolt::default();
        assert_eq!(volt.name(), "");
        assert_eq!(drive(&mut volt).len(), 2);
        assert_eq!(NullCar::default().name(), UNKNOWN_VEHICLE);
    }
}
