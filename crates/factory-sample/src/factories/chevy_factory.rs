use crate::model::ChevyVolt;
use factory_framework::{FactoryError, FactoryNamespace, Vehicle, VehicleFactory};

pub const NAMESPACE: &str = "chevy_factory";

/// Builds Chevy Volts.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChevyFactory;

impl VehicleFactory for ChevyFactory {
    fn create_auto(&self) -> Result<Box<dyn Vehicle>, FactoryError> {
        let mut chevy = ChevyVolt::default();
        chevy.set_name("Chevy Volt".to_string());
        Ok(Box::new(chevy))
    }
}

pub fn namespace() -> FactoryNamespace {
    FactoryNamespace::new(NAMESPACE)
        .export_abstract(super::FACTORY_CONTRACT)
        .export_type::<ChevyVolt>()
        .export_factory::<ChevyFactory>()
}
