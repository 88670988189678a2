use crate::model::NullCar;
use factory_framework::{FactoryError, FactoryNamespace, Vehicle, VehicleFactory};

pub const NAMESPACE: &str = "null_factory";

/// Fallback factory: builds a [`NullCar`] carrying the sentinel name.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFactory;

impl VehicleFactory for NullFactory {
    fn create_auto(&self) -> Result<Box<dyn Vehicle>, FactoryError> {
        Ok(Box::new(NullCar::default()))
    }
}

pub fn namespace() -> FactoryNamespace {
    FactoryNamespace::new(NAMESPACE)
        .export_abstract(super::FACTORY_CONTRACT)
        .export_type::<NullCar>()
        .export_factory::<NullFactory>()
}
