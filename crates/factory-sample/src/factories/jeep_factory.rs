use crate::model::JeepSahara;
use factory_framework::{FactoryError, FactoryNamespace, Vehicle, VehicleFactory};

pub const NAMESPACE: &str = "jeep_factory";

/// Builds Jeep Saharas.
#[derive(Debug, Default, Clone, Copy)]
pub struct JeepFactory;

impl VehicleFactory for JeepFactory {
    fn create_auto(&self) -> Result<Box<dyn Vehicle>, FactoryError> {
        Ok(Box::new(JeepSahara::new("Jeep Sahara")))
    }
}

pub fn namespace() -> FactoryNamespace {
    FactoryNamespace::new(NAMESPACE)
        .export_abstract(super::FACTORY_CONTRACT)
        .export_type::<JeepSahara>()
        .export_factory::<JeepFactory>()
}
