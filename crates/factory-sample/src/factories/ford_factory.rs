use crate::model::FordFusion;
use factory_framework::{FactoryError, FactoryNamespace, Vehicle, VehicleFactory};

pub const NAMESPACE: &str = "ford_factory";

/// Builds Ford Fusions.
#[derive(Debug, Default, Clone, Copy)]
pub struct FordFactory;

impl VehicleFactory for FordFactory {
    fn create_auto(&self) -> Result<Box<dyn Vehicle>, FactoryError> {
        let mut ford = FordFusion::default();
        ford.set_name("Ford Fusion".to_string());
        Ok(Box::new(ford))
    }
}

pub fn namespace() -> FactoryNamespace {
    FactoryNamespace::new(NAMESPACE)
        .export_abstract(super::FACTORY_CONTRACT)
        .export_type::<FordFusion>()
        .export_factory::<FordFactory>()
}
