use crate::error::ShowroomError;
use crate::factories::standard_registry;
use crate::lifecycle::ShowroomConfig;
use factory_framework::{FactoryName, FactoryResolver, NamespaceId, RunState, SignalSink};
use tracing::{debug, info, info_span};

/// The main orchestrator: resolves each requested factory, builds a vehicle, and
/// takes it for a start/stop test drive.
///
/// # Example
///
/// ```rust
/// use factory_framework::mock::RecordingSink;
/// use factory_sample::lifecycle::{Showroom, ShowroomConfig};
///
/// let showroom = Showroom::new(&ShowroomConfig::default()).unwrap();
///
/// let mut sink = RecordingSink::new();
/// let report = showroom.test_drive("jeep_factory", &mut sink).unwrap();
///
/// assert_eq!(report.vehicle, "Jeep Sahara");
/// assert_eq!(
///     sink.messages(),
///     vec!["Jeep Sahara running ruggedly.", "Jeep Sahara shutting down."]
/// );
/// ```
#[derive(Debug)]
pub struct Showroom {
    resolver: FactoryResolver,
    requests: Vec<FactoryName>,
}

/// Outcome of one test drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveReport {
    pub requested: FactoryName,
    /// Namespace that actually served the request.
    pub namespace: NamespaceId,
    pub factory: String,
    pub vehicle: String,
    pub fell_back: bool,
    pub final_state: RunState,
}

impl Showroom {
    /// Builds a showroom over the standard catalog.
    ///
    /// Every namespace is loaded and checked up front, so a broken catalog fails here
    /// rather than on the first unlucky request.
    pub fn new(config: &ShowroomConfig) -> Result<Self, ShowroomError> {
        let resolver = FactoryResolver::from_config(standard_registry(), &config.resolver)?;
        resolver.verify()?;
        info!(
            namespaces = resolver.known_names().len(),
            fallback = %resolver.fallback(),
            "Showroom ready"
        );
        Ok(Self::with_resolver(resolver, config.requests.clone()))
    }

    /// Uses an already-built resolver as is.
    pub fn with_resolver(resolver: FactoryResolver, requests: Vec<FactoryName>) -> Self {
        Self { resolver, requests }
    }

    /// Resolves `requested`, builds one vehicle, starts and stops it.
    ///
    /// A vehicle from the fallback namespace is renamed after the request, so its
    /// "unknown" signal says what was asked for.
    pub fn test_drive(
        &self,
        requested: impl Into<FactoryName>,
        sink: &mut dyn SignalSink,
    ) -> Result<DriveReport, ShowroomError> {
        let requested = requested.into();
        let span = info_span!("test_drive", %requested);
        let _guard = span.enter();

        let factory = self.resolver.resolve(requested.clone())?;
        let mut car = factory.create_auto()?;
        if factory.fell_back() {
            car.set_name(requested.to_string());
        }
        debug!(vehicle = car.name(), factory = factory.type_name(), "Built");

        car.start(sink);
        car.stop(sink);

        Ok(DriveReport {
            requested,
            namespace: factory.namespace().clone(),
            factory: factory.type_name().to_string(),
            vehicle: car.name().to_string(),
            fell_back: factory.fell_back(),
            final_state: car.state(),
        })
    }

    /// Test-drives every configured request in order.
    ///
    /// Stops at the first error; unknown names are not errors.
    pub fn run(&self, sink: &mut dyn SignalSink) -> Result<Vec<DriveReport>, ShowroomError> {
        let mut reports = Vec::with_capacity(self.requests.len());
        for requested in &self.requests {
            reports.push(self.test_drive(requested.clone(), sink)?);
        }
        let unknown = reports.iter().filter(|r| r.fell_back).count();
        info!(drives = reports.len(), unknown, "Showroom run complete");
        Ok(reports)
    }
}
