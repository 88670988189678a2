//! # Showroom Demo
//!
//! Resolves each configured factory name and test-drives the vehicle it builds.
//!
//! ```bash
//! # Default lineup: chevy, jeep, ford, and an unknown tesla
//! RUST_LOG=info cargo run
//!
//! # Custom lineup; `"sink": "tracing"` sends signals through the log instead of stdout
//! cargo run -- showroom.json
//! ```

use factory_sample::lifecycle::{setup_tracing, Showroom, ShowroomConfig};
use std::path::PathBuf;
use tracing::{error, info};

fn main() -> Result<(), String> {
    setup_tracing();

    let config = ShowroomConfig::discover(std::env::args_os().nth(1).map(PathBuf::from))
        .map_err(|e| e.to_string())?;
    info!(requests = config.requests.len(), "Starting showroom");

    let showroom = Showroom::new(&config).map_err(|e| {
        error!(error = %e, "Catalog is broken");
        e.to_string()
    })?;

    let mut sink = config.sink.build();
    let reports = showroom.run(sink.as_mut()).map_err(|e| e.to_string())?;

    for report in reports.iter().filter(|r| r.fell_back) {
        info!(requested = %report.requested, "No factory for request");
    }
    info!("Showroom closed");
    Ok(())
}
