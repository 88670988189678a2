//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Registration**: each namespace added to the registry (`debug`)
//! - **Loading**: the first load of each namespace, with its export count (`info`).
//!   The showroom verifies its catalog at startup, so all of these appear up front.
//! - **Resolution**: requested name, namespace used, chosen factory, and whether the
//!   fallback served it (`info`); unknown names and failing loaders (`debug`/`warn`)
//! - **Test drives**: one `test_drive` span per request, with vehicle signals inside it
//!
//! ## Usage Examples
//!
//! ```bash
//! # Resolution outcomes only
//! RUST_LOG=info cargo run
//!
//! # Every step, including fallback decisions
//! RUST_LOG=debug cargo run
//!
//! # Framework only
//! RUST_LOG=factory_framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a run over the default lineup looks like this. Startup
//! verification loads every namespace before the first drive:
//!
//! ```text
//! INFO Namespace loaded namespace=chevy_factory exports=3
//! INFO Namespace loaded namespace=ford_factory exports=3
//! INFO Namespace loaded namespace=jeep_factory exports=3
//! INFO Namespace loaded namespace=null_factory exports=3
//! INFO Showroom ready namespaces=4 fallback=null_factory
//! INFO test_drive: Resolved requested=chevy_factory namespace=chevy_factory
//!      factory="ChevyFactory" fell_back=false
//! INFO test_drive: Resolved requested=tesla_factory namespace=null_factory
//!      factory="NullFactory" fell_back=true
//! INFO Showroom run complete drives=4 unknown=1
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Namespace and factory fields identify the source
        .compact()
        .init();
}
