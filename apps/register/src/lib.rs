//! # Tally Register Library
//!
//! Core library for the Tally console register.
//! This is the main entry point that wires configuration, the demo
//! catalog, the checkout engine, and receipt rendering together.
//!
//! ## Module Organization
//! ```text
//! tally_register/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── catalog.rs      ◄─── Demo catalog fixture
//! ├── config.rs       ◄─── Register configuration
//! └── receipt.rs      ◄─── Receipt DTO and rendering
//! ```

pub mod catalog;
pub mod config;
pub mod receipt;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::RegisterConfig;
use receipt::Receipt;
use tally_core::checkout::calculate_total;
use tally_core::types::Customer;
use tally_core::validation::validate_catalog;

/// Runs one register session: ring up the demo catalog for the
/// configured customer and print the receipt.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Register Startup                                  │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults suitable for development                                 │
/// │     • TALLY_* environment variables override                            │
/// │                                                                         │
/// │  3. Build & Validate Catalog ─────────────────────────────────────────► │
/// │     • Five-item demo basket                                             │
/// │     • The register opts in to validation; the engine never requires it  │
/// │                                                                         │
/// │  4. Run Checkout ─────────────────────────────────────────────────────► │
/// │     • One pure pass over the catalog                                    │
/// │                                                                         │
/// │  5. Render Receipt ───────────────────────────────────────────────────► │
/// │     • Text or JSON on stdout                                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Tally register");

    let config = RegisterConfig::from_env();
    info!(store = %config.store_name, output = ?config.output, "Configuration loaded");

    let items = catalog::demo_catalog();
    debug!(items = items.len(), "Catalog loaded");

    // This register refuses to ring up a broken catalog. The engine
    // itself would happily total it.
    validate_catalog(&items)?;

    let customer = Customer::new(config.customer_age, config.customer_has_prescription);
    debug!(
        age = customer.age,
        prescription = customer.has_prescription,
        "Customer profile"
    );

    let report = calculate_total(&items, &customer);
    info!(
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        total = %report.total(),
        "Checkout complete"
    );

    let receipt = Receipt::from_report(&report, &config.store_name, chrono::Utc::now());
    println!("{}", receipt.render(&config));

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally=trace` - Show trace for tally crates only
/// - Default: INFO level
///
/// Logs go to stderr. stdout carries only the rendered receipt, so
/// `tally-register > receipt.json` stays machine-readable.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tally=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
