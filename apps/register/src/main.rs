//! # Tally Register Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Register                                 │
//! │                                                                         │
//! │  main.rs ────► Delegates to lib.rs and maps errors to exit code 1       │
//! │                                                                         │
//! │  lib.rs ─────► Sets up logging, loads config, runs the checkout         │
//! │                                                                         │
//! │  catalog.rs ─► Demo catalog (the five-item grocery basket)              │
//! │                                                                         │
//! │  config.rs ──► RegisterConfig (env overrides, currency formatting)      │
//! │                                                                         │
//! │  receipt.rs ─► Receipt DTO and text/JSON rendering                      │
//! │                                                                         │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  ┌──────────────────────────────────────────────────────────────────┐   │
//! │  │                        tally-core                                │   │
//! │  │  calculate_total(items, customer) -> Report (pure, no I/O)       │   │
//! │  └──────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() {
    // The actual setup is in lib.rs for better testability
    if let Err(err) = tally_register::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
