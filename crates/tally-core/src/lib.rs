//! # tally-core: Pure Checkout Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains the whole checkout
//! and eligibility engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/register (console shell)                  │   │
//! │  │      catalog fixture ──► checkout ──► receipt rendering         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ tally-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐ ┌───────────┐ ┌─────────────┐ ┌────────────┐   │   │
//! │  │   │   money   │ │   item    │ │ restriction │ │  checkout  │   │   │
//! │  │   │   Money   │ │ Item trait│ │ Restriction │ │   engine   │   │   │
//! │  │   │  TaxCalc  │ │  Taxable  │ │ Age/Medical │ │   Report   │   │   │
//! │  │   └───────────┘ └───────────┘ └─────────────┘ └────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO GLOBALS • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (TaxRate, Customer)
//! - [`restriction`] - Eligibility rules (age, prescription)
//! - [`item`] - Item contract and the Taxable capability
//! - [`checkout`] - The engine: one pass, one report
//! - [`error`] - Domain error types
//! - [`validation`] - Opt-in catalog validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Rejection Is Not Failure**: ineligible items land on the report, not in a Result
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use tally_core::checkout::calculate_total;
//! use tally_core::item::{BasicItem, Item, TaxedItem};
//! use tally_core::money::Money;
//! use tally_core::restriction::AgeRestriction;
//! use tally_core::types::{Customer, TaxRate};
//!
//! let items: Vec<Box<dyn Item>> = vec![
//!     Box::new(BasicItem::new("Apple", Money::from_cents(150))),
//!     Box::new(TaxedItem::with_restrictions(
//!         "Beer",
//!         Money::from_cents(500),
//!         TaxRate::from_bps(1000),
//!         vec![Arc::new(AgeRestriction::new(18))],
//!     )),
//! ];
//!
//! // An of-age customer buys both; the beer carries 50 cents of tax.
//! let report = calculate_total(&items, &Customer::new(20, false));
//! assert_eq!(report.total_cents, 700);
//!
//! // A minor gets the beer rejected, not an error.
//! let report = calculate_total(&items, &Customer::new(16, false));
//! assert_eq!(report.rejected[0].label, "Beer");
//! assert_eq!(report.total_cents, 150);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod item;
pub mod money;
pub mod restriction;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use checkout::{calculate_total, AcceptedItem, RejectedItem, Report};
pub use error::{CheckoutError, ValidationError};
pub use item::{BasicItem, Item, Taxable, TaxedItem};
pub use money::Money;
pub use restriction::{AgeRestriction, MedicalRestriction, Restriction};
pub use types::{Customer, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items allowed in a single order
///
/// ## Business Reason
/// Prevents runaway orders and ensures reasonable transaction sizes.
/// Enforced only by the opt-in validation pass, never by the engine.
pub const MAX_ORDER_ITEMS: usize = 100;

/// Maximum length of an item label in characters
///
/// ## Business Reason
/// Labels end up on receipts; anything longer than a receipt line is a
/// data entry mistake.
pub const MAX_LABEL_LENGTH: usize = 200;

/// Exclusive upper bound for tax rates, in basis points
///
/// A valid rate is strictly below 100% of the price. 9999 bps is the
/// highest rate the validation pass accepts.
pub const MAX_TAX_RATE_BPS: u32 = 10_000;
