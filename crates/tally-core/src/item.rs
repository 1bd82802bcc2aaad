//! # Items
//!
//! The purchasable-item contract and the stock implementations of it.
//!
//! ## Capability Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Item (base contract)                               │
//! │                      ──────────────────────                             │
//! │                      label() -> &str                                    │
//! │                      price() -> Money                                   │
//! │                      restrictions() -> &[rule]   (default: empty)       │
//! │                      as_taxable() -> Option<..>  (default: None)        │
//! │                              │                                          │
//! │              ┌───────────────┴───────────────┐                          │
//! │              ▼                               ▼                          │
//! │      ┌───────────────┐               ┌───────────────┐                  │
//! │      │   BasicItem   │               │   TaxedItem   │                  │
//! │      │  no tax rate  │               │ + Taxable     │                  │
//! │      └───────────────┘               │   tax_rate()  │                  │
//! │                                      └───────────────┘                  │
//! │                                                                         │
//! │  Taxability is a capability, not a subclass: the engine asks            │
//! │  as_taxable() at runtime and an item that answers None is simply        │
//! │  never taxed. Restrictions are orthogonal - either kind may carry       │
//! │  zero or more.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use crate::money::Money;
use crate::restriction::Restriction;
use crate::types::TaxRate;

// =============================================================================
// Item Trait
// =============================================================================

/// A purchasable entity: a label, a price, and zero or more purchase
/// restrictions.
///
/// ## Defaults
/// - `restrictions` defaults to the empty slice, so an item kind that has
///   no eligibility rules does not need to say so. The checkout engine
///   relies on always receiving a list, never an absent one.
/// - `as_taxable` defaults to `None`, so the base contract carries no tax
///   rate. A kind opts in by overriding it to return `Some(self)`.
///
/// ## Invariants
/// Label and price are fixed at construction. The engine reads items, it
/// never writes them.
pub trait Item: fmt::Debug + Send + Sync {
    /// Display name shown on the report.
    fn label(&self) -> &str;

    /// Unit price. The engine does not validate it; see the `validation`
    /// module for opt-in checks.
    fn price(&self) -> Money;

    /// Eligibility rules in declaration order. Order matters: the first
    /// rule to fail is the one named on the rejection.
    fn restrictions(&self) -> &[Arc<dyn Restriction>] {
        &[]
    }

    /// Runtime capability query: does this item also carry a tax rate?
    fn as_taxable(&self) -> Option<&dyn Taxable> {
        None
    }
}

// =============================================================================
// Taxable Capability
// =============================================================================

/// Optional capability granting an item a tax rate applied on top of its
/// price. Orthogonal to restrictions: a restricted item may or may not be
/// taxable, and vice versa.
pub trait Taxable {
    /// The rate applied to this item's own price.
    fn tax_rate(&self) -> TaxRate;
}

// =============================================================================
// Basic Item
// =============================================================================

/// An untaxed item, with or without restrictions.
///
/// Covers produce ("Apple") as well as restricted tax-exempt goods such
/// as prescription medicine.
#[derive(Debug, Clone)]
pub struct BasicItem {
    label: String,
    price: Money,
    restrictions: Vec<Arc<dyn Restriction>>,
}

impl BasicItem {
    /// Creates an unrestricted item.
    pub fn new(label: impl Into<String>, price: Money) -> Self {
        BasicItem {
            label: label.into(),
            price,
            restrictions: Vec::new(),
        }
    }

    /// Creates an item guarded by the given rules, evaluated in order.
    pub fn with_restrictions(
        label: impl Into<String>,
        price: Money,
        restrictions: Vec<Arc<dyn Restriction>>,
    ) -> Self {
        BasicItem {
            label: label.into(),
            price,
            restrictions,
        }
    }
}

impl Item for BasicItem {
    fn label(&self) -> &str {
        &self.label
    }

    fn price(&self) -> Money {
        self.price
    }

    fn restrictions(&self) -> &[Arc<dyn Restriction>] {
        &self.restrictions
    }
}

// =============================================================================
// Taxed Item
// =============================================================================

/// A taxable item, with or without restrictions.
#[derive(Debug, Clone)]
pub struct TaxedItem {
    label: String,
    price: Money,
    rate: TaxRate,
    restrictions: Vec<Arc<dyn Restriction>>,
}

impl TaxedItem {
    /// Creates an unrestricted taxable item.
    pub fn new(label: impl Into<String>, price: Money, rate: TaxRate) -> Self {
        TaxedItem {
            label: label.into(),
            price,
            rate,
            restrictions: Vec::new(),
        }
    }

    /// Creates a taxable item guarded by the given rules, evaluated in
    /// order.
    pub fn with_restrictions(
        label: impl Into<String>,
        price: Money,
        rate: TaxRate,
        restrictions: Vec<Arc<dyn Restriction>>,
    ) -> Self {
        TaxedItem {
            label: label.into(),
            price,
            rate,
            restrictions,
        }
    }
}

impl Item for TaxedItem {
    fn label(&self) -> &str {
        &self.label
    }

    fn price(&self) -> Money {
        self.price
    }

    fn restrictions(&self) -> &[Arc<dyn Restriction>] {
        &self.restrictions
    }

    fn as_taxable(&self) -> Option<&dyn Taxable> {
        Some(self)
    }
}

impl Taxable for TaxedItem {
    fn tax_rate(&self) -> TaxRate {
        self.rate
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
