//! # Checkout Engine
//!
//! The single pass that turns a basket and a customer into a priced,
//! taxed, eligibility-filtered report.
//!
//! ## One Pass, One Report
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items (in order)          customer (read-only)                         │
//! │       │                           │                                     │
//! │       ▼                           ▼                                     │
//! │  for each item:  first failing restriction?                             │
//! │       │                                                                 │
//! │       ├── yes ──► rejected list (label + the rule that failed)          │
//! │       │           remaining rules NOT evaluated, price NOT counted      │
//! │       │                                                                 │
//! │       └── no ───► accepted list (label, price, per-item tax)            │
//! │                   subtotal += price                                     │
//! │                   tax_subtotal += price × rate   (taxable items only)   │
//! │                                                                         │
//! │  total = subtotal + tax_subtotal                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//! - Input order is preserved in both report lists.
//! - Tax is computed per item on that item's own price, never on the
//!   running subtotal, so items cannot affect each other's tax.
//! - Inputs are never mutated. Running the same checkout twice yields
//!   an identical report.
//! - Rejection is not an error. Ineligible items land on the report's
//!   rejected list; the pass always completes.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::money::Money;
use crate::types::Customer;

// =============================================================================
// Report Types
// =============================================================================

/// One eligible line on the report. Snapshot pattern: label, price and
/// tax are frozen at checkout time, so the report stays valid even if
/// the catalog changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedItem {
    /// Item label at checkout time.
    pub label: String,

    /// Item price in cents.
    pub price_cents: i64,

    /// This item's own tax contribution in cents (0 for untaxed items).
    pub tax_cents: i64,
}

impl AcceptedItem {
    /// Returns the price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the tax contribution as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }
}

/// One ineligible line on the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedItem {
    /// Item label at checkout time.
    pub label: String,

    /// Description of the first rule (in declaration order) the customer
    /// failed. Later rules on the same item are never evaluated.
    pub failed_restriction: String,
}

/// The result of one checkout pass.
///
/// A pure value: no timestamp, no identity, no hidden state. Two passes
/// over the same inputs compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Eligible items, in input order.
    pub accepted: Vec<AcceptedItem>,

    /// Ineligible items, in input order.
    pub rejected: Vec<RejectedItem>,

    /// Sum of accepted item prices, in cents.
    pub subtotal_cents: i64,

    /// Sum of accepted items' tax contributions, in cents.
    pub tax_subtotal_cents: i64,

    /// `subtotal_cents + tax_subtotal_cents`.
    pub total_cents: i64,
}

impl Report {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the tax subtotal as Money.
    #[inline]
    pub fn tax_subtotal(&self) -> Money {
        Money::from_cents(self.tax_subtotal_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Runs one checkout pass over `items` for `customer`.
///
/// For each item, in input order:
/// 1. Scan its restrictions in declaration order for the first one the
///    customer fails. If found, the item is rejected with that rule and
///    contributes nothing to the totals.
/// 2. Otherwise the item is accepted: its price joins the subtotal, and
///    if it carries the taxable capability its own tax joins the tax
///    subtotal. An empty restriction list always passes.
///
/// Never fails and never validates: a negative or zero price flows into
/// the totals untouched. Callers who want their catalog checked first
/// use the `validation` module.
///
/// ## Example
/// ```rust
/// use tally_core::checkout::calculate_total;
/// use tally_core::item::{BasicItem, Item, TaxedItem};
/// use tally_core::money::Money;
/// use tally_core::types::{Customer, TaxRate};
///
/// let items: Vec<Box<dyn Item>> = vec![
///     Box::new(BasicItem::new("Apple", Money::from_cents(150))),
///     Box::new(TaxedItem::new(
///         "Candy Bar",
///         Money::from_cents(400),
///         TaxRate::from_bps(1000),
///     )),
/// ];
///
/// let report = calculate_total(&items, &Customer::new(20, false));
/// assert_eq!(report.subtotal_cents, 550);
/// assert_eq!(report.tax_subtotal_cents, 40);
/// assert_eq!(report.total_cents, 590);
/// ```
pub fn calculate_total(items: &[Box<dyn Item>], customer: &Customer) -> Report {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    let mut subtotal = Money::zero();
    let mut tax_subtotal = Money::zero();

    for item in items {
        // find() stops at the first failing rule, so later rules on a
        // rejected item are never evaluated.
        let blocked = item
            .restrictions()
            .iter()
            .find(|rule| !rule.can_purchase(customer));

        if let Some(rule) = blocked {
            rejected.push(RejectedItem {
                label: item.label().to_string(),
                failed_restriction: rule.describe(),
            });
            continue;
        }

        let price = item.price();
        let tax = match item.as_taxable() {
            Some(taxable) => price.calculate_tax(taxable.tax_rate()),
            None => Money::zero(),
        };

        subtotal += price;
        tax_subtotal += tax;
        accepted.push(AcceptedItem {
            label: item.label().to_string(),
            price_cents: price.cents(),
            tax_cents: tax.cents(),
        });
    }

    Report {
        accepted,
        rejected,
        subtotal_cents: subtotal.cents(),
        tax_subtotal_cents: tax_subtotal.cents(),
        total_cents: (subtotal + tax_subtotal).cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
