//! # Validation Module
//!
//! Opt-in input validation for catalogs and items.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller builds the catalog                                     │
//! │  └── Item constructors accept whatever they are given                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (opt-in)                                          │
//! │  ├── Field checks: label, price, tax rate, order size                   │
//! │  └── Callers who want a vetted catalog call validate_catalog first      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Checkout engine                                               │
//! │  └── NEVER validates: a negative price flows into the totals            │
//! │                                                                         │
//! │  Skipping layer 2 is supported behavior, not an oversight.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A restriction slot can never hold a missing element here; the type
//! system rules that out, so there is no checker for it.
//!
//! ## Usage
//! ```rust
//! use tally_core::item::BasicItem;
//! use tally_core::money::Money;
//! use tally_core::validation::validate_item;
//!
//! let apple = BasicItem::new("Apple", Money::from_cents(150));
//! assert!(validate_item(&apple).is_ok());
//! ```

use crate::error::{CheckoutError, CheckoutResult, ValidationError};
use crate::item::Item;
use crate::{MAX_LABEL_LENGTH, MAX_ORDER_ITEMS, MAX_TAX_RATE_BPS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item label.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_label;
///
/// assert!(validate_label("Candy Bar").is_ok());
/// assert!(validate_label("").is_err());
/// assert!(validate_label(&"A".repeat(300)).is_err());
/// ```
pub fn validate_label(label: &str) -> ValidationResult<()> {
    let label = label.trim();

    if label.is_empty() {
        return Err(ValidationError::Required {
            field: "label".to_string(),
        });
    }

    if label.len() > MAX_LABEL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "label".to_string(),
            max: MAX_LABEL_LENGTH,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(610).is_ok());  // $6.10
/// assert!(validate_price_cents(0).is_ok());    // Free item
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be strictly below 10000 bps. A rate equal to the full price
///   (100%) or above is rejected; 9999 bps is the highest legal rate.
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps >= MAX_TAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: (MAX_TAX_RATE_BPS - 1) as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Item and Catalog Validators
// =============================================================================

/// Validates one item: label, price, and tax rate when present.
pub fn validate_item(item: &dyn Item) -> ValidationResult<()> {
    validate_label(item.label())?;
    validate_price_cents(item.price().cents())?;

    if let Some(taxable) = item.as_taxable() {
        validate_tax_rate_bps(taxable.tax_rate().bps())?;
    }

    Ok(())
}

/// Validates an order's item count.
///
/// ## Rules
/// - Must not exceed MAX_ORDER_ITEMS (100)
pub fn validate_order_size(count: usize) -> CheckoutResult<()> {
    if count > MAX_ORDER_ITEMS {
        return Err(CheckoutError::OrderTooLarge {
            max: MAX_ORDER_ITEMS,
        });
    }

    Ok(())
}

/// Validates a whole catalog before checkout: order size first, then
/// every item. The first failure wins and carries the item's label.
///
/// Entirely optional. `calculate_total` accepts unvalidated catalogs and
/// always has.
pub fn validate_catalog(items: &[Box<dyn Item>]) -> CheckoutResult<()> {
    validate_order_size(items.len())?;

    for item in items {
        validate_item(item.as_ref()).map_err(|source| CheckoutError::InvalidItem {
            label: item.label().to_string(),
            source,
        })?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
