//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    TaxRate      │   │    Customer     │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  bps (u32)      │   │  age            │                              │
//! │  │  1000 = 10%     │   │  has_prescription│                             │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  Items and restrictions are trait objects, not structs - see the        │
//! │  `item` and `restriction` modules.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (e.g., a typical goods tax)
///
/// Rates arrive from catalog data as fractions ("0.1 of the price"); they
/// are stored here as integers so tax math never touches floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Customer
// =============================================================================

/// The customer standing at the register.
///
/// Carries exactly the attributes restrictions inspect. Restrictions read
/// the customer; they never mutate it, and the engine never inspects it
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Age in whole years.
    pub age: u32,

    /// Whether the customer holds a valid prescription.
    pub has_prescription: bool,
}

impl Customer {
    /// Creates a customer with the given attributes.
    #[inline]
    pub const fn new(age: u32, has_prescription: bool) -> Self {
        Customer {
            age,
            has_prescription,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
