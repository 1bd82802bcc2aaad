//! # Purchase Restrictions
//!
//! Eligibility rules that decide whether a customer may buy an item.
//!
//! ## How Restrictions Fit In
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Item::restrictions() ──► [Arc<dyn Restriction>, ...]               │
//! │                                    │                                │
//! │                                    ▼                                │
//! │  checkout engine asks each rule:  can_purchase(&customer)?          │
//! │                                    │                                │
//! │              ┌─────────────────────┴───────────────────┐            │
//! │              ▼                                         ▼            │
//! │      all true: item accepted                 first false: item      │
//! │      (price + tax counted)                   rejected, rule named   │
//! │                                              on the report          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! Implementations must be pure reads: inspect the customer, return a
//! verdict, touch nothing else. The engine may call a rule any number of
//! times and in any order, so verdicts must not depend on call history.

use std::fmt;

use crate::types::Customer;

// =============================================================================
// Restriction Trait
// =============================================================================

/// A single eligibility rule attached to an item.
///
/// Rules are stateless and shared: the same `Arc<dyn Restriction>` may sit
/// on many items at once, so `can_purchase` takes `&self` and must not
/// mutate.
pub trait Restriction: fmt::Debug + Send + Sync {
    /// Returns true if the customer satisfies this rule.
    fn can_purchase(&self, customer: &Customer) -> bool;

    /// Short human-readable name for receipts and logs, e.g.
    /// "minimum age 18".
    fn describe(&self) -> String;
}

// =============================================================================
// Age Restriction
// =============================================================================

/// Requires the customer to be at least `minimum_age` years old.
///
/// The bound is inclusive: a customer exactly at the minimum age passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRestriction {
    minimum_age: u32,
}

impl AgeRestriction {
    /// Creates an age rule with the given inclusive minimum.
    #[inline]
    pub const fn new(minimum_age: u32) -> Self {
        AgeRestriction { minimum_age }
    }

    /// Returns the inclusive minimum age.
    #[inline]
    pub const fn minimum_age(&self) -> u32 {
        self.minimum_age
    }
}

impl Restriction for AgeRestriction {
    fn can_purchase(&self, customer: &Customer) -> bool {
        customer.age >= self.minimum_age
    }

    fn describe(&self) -> String {
        format!("minimum age {}", self.minimum_age)
    }
}

// =============================================================================
// Medical Restriction
// =============================================================================

/// Requires the customer to hold a valid prescription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MedicalRestriction;

impl MedicalRestriction {
    /// Creates a prescription rule.
    #[inline]
    pub const fn new() -> Self {
        MedicalRestriction
    }
}

impl Restriction for MedicalRestriction {
    fn can_purchase(&self, customer: &Customer) -> bool {
        customer.has_prescription
    }

    fn describe(&self) -> String {
        "prescription required".to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_age_restriction_inclusive_boundary() {
        let rule = AgeRestriction::new(18);

        assert!(rule.can_purchase(&Customer::new(18, false)));
        assert!(rule.can_purchase(&Customer::new(19, false)));
        assert!(!rule.can_purchase(&Customer::new(17, false)));
    }

    #[test]
    fn test_age_restriction_describe() {
        assert_eq!(AgeRestriction::new(18).describe(), "minimum age 18");
        assert_eq!(AgeRestriction::new(15).describe(), "minimum age 15");
    }

    #[test]
    fn test_medical_restriction() {
        let rule = MedicalRestriction::new();

        assert!(rule.can_purchase(&Customer::new(30, true)));
        assert!(!rule.can_purchase(&Customer::new(30, false)));
        assert_eq!(rule.describe(), "prescription required");
    }

    #[test]
    fn test_rules_are_shareable() {
        // One rule instance attached to many items must answer
        // independently for each customer.
        let rule: Arc<dyn Restriction> = Arc::new(AgeRestriction::new(18));
        let clone = Arc::clone(&rule);

        assert!(rule.can_purchase(&Customer::new(20, false)));
        assert!(!clone.can_purchase(&Customer::new(10, false)));
    }

    #[test]
    fn test_prescription_ignores_age() {
        // Rules read only the attribute they govern.
        let rule = MedicalRestriction::new();
        assert!(rule.can_purchase(&Customer::new(0, true)));
        assert!(!rule.can_purchase(&Customer::new(99, false)));
    }
}
