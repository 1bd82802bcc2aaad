//! # Demo Catalog
//!
//! The fixed basket the register rings up for demos and manual testing.
//!
//! ## Basket Contents
//! | Item      | Price | Tax | Restrictions                      |
//! |-----------|-------|-----|-----------------------------------|
//! | Apple     | $1.50 | -   | -                                 |
//! | Banana    | $2.50 | -   | -                                 |
//! | Candy Bar | $4.00 | 10% | -                                 |
//! | Beer      | $5.00 | 10% | minimum age 18                    |
//! | Panadol   | $6.10 | -   | prescription, then minimum age 15 |
//!
//! Five items covering every capability combination the engine handles:
//! untaxed, taxed, taxed + restricted, untaxed + dual-restricted.

use std::sync::Arc;

use tally_core::item::{BasicItem, Item, TaxedItem};
use tally_core::money::Money;
use tally_core::restriction::{AgeRestriction, MedicalRestriction};
use tally_core::types::TaxRate;

/// Builds the demo basket, in ring-up order.
pub fn demo_catalog() -> Vec<Box<dyn Item>> {
    vec![
        // Produce is tax-exempt and unrestricted.
        Box::new(BasicItem::new("Apple", Money::from_cents(150))),
        Box::new(BasicItem::new("Banana", Money::from_cents(250))),
        // Standard taxed goods.
        Box::new(TaxedItem::new(
            "Candy Bar",
            Money::from_cents(400),
            TaxRate::from_bps(1000),
        )),
        // Alcohol: taxed and age-gated.
        Box::new(TaxedItem::with_restrictions(
            "Beer",
            Money::from_cents(500),
            TaxRate::from_bps(1000),
            vec![Arc::new(AgeRestriction::new(18))],
        )),
        // Medicine: tax-exempt, prescription check first, age check
        // second. Declaration order decides which rule a rejection
        // names.
        Box::new(BasicItem::with_restrictions(
            "Panadol",
            Money::from_cents(610),
            vec![
                Arc::new(MedicalRestriction::new()),
                Arc::new(AgeRestriction::new(15)),
            ],
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::checkout::calculate_total;
    use tally_core::types::Customer;
    use tally_core::validation::validate_catalog;

    #[test]
    fn test_demo_catalog_shape() {
        let items = demo_catalog();

        let labels: Vec<&str> = items.iter().map(|i| i.label()).collect();
        assert_eq!(labels, vec!["Apple", "Banana", "Candy Bar", "Beer", "Panadol"]);
    }

    #[test]
    fn test_demo_catalog_passes_validation() {
        assert!(validate_catalog(&demo_catalog()).is_ok());
    }

    #[test]
    fn test_eligible_customer_buys_everything() {
        let report = calculate_total(&demo_catalog(), &Customer::new(20, true));

        assert!(report.rejected.is_empty());
        assert_eq!(report.subtotal_cents, 1910);
        assert_eq!(report.tax_subtotal_cents, 90);
        assert_eq!(report.total_cents, 2000);
    }

    #[test]
    fn test_minor_without_prescription_loses_two_items() {
        let report = calculate_total(&demo_catalog(), &Customer::new(10, false));

        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].label, "Beer");
        assert_eq!(report.rejected[1].label, "Panadol");
        assert_eq!(report.subtotal_cents, 800);
        assert_eq!(report.tax_subtotal_cents, 40);
        assert_eq!(report.total_cents, 840);
    }
}
