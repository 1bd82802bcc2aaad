//! Property tests for the checkout engine.

use std::sync::Arc;

use proptest::prelude::*;

use tally_core::checkout::calculate_total;
use tally_core::item::{BasicItem, Item, TaxedItem};
use tally_core::money::Money;
use tally_core::restriction::{AgeRestriction, MedicalRestriction, Restriction};
use tally_core::types::{Customer, TaxRate};

// =============================================================================
// Basket Model and Strategies
// =============================================================================

/// Plain-data mirror of a restriction, so the reference model can
/// re-evaluate eligibility without going through the engine.
#[derive(Debug, Clone)]
enum RulePlan {
    MinimumAge(u32),
    Prescription,
}

impl RulePlan {
    fn passes(&self, customer: &Customer) -> bool {
        match self {
            RulePlan::MinimumAge(min) => customer.age >= *min,
            RulePlan::Prescription => customer.has_prescription,
        }
    }

    fn description(&self) -> String {
        match self {
            RulePlan::MinimumAge(min) => format!("minimum age {min}"),
            RulePlan::Prescription => "prescription required".to_string(),
        }
    }

    fn build(&self) -> Arc<dyn Restriction> {
        match self {
            RulePlan::MinimumAge(min) => Arc::new(AgeRestriction::new(*min)),
            RulePlan::Prescription => Arc::new(MedicalRestriction::new()),
        }
    }
}

#[derive(Debug, Clone)]
struct ItemPlan {
    label: String,
    price_cents: i64,
    tax_bps: Option<u32>,
    rules: Vec<RulePlan>,
}

impl ItemPlan {
    fn build(&self) -> Box<dyn Item> {
        let rules: Vec<Arc<dyn Restriction>> = self.rules.iter().map(RulePlan::build).collect();
        let price = Money::from_cents(self.price_cents);

        match self.tax_bps {
            Some(bps) => Box::new(TaxedItem::with_restrictions(
                self.label.clone(),
                price,
                TaxRate::from_bps(bps),
                rules,
            )),
            None => Box::new(BasicItem::with_restrictions(self.label.clone(), price, rules)),
        }
    }

    /// The rule the engine is expected to name, if the item is rejected.
    fn first_failure(&self, customer: &Customer) -> Option<String> {
        self.rules
            .iter()
            .find(|rule| !rule.passes(customer))
            .map(RulePlan::description)
    }

    fn expected_tax_cents(&self) -> i64 {
        match self.tax_bps {
            Some(bps) => ((self.price_cents as i128 * bps as i128 + 5000) / 10000) as i64,
            None => 0,
        }
    }
}

fn rule_plan() -> impl Strategy<Value = RulePlan> {
    prop_oneof![
        (0u32..=120).prop_map(RulePlan::MinimumAge),
        Just(RulePlan::Prescription),
    ]
}

fn item_plan() -> impl Strategy<Value = ItemPlan> {
    (
        "[A-Za-z]{1,12}",
        -1_000i64..100_000,
        prop::option::of(0u32..10_000),
        prop::collection::vec(rule_plan(), 0..4),
    )
        .prop_map(|(label, price_cents, tax_bps, rules)| ItemPlan {
            label,
            price_cents,
            tax_bps,
            rules,
        })
}

fn basket() -> impl Strategy<Value = Vec<ItemPlan>> {
    prop::collection::vec(item_plan(), 0..12)
}

fn customer() -> impl Strategy<Value = Customer> {
    (0u32..=120, any::<bool>()).prop_map(|(age, rx)| Customer::new(age, rx))
}

fn build_basket(plans: &[ItemPlan]) -> Vec<Box<dyn Item>> {
    plans.iter().map(ItemPlan::build).collect()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The engine's report matches an independent fold over the
    /// same basket: same accepted labels in input order, same rejections
    /// with the first-declared failing rule, same totals.
    #[test]
    fn property_report_matches_reference_fold(
        plans in basket(),
        customer in customer(),
    ) {
        let items = build_basket(&plans);
        let report = calculate_total(&items, &customer);

        let mut expected_accepted = Vec::new();
        let mut expected_rejected = Vec::new();
        let mut expected_subtotal = 0i64;
        let mut expected_tax = 0i64;

        for plan in &plans {
            match plan.first_failure(&customer) {
                Some(rule) => expected_rejected.push((plan.label.clone(), rule)),
                None => {
                    expected_accepted.push(plan.label.clone());
                    expected_subtotal += plan.price_cents;
                    expected_tax += plan.expected_tax_cents();
                }
            }
        }

        let accepted: Vec<String> =
            report.accepted.iter().map(|a| a.label.clone()).collect();
        let rejected: Vec<(String, String)> = report
            .rejected
            .iter()
            .map(|r| (r.label.clone(), r.failed_restriction.clone()))
            .collect();

        prop_assert_eq!(accepted, expected_accepted);
        prop_assert_eq!(rejected, expected_rejected);
        prop_assert_eq!(report.subtotal_cents, expected_subtotal);
        prop_assert_eq!(report.tax_subtotal_cents, expected_tax);
    }

    /// PROPERTY: The total is always exactly subtotal plus tax subtotal.
    #[test]
    fn property_total_is_subtotal_plus_tax(
        plans in basket(),
        customer in customer(),
    ) {
        let items = build_basket(&plans);
        let report = calculate_total(&items, &customer);

        prop_assert_eq!(
            report.total_cents,
            report.subtotal_cents + report.tax_subtotal_cents
        );
    }

    /// PROPERTY: Items without restrictions are accepted for every
    /// customer, and every item lands on exactly one of the two lists.
    #[test]
    fn property_unrestricted_items_always_accepted(
        mut plans in basket(),
        customer in customer(),
    ) {
        for plan in &mut plans {
            plan.rules.clear();
        }

        let items = build_basket(&plans);
        let report = calculate_total(&items, &customer);

        prop_assert!(report.rejected.is_empty());
        prop_assert_eq!(report.accepted.len(), plans.len());
    }

    /// PROPERTY: Untaxed accepted items contribute exactly zero tax.
    #[test]
    fn property_untaxed_items_contribute_zero_tax(
        plans in basket(),
        customer in customer(),
    ) {
        let untaxed: Vec<ItemPlan> = plans
            .into_iter()
            .map(|mut plan| {
                plan.tax_bps = None;
                plan
            })
            .collect();

        let items = build_basket(&untaxed);
        let report = calculate_total(&items, &customer);

        prop_assert_eq!(report.tax_subtotal_cents, 0);
        prop_assert!(report.accepted.iter().all(|a| a.tax_cents == 0));
    }

    /// PROPERTY: Reversing the basket leaves all three totals unchanged.
    /// Eligibility is per item, so summation commutes.
    #[test]
    fn property_item_order_does_not_change_totals(
        plans in basket(),
        customer in customer(),
    ) {
        let forward = calculate_total(&build_basket(&plans), &customer);

        let mut reversed_plans = plans;
        reversed_plans.reverse();
        let reversed = calculate_total(&build_basket(&reversed_plans), &customer);

        prop_assert_eq!(forward.subtotal_cents, reversed.subtotal_cents);
        prop_assert_eq!(forward.tax_subtotal_cents, reversed.tax_subtotal_cents);
        prop_assert_eq!(forward.total_cents, reversed.total_cents);
    }

    /// PROPERTY: Running the same checkout twice yields identical
    /// reports. The engine holds no hidden state and mutates no input.
    #[test]
    fn property_checkout_is_idempotent(
        plans in basket(),
        customer in customer(),
    ) {
        let items = build_basket(&plans);

        let first = calculate_total(&items, &customer);
        let second = calculate_total(&items, &customer);

        prop_assert_eq!(first, second);
    }
}
