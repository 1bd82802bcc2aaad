//! Property tests for integer money arithmetic.

use proptest::prelude::*;

use tally_core::money::Money;
use tally_core::types::TaxRate;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Tax on a non-negative price at a sub-100% rate stays
    /// within [0, price] even after rounding.
    #[test]
    fn property_tax_bounded_by_price(
        price in 0i64..10_000_000,
        bps in 0u32..10_000,
    ) {
        let tax = Money::from_cents(price).calculate_tax(TaxRate::from_bps(bps));

        prop_assert!(tax.cents() >= 0);
        prop_assert!(tax.cents() <= price);
    }

    /// PROPERTY: Raising the rate never lowers the tax.
    #[test]
    fn property_tax_monotone_in_rate(
        price in 0i64..10_000_000,
        a in 0u32..10_000,
        b in 0u32..10_000,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let money = Money::from_cents(price);

        let at_lo = money.calculate_tax(TaxRate::from_bps(lo));
        let at_hi = money.calculate_tax(TaxRate::from_bps(hi));

        prop_assert!(at_lo.cents() <= at_hi.cents());
    }

    /// PROPERTY: A zero rate always yields zero tax, whatever the price.
    #[test]
    fn property_zero_rate_yields_zero_tax(price in -1_000_000i64..1_000_000) {
        let tax = Money::from_cents(price).calculate_tax(TaxRate::zero());
        prop_assert!(tax.is_zero());
    }

    /// PROPERTY: Money addition and subtraction mirror raw cent math.
    #[test]
    fn property_arithmetic_matches_cents(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
    ) {
        prop_assert_eq!((Money::from_cents(a) + Money::from_cents(b)).cents(), a + b);
        prop_assert_eq!((Money::from_cents(a) - Money::from_cents(b)).cents(), a - b);
    }
}
