//! Property tests for the conversion engine.

use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

use salary_engine::calculation::{compute_gross_salary, compute_net_salary, compute_threshold};
use salary_engine::config::{ContributionRates, RateConfiguration};

const ROUND_TRIP_TOLERANCE: f64 = 1e-5;
const MONOTONIC_SLACK: f64 = 1e-6;

fn rates_from_basis_points(
    pension_bp: u32,
    health_bp: u32,
    additional_bp: u32,
    unemployment_bp: u32,
    tax_bp: u32,
    allowance: u32,
) -> RateConfiguration {
    RateConfiguration {
        contributions: ContributionRates {
            pension_and_disability: f64::from(pension_bp) / 10_000.0,
            health_insurance: f64::from(health_bp) / 10_000.0,
            additional_health_insurance: f64::from(additional_bp) / 10_000.0,
            unemployment_insurance: f64::from(unemployment_bp) / 10_000.0,
        },
        tax: f64::from(tax_bp) / 10_000.0,
        allowance: f64::from(allowance),
    }
}

proptest! {
    #[test]
    fn prop_forward_conserves_deductions(gross in -1.0e7f64..1.0e7) {
        let rates = RateConfiguration::default();
        let breakdown = compute_net_salary(gross, &rates);

        prop_assert_eq!(
            breakdown.net,
            breakdown.gross - breakdown.contributions.total - breakdown.tax.income_tax
        );
    }

    #[test]
    fn prop_taxable_base_is_never_negative(
        amount in -1.0e7f64..1.0e7,
        allowance in 0u32..50_000,
        tax_bp in 0u32..5_000,
    ) {
        let rates = rates_from_basis_points(1_880, 750, 50, 120, tax_bp, allowance);

        prop_assert!(compute_net_salary(amount, &rates).tax.taxable_base >= 0.0);
        prop_assert!(compute_gross_salary(amount, &rates).tax.taxable_base >= 0.0);
    }

    #[test]
    fn prop_round_trip_recovers_gross(
        gross in 0.0f64..1.0e7,
        pension_bp in 0u32..3_000,
        health_bp in 0u32..1_500,
        additional_bp in 0u32..500,
        unemployment_bp in 0u32..500,
        tax_bp in 0u32..4_500,
        allowance in 0u32..50_000,
    ) {
        let rates = rates_from_basis_points(
            pension_bp,
            health_bp,
            additional_bp,
            unemployment_bp,
            tax_bp,
            allowance,
        );

        let net = compute_net_salary(gross, &rates).net;
        let recovered = compute_gross_salary(net, &rates).gross;
        prop_assert!(
            (recovered - gross).abs() <= ROUND_TRIP_TOLERANCE,
            "gross {} recovered as {}",
            gross,
            recovered
        );
    }

    #[test]
    fn prop_inverse_reproduces_requested_net(net in 0.0f64..1.0e7) {
        let rates = RateConfiguration::default();
        let breakdown = compute_gross_salary(net, &rates);

        prop_assert!((breakdown.net - net).abs() <= ROUND_TRIP_TOLERANCE);
    }

    #[test]
    fn prop_forward_is_monotonic(a in 0.0f64..1.0e7, b in 0.0f64..1.0e7) {
        let rates = RateConfiguration::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let low_net = compute_net_salary(low, &rates).net;
        let high_net = compute_net_salary(high, &rates).net;
        prop_assert!(high_net >= low_net - MONOTONIC_SLACK);
    }

    #[test]
    fn prop_inverse_is_monotonic(a in 0.0f64..1.0e7, b in 0.0f64..1.0e7) {
        let rates = RateConfiguration::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let low_gross = compute_gross_salary(low, &rates).gross;
        let high_gross = compute_gross_salary(high, &rates).gross;
        prop_assert!(high_gross >= low_gross - MONOTONIC_SLACK);
    }

    #[test]
    fn prop_threshold_separates_taxed_and_untaxed(net in 0.0f64..1.0e6) {
        let rates = RateConfiguration::default();
        let threshold = compute_threshold(&rates);
        let breakdown = compute_gross_salary(net, &rates);

        if net <= threshold.net {
            prop_assert!(breakdown.tax.income_tax <= MONOTONIC_SLACK);
        } else {
            prop_assert!(breakdown.tax.income_tax >= 0.0);
        }
    }
}
