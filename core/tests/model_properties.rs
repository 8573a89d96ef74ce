//! Model-wide properties checked over randomized valid inputs.
//!
//! Closed-form math still has plenty of room for sign slips and
//! division hazards; these tests sweep the whole validated input space
//! with seeded generators so failures reproduce exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use roi_core::analysis;
use roi_core::constants::{
    CURRENCIES, DEPARTMENTS, WEEKS_PER_YEAR, WORKING_HOURS_PER_WEEK, WORKING_WEEKS_PER_YEAR,
};
use roi_core::input::ProcessInput;
use roi_core::scenario::ScenarioProjection;
use roi_core::sensitivity::sensitivity_analysis;
use roi_core::types::{SalaryPeriod, ScenarioTriple};

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Draw an input uniformly from the validated ranges. Triples are
/// sorted so pessimistic never exceeds optimistic.
fn random_input(rng: &mut Pcg64Mcg) -> ProcessInput {
    let mut input = ProcessInput {
        hours_per_week_per_person: rng.gen_range(0.0..=60.0),
        people: rng.gen_range(1..=10),
        avg_salary: rng.gen_range(0.0..=200_000.0),
        salary_period: if rng.gen_bool(0.5) { SalaryPeriod::Monthly } else { SalaryPeriod::Yearly },
        department: DEPARTMENTS[rng.gen_range(0..DEPARTMENTS.len())].to_string(),
        currency: CURRENCIES[rng.gen_range(0..CURRENCIES.len())].code.to_string(),
        automation_pct: random_triple(rng),
        quality_uplift_pct: random_triple(rng),
        impl_one_off: rng.gen_range(0.0..=100_000.0),
        run_monthly: rng.gen_range(0.0..=10_000.0),
        discount_rate_pct: rng.gen_range(0.0..=50.0),
        ..ProcessInput::default()
    };
    if rng.gen_bool(0.5) {
        input.error_rate_pct = Some(rng.gen_range(0.0..=30.0));
    }
    if rng.gen_bool(0.5) {
        input.rework_hours_per_week = Some(rng.gen_range(0.0..=60.0));
    }
    input
}

fn random_triple(rng: &mut Pcg64Mcg) -> ScenarioTriple<f64> {
    let mut values = [
        rng.gen_range(0.0..=100.0),
        rng.gen_range(0.0..=100.0),
        rng.gen_range(0.0..=100.0),
    ];
    values.sort_by(f64::total_cmp);
    ScenarioTriple { pess: values[0], real: values[1], opt: values[2] }
}

fn projection_fields(s: &ScenarioProjection) -> [f64; 16] {
    [
        s.time_saved_hours_week,
        s.labor_savings_week,
        s.quality_savings_week,
        s.total_savings_week,
        s.time_saved_annual,
        s.labor_savings_annual,
        s.quality_savings_annual,
        s.total_savings_annual,
        s.impl_annual,
        s.impl_annual_yr2_plus,
        s.net_savings_annual,
        s.roi,
        s.payback_months,
        s.fte_freed,
        s.npv1y,
        s.npv3y,
    ]
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// No input inside the validated ranges may produce a NaN or infinity
/// anywhere in the output, zero-cost records included.
#[test]
fn every_output_is_finite() {
    let mut rng = Pcg64Mcg::seed_from_u64(42);

    for _ in 0..500 {
        let input = random_input(&mut rng);
        assert!(input.validate().is_ok(), "generator left the envelope: {input:?}");

        let result = analysis::analyze(&input);
        for value in [
            result.baseline.hourly_rate,
            result.baseline.total_hours_week,
            result.baseline.weekly_cost,
            result.baseline.annual_cost,
        ] {
            assert!(value.is_finite(), "non-finite baseline for {input:?}");
        }
        for key in roi_core::types::ScenarioKey::ALL {
            for value in projection_fields(result.scenarios.get(key)) {
                assert!(value.is_finite(), "non-finite {key:?} field for {input:?}");
            }
        }
    }
}

/// Sorted estimate triples must yield sorted outcomes: the optimistic
/// scenario never saves less than the realistic, nor realistic less
/// than pessimistic.
#[test]
fn ordered_estimates_give_ordered_outcomes() {
    let mut rng = Pcg64Mcg::seed_from_u64(99);

    for _ in 0..300 {
        let input = random_input(&mut rng);
        let s = analysis::analyze(&input).scenarios;

        assert!(s.pess.time_saved_hours_week <= s.real.time_saved_hours_week);
        assert!(s.real.time_saved_hours_week <= s.opt.time_saved_hours_week);
        assert!(s.pess.total_savings_annual <= s.real.total_savings_annual);
        assert!(s.real.total_savings_annual <= s.opt.total_savings_annual);
        assert!(s.pess.net_savings_annual <= s.real.net_savings_annual);
        assert!(s.real.net_savings_annual <= s.opt.net_savings_annual);
    }
}

/// The pipeline is a pure function of its input.
#[test]
fn analysis_is_deterministic() {
    let mut rng = Pcg64Mcg::seed_from_u64(123);

    for _ in 0..200 {
        let input = random_input(&mut rng);
        assert_eq!(analysis::analyze(&input), analysis::analyze(&input));
    }
}

/// Signs and bounds: payback is never negative, ROI carries the sign
/// of net savings, and freed capacity never exceeds the hours put in.
#[test]
fn signs_and_bounds_hold() {
    let mut rng = Pcg64Mcg::seed_from_u64(456);

    for _ in 0..300 {
        let input = random_input(&mut rng);
        let result = analysis::analyze(&input);

        let hours_ceiling = input.hours_per_week_per_person * input.people as f64
            * WEEKS_PER_YEAR
            / (WORKING_HOURS_PER_WEEK * WORKING_WEEKS_PER_YEAR);

        for key in roi_core::types::ScenarioKey::ALL {
            let s = result.scenarios.get(key);
            assert!(s.payback_months >= 0.0, "negative payback for {input:?}");
            assert!(s.roi * s.net_savings_annual >= 0.0, "ROI sign flip for {input:?}");
            assert!(s.fte_freed >= 0.0);
            assert!(
                s.fte_freed <= hours_ceiling + 1e-9,
                "freed {} exceeds ceiling {} for {input:?}",
                s.fte_freed,
                hours_ceiling
            );
        }
    }
}

/// The sensitivity report always has its four rows, finite, whatever
/// the base record.
#[test]
fn sensitivity_rows_always_well_formed() {
    let mut rng = Pcg64Mcg::seed_from_u64(7);

    for _ in 0..200 {
        let input = random_input(&mut rng);
        let entries = sensitivity_analysis(&input);

        assert_eq!(entries.len(), 4);
        for entry in &entries {
            assert!(!entry.name.is_empty());
            assert!(entry.negative.is_finite(), "{}: {}", entry.name, entry.negative);
            assert!(entry.positive.is_finite(), "{}: {}", entry.name, entry.positive);
        }
    }
}
