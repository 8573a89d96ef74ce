//! Aggregate analysis: baseline plus all three scenario projections.
//!
//! This is the engine's main entry point. Pure: same input, same
//! output, no shared state. Downstream consumers (sensitivity,
//! narrative, export) all start from the [`RoiAnalysis`] produced here.

use crate::{
    baseline::BaselineCosts,
    constants::PAYBACK_DISPLAY_CAP_MONTHS,
    input::ProcessInput,
    scenario::ScenarioProjection,
    types::ScenarioTriple,
};
use serde::{Deserialize, Serialize};

/// Full calculation result for one input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiAnalysis {
    pub baseline: BaselineCosts,
    pub scenarios: ScenarioTriple<ScenarioProjection>,
}

/// Run the whole model: derive the baseline once, then project each
/// scenario against it.
pub fn analyze(input: &ProcessInput) -> RoiAnalysis {
    let baseline = BaselineCosts::from_input(input);
    let scenarios =
        ScenarioTriple::from_fn(|key| ScenarioProjection::project(input, &baseline, key));

    let real = &scenarios.real;
    log::debug!(
        "analysis: annual_cost={:.0} real: savings={:.0} roi={:.3} payback={:.1}mo",
        baseline.annual_cost,
        real.total_savings_annual,
        real.roi,
        real.payback_months
    );
    if real.payback_months > PAYBACK_DISPLAY_CAP_MONTHS {
        log::warn!(
            "realistic scenario does not pay back within {:.0} months",
            PAYBACK_DISPLAY_CAP_MONTHS
        );
    }

    RoiAnalysis { baseline, scenarios }
}
