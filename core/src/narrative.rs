//! Narrative generation: executive summary, recommendations and the
//! risk register.
//!
//! Pure functions of the input record and the aggregate analysis. The
//! strings are presentation text, but the thresholds behind them are
//! domain logic:
//!
//! 1. ROI classification: > 2 exceptional, > 1 strong, > 0.5 moderate,
//!    > 0 low, otherwise not recommended.
//! 2. Payback notes: < 6 months quick, > 18 months long.
//! 3. Low confidence on the automation estimate asks for a pilot.
//! 4. Quality savings above 10% of labor savings shift the emphasis of
//!    the summary from labor to quality.
//!
//! All classification uses the realistic scenario only.

use crate::{analysis::RoiAnalysis, format, input::ProcessInput, types::ConfidenceLevel};
use serde::Serialize;

const ROI_EXCEPTIONAL: f64 = 2.0;
const ROI_STRONG: f64 = 1.0;
const ROI_MODERATE: f64 = 0.5;
const PAYBACK_QUICK_MONTHS: f64 = 6.0;
const PAYBACK_LONG_MONTHS: f64 = 18.0;
const QUALITY_EMPHASIS_SHARE: f64 = 0.1;

/// Investment classification band for a realistic-scenario ROI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiBand {
    Exceptional,
    Strong,
    Moderate,
    Low,
    NotRecommended,
}

impl RoiBand {
    /// Thresholds are strict: an ROI of exactly 2.0 is Strong, not
    /// Exceptional.
    pub fn classify(roi: f64) -> Self {
        if roi > ROI_EXCEPTIONAL {
            RoiBand::Exceptional
        } else if roi > ROI_STRONG {
            RoiBand::Strong
        } else if roi > ROI_MODERATE {
            RoiBand::Moderate
        } else if roi > 0.0 {
            RoiBand::Low
        } else {
            RoiBand::NotRecommended
        }
    }
}

/// Four-sentence summary of the realistic scenario.
pub fn executive_summary(input: &ProcessInput, analysis: &RoiAnalysis) -> Vec<String> {
    let real = &analysis.scenarios.real;
    let currency = input.currency.as_str();

    let value_class = match RoiBand::classify(real.roi) {
        RoiBand::Exceptional | RoiBand::Strong => "high-value",
        RoiBand::Moderate => "medium-value",
        RoiBand::Low | RoiBand::NotRecommended => "low-value",
    };

    let quality_line = if real.quality_savings_annual
        > real.labor_savings_annual * QUALITY_EMPHASIS_SHARE
    {
        format!(
            "Significant quality improvements are expected, contributing {} in additional value.",
            format::currency(real.quality_savings_annual, currency)
        )
    } else {
        format!(
            "Primary value comes from labor savings of {} annually.",
            format::currency(real.labor_savings_annual, currency)
        )
    };

    vec![
        format!(
            "Automating {} could save {} annually.",
            input.process_description.to_lowercase(),
            format::currency(real.total_savings_annual, currency)
        ),
        format!(
            "With {} ROI and {} payback period, this represents a {} investment opportunity.",
            format::percent(real.roi),
            format::months(real.payback_months),
            value_class
        ),
        format!(
            "The automation would free up {} equivalent capacity across {} people in {}.",
            format::fte(real.fte_freed),
            input.people,
            input.department
        ),
        quality_line,
    ]
}

/// Action recommendations: one ROI-band line, then conditional payback
/// and confidence notes.
pub fn recommendations(input: &ProcessInput, analysis: &RoiAnalysis) -> Vec<String> {
    let real = &analysis.scenarios.real;
    let mut out = Vec::new();

    out.push(
        match RoiBand::classify(real.roi) {
            RoiBand::Exceptional => {
                "Proceed immediately - exceptional ROI justifies fast-track implementation"
            }
            RoiBand::Strong => {
                "Strong business case - recommend moving forward with detailed planning"
            }
            RoiBand::Moderate => {
                "Moderate returns - consider phased approach or scope optimization"
            }
            RoiBand::Low => {
                "Low returns - reassess automation scope or explore alternative solutions"
            }
            RoiBand::NotRecommended => {
                "Not recommended at current assumptions - projected savings do not cover implementation costs"
            }
        }
        .to_string(),
    );

    if real.payback_months < PAYBACK_QUICK_MONTHS {
        out.push("Quick payback enables self-funding within first year".to_string());
    } else if real.payback_months > PAYBACK_LONG_MONTHS {
        out.push("Long payback period requires careful cash flow planning".to_string());
    }

    if input.confidence.automation == ConfidenceLevel::Low {
        out.push("Conduct pilot or proof-of-concept to validate automation assumptions".to_string());
    }

    out
}

/// Severity of a register entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
}

impl RiskSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            RiskSeverity::Low => "low",
            RiskSeverity::Medium => "medium",
            RiskSeverity::High => "high",
        }
    }
}

/// One implementation risk with its mitigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskEntry {
    pub risk: &'static str,
    pub mitigation: &'static str,
    pub severity: RiskSeverity,
}

/// Standing risk register. Independent of the numbers: these risks
/// apply to any process automation effort.
pub const RISK_REGISTER: [RiskEntry; 5] = [
    RiskEntry {
        risk: "Implementation complexity exceeds estimates",
        mitigation: "Start with MVP, iterate based on learnings",
        severity: RiskSeverity::Medium,
    },
    RiskEntry {
        risk: "User adoption and change management challenges",
        mitigation: "Involve end users in design, provide comprehensive training",
        severity: RiskSeverity::High,
    },
    RiskEntry {
        risk: "Technology integration issues",
        mitigation: "Conduct technical feasibility assessment upfront",
        severity: RiskSeverity::Medium,
    },
    RiskEntry {
        risk: "Actual time savings lower than projected",
        mitigation: "Use conservative estimates, monitor and adjust scope",
        severity: RiskSeverity::Medium,
    },
    RiskEntry {
        risk: "Ongoing maintenance costs higher than expected",
        mitigation: "Factor 20% buffer into operational cost estimates",
        severity: RiskSeverity::Low,
    },
];
