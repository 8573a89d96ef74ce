//! Shared primitive types used across the entire engine.

use serde::{Deserialize, Serialize};

/// A money amount in whole units of the input's display currency.
///
/// Deliberately `f64`: this is an estimation tool, and every output is
/// rounded at the formatting layer. Sub-cent drift is irrelevant here.
pub type Money = f64;

/// The three projection scenarios, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKey {
    Pess,
    Real,
    Opt,
}

impl ScenarioKey {
    pub const ALL: [ScenarioKey; 3] = [ScenarioKey::Pess, ScenarioKey::Real, ScenarioKey::Opt];

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKey::Pess => "Pessimistic",
            ScenarioKey::Real => "Realistic",
            ScenarioKey::Opt => "Optimistic",
        }
    }
}

/// One value per scenario. Used for inputs (three-point estimates) and
/// for outputs (the three projections). A fixed-shape struct rather than
/// a map: the scenario set is closed and every serialization carries all
/// three keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTriple<T> {
    pub pess: T,
    pub real: T,
    pub opt: T,
}

impl<T> ScenarioTriple<T> {
    pub fn from_fn(mut f: impl FnMut(ScenarioKey) -> T) -> Self {
        Self {
            pess: f(ScenarioKey::Pess),
            real: f(ScenarioKey::Real),
            opt: f(ScenarioKey::Opt),
        }
    }

    pub fn get(&self, key: ScenarioKey) -> &T {
        match key {
            ScenarioKey::Pess => &self.pess,
            ScenarioKey::Real => &self.real,
            ScenarioKey::Opt => &self.opt,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ScenarioTriple<U> {
        ScenarioTriple {
            pess: f(self.pess),
            real: f(self.real),
            opt: f(self.opt),
        }
    }
}

/// Whether `avg_salary` is a monthly or a yearly figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryPeriod {
    Monthly,
    Yearly,
}

impl SalaryPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            SalaryPeriod::Monthly => "monthly",
            SalaryPeriod::Yearly => "yearly",
        }
    }
}

/// How much the estimator trusts one input driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Med,
    High,
}

impl ConfidenceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Med => "medium",
            ConfidenceLevel::High => "high",
        }
    }
}

/// Per-driver confidence attached to an input record. Carried through to
/// narrative generation; never used in arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceSet {
    pub hours: ConfidenceLevel,
    pub salary: ConfidenceLevel,
    pub automation: ConfidenceLevel,
}

impl Default for ConfidenceSet {
    fn default() -> Self {
        Self {
            hours: ConfidenceLevel::Med,
            salary: ConfidenceLevel::Med,
            automation: ConfidenceLevel::Med,
        }
    }
}
