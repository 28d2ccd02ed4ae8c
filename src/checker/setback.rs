//! Setback rule evaluation.

use serde::Serialize;

use crate::config::RequiredSetbacks;
use crate::plan::SetbackDistances;

/// The four setback categories, in their fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetbackSide {
    Front,
    Rear,
    Side1,
    Side2,
}

impl SetbackSide {
    pub const ALL: [Self; 4] = [Self::Front, Self::Rear, Self::Side1, Self::Side2];

    /// Human-facing label used in every message mentioning this side.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Rear => "Rear",
            Self::Side1 => "Side 1",
            Self::Side2 => "Side 2",
        }
    }
}

/// Outcome of a single setback check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SetbackStatus {
    Compliant,
    Violation,
}

/// Required-vs-provided comparison for one side, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SetbackCheck {
    pub provided: f64,
    pub required: f64,
    pub status: SetbackStatus,
}

impl SetbackCheck {
    /// Compare a provided distance against the requirement. Compliant
    /// means provided is at least the requirement; there is no tolerance.
    #[must_use]
    pub fn evaluate(provided: f64, required: f64) -> Self {
        let status = if provided >= required {
            SetbackStatus::Compliant
        } else {
            SetbackStatus::Violation
        };
        Self {
            provided,
            required,
            status,
        }
    }

    #[must_use]
    pub const fn is_compliant(&self) -> bool {
        matches!(self.status, SetbackStatus::Compliant)
    }
}

/// All four setback checks for a plan. Exactly one of the violation
/// message and the compliant message exists per side, because both derive
/// from the same status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SetbackCompliance {
    pub front: SetbackCheck,
    pub rear: SetbackCheck,
    pub side1: SetbackCheck,
    pub side2: SetbackCheck,
}

impl SetbackCompliance {
    #[must_use]
    pub fn evaluate(provided: &SetbackDistances, required: &RequiredSetbacks) -> Self {
        Self {
            front: SetbackCheck::evaluate(provided.front, required.front),
            rear: SetbackCheck::evaluate(provided.rear, required.rear),
            side1: SetbackCheck::evaluate(provided.side1, required.side1),
            side2: SetbackCheck::evaluate(provided.side2, required.side2),
        }
    }

    /// Checks paired with their side, in fixed front/rear/side1/side2 order.
    #[must_use]
    pub const fn checks(&self) -> [(SetbackSide, SetbackCheck); 4] {
        [
            (SetbackSide::Front, self.front),
            (SetbackSide::Rear, self.rear),
            (SetbackSide::Side1, self.side1),
            (SetbackSide::Side2, self.side2),
        ]
    }

    /// Violation messages for every non-compliant side, in fixed order.
    #[must_use]
    pub fn violation_messages(&self) -> Vec<String> {
        self.checks()
            .iter()
            .filter(|(_, check)| !check.is_compliant())
            .map(|(side, check)| {
                format!(
                    "{} setback insufficient: {}m provided, {}m required",
                    side.label(),
                    check.provided,
                    check.required
                )
            })
            .collect()
    }

    /// Compliant-item messages for every compliant side, in fixed order.
    #[must_use]
    pub fn compliant_messages(&self) -> Vec<String> {
        self.checks()
            .iter()
            .filter(|(_, check)| check.is_compliant())
            .map(|(side, _)| format!("{} setback compliant", side.label()))
            .collect()
    }

    /// True when no side is in violation.
    #[must_use]
    pub fn all_compliant(&self) -> bool {
        self.checks().iter().all(|(_, check)| check.is_compliant())
    }
}

#[cfg(test)]
#[path = "setback_tests.rs"]
mod tests;
