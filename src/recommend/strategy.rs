//! Application strategies and their utility weights.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a student trades admission chances against prestige
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    RiskAverse,
    #[default]
    Balanced,
    PrestigeFocused,
}

/// Weights applied to admission probability and prestige score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub admission_prob: f64,
    pub prestige: f64,
}

impl Strategy {
    pub fn weights(self) -> Weights {
        let (admission_prob, prestige) = match self {
            Strategy::RiskAverse => (0.9, 0.1),
            Strategy::Balanced => (0.7, 0.3),
            Strategy::PrestigeFocused => (0.3, 0.7),
        };
        Weights {
            admission_prob,
            prestige,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::RiskAverse => "risk-averse",
            Strategy::Balanced => "balanced",
            Strategy::PrestigeFocused => "prestige-focused",
        };
        f.write_str(name)
    }
}
