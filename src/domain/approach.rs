//! Therapy approach used to frame assistant replies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Therapeutic style passed to the response generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TherapyApproach {
    /// Cognitive Behavioral Therapy
    Cbt,
    /// Dialectical Behavior Therapy
    Dbt,
    /// Acceptance and Commitment Therapy
    Act,
    #[default]
    Supportive,
}

impl TherapyApproach {
    /// Full name used inside prompts
    pub fn display_name(&self) -> &'static str {
        match self {
            TherapyApproach::Cbt => "Cognitive Behavioral Therapy (CBT)",
            TherapyApproach::Dbt => "Dialectical Behavior Therapy (DBT)",
            TherapyApproach::Act => "Acceptance and Commitment Therapy (ACT)",
            TherapyApproach::Supportive => "General Supportive",
        }
    }

    /// A short exercise in the spirit of this approach
    pub fn technique(&self) -> &'static str {
        match self {
            TherapyApproach::Cbt => {
                "Try writing down the thought behind this feeling and ask what evidence supports it."
            }
            TherapyApproach::Dbt => {
                "Try a short distress-tolerance pause: name five things you can see around you."
            }
            TherapyApproach::Act => {
                "Try noticing the feeling without fighting it, and name one value you want to act on today."
            }
            TherapyApproach::Supportive => {
                "Be gentle with yourself; it is okay to take things one step at a time."
            }
        }
    }
}

impl fmt::Display for TherapyApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            TherapyApproach::Cbt => "cbt",
            TherapyApproach::Dbt => "dbt",
            TherapyApproach::Act => "act",
            TherapyApproach::Supportive => "supportive",
        };
        f.write_str(key)
    }
}

impl FromStr for TherapyApproach {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cbt" => Ok(TherapyApproach::Cbt),
            "dbt" => Ok(TherapyApproach::Dbt),
            "act" => Ok(TherapyApproach::Act),
            "supportive" | "general" => Ok(TherapyApproach::Supportive),
            _ => Err(format!(
                "Unknown therapy approach: '{}'. Valid approaches are: cbt, dbt, act, supportive",
                s
            )),
        }
    }
}
