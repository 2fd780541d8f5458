use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Water condition reported alongside symptoms.
///
/// The three labels offered by the report form are modelled as variants. Labels
/// match exactly; anything else, including other spellings, is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WaterCondition {
    Clean,
    Dirty,
    Unknown,
    Other(String),
}

impl WaterCondition {
    pub fn label(&self) -> &str {
        match self {
            WaterCondition::Clean => "Clean",
            WaterCondition::Dirty => "Dirty",
            WaterCondition::Unknown => "Unknown",
            WaterCondition::Other(label) => label,
        }
    }

    /// Reports with this condition raise an alert.
    pub fn is_risky(&self) -> bool {
        matches!(self, WaterCondition::Dirty)
    }
}

impl fmt::Display for WaterCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WaterCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("Water condition cannot be empty".to_string());
        }
        Ok(WaterCondition::from(s.to_string()))
    }
}

impl From<String> for WaterCondition {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Clean" => WaterCondition::Clean,
            "Dirty" => WaterCondition::Dirty,
            "Unknown" => WaterCondition::Unknown,
            _ => WaterCondition::Other(s),
        }
    }
}

impl From<WaterCondition> for String {
    fn from(w: WaterCondition) -> Self {
        w.label().to_string()
    }
}
