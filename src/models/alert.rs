use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{local_timestamp, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
    Other(String),
}

impl AlertLevel {
    pub fn label(&self) -> &str {
        match self {
            AlertLevel::Info => "Info",
            AlertLevel::Warning => "Warning",
            AlertLevel::Critical => "Critical",
            AlertLevel::Other(label) => label,
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for AlertLevel {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Info" => AlertLevel::Info,
            "Warning" => AlertLevel::Warning,
            "Critical" => AlertLevel::Critical,
            _ => AlertLevel::Other(s),
        }
    }
}

impl From<AlertLevel> for String {
    fn from(level: AlertLevel) -> Self {
        level.label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub level: AlertLevel,
    pub time: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, level: AlertLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            level,
            time: local_timestamp(),
        }
    }

    /// Alert raised when someone reports dirty water.
    pub fn dirty_water_report(reporter: &str) -> Self {
        Self::new(
            format!("Manual Report: Dirty water ({})", reporter),
            AlertLevel::Info,
        )
    }

    /// Fixed alert used to seed the alert list with demo data.
    pub fn demo() -> Self {
        Self::new("High Turbidity Detected", AlertLevel::Warning)
    }
}

impl Record for Alert {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirty_water_alert() {
        let alert = Alert::dirty_water_report("Jane");
        assert_eq!(alert.title, "Manual Report: Dirty water (Jane)");
        assert_eq!(alert.level, AlertLevel::Info);
        assert!(!alert.time.is_empty());
    }

    #[test]
    fn test_demo_alert() {
        let alert = Alert::demo();
        assert_eq!(alert.title, "High Turbidity Detected");
        assert_eq!(alert.level, AlertLevel::Warning);
    }

    #[test]
    fn test_alert_level_json() {
        let json = serde_json::to_string(&AlertLevel::Warning).unwrap();
        assert_eq!(json, "\"Warning\"");

        let parsed: AlertLevel = serde_json::from_str("\"Info\"").unwrap();
        assert_eq!(parsed, AlertLevel::Info);

        // Other spellings are stored back exactly as read.
        let parsed: AlertLevel = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(parsed, AlertLevel::Other("info".into()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"info\"");

        let parsed: AlertLevel = serde_json::from_str("\"Severe\"").unwrap();
        assert_eq!(parsed, AlertLevel::Other("Severe".into()));
    }

    #[test]
    fn test_legacy_alert_loads() {
        let json = r#"{"title":"Old","level":"Warning","time":"1/1/2024, 9:00:00 AM"}"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.title, "Old");
        assert_eq!(alert.level, AlertLevel::Warning);
    }
}
