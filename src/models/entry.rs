use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::water::WaterCondition;
use super::{local_timestamp, Record};

/// A field report: who reported, what symptoms, and the state of the water.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub symptoms: String,
    pub water: WaterCondition,
    pub date: String,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        symptoms: impl Into<String>,
        water: WaterCondition,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            symptoms: symptoms.into(),
            water,
            date: local_timestamp(),
        }
    }

    /// Lowercased text searched by the entry filter.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.symptoms, self.water).to_lowercase()
    }
}

impl Record for Entry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report: {}", self.name)?;
        writeln!(f, "{}", "=".repeat(30))?;
        writeln!(f, "Symptoms: {}", self.symptoms)?;
        writeln!(f, "Water:    {}", self.water)?;
        writeln!(f, "Date:     {}", self.date)?;
        write!(f, "ID:       {}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_new() {
        let entry = Entry::new("Jane", "nausea", WaterCondition::Dirty);

        assert_eq!(entry.name, "Jane");
        assert_eq!(entry.symptoms, "nausea");
        assert_eq!(entry.water, WaterCondition::Dirty);
        assert!(!entry.date.is_empty());
    }

    #[test]
    fn test_entries_get_distinct_ids() {
        let a = Entry::new("A", "x", WaterCondition::Clean);
        let b = Entry::new("A", "x", WaterCondition::Clean);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_search_text_includes_water_label() {
        let entry = Entry::new("Jane Doe", "Headache", WaterCondition::Dirty);
        assert_eq!(entry.search_text(), "jane doe headache dirty");
    }

    #[test]
    fn test_entry_without_id_gets_one() {
        let json = r#"{"name":"Old","symptoms":"cough","water":"Clean","date":"1/2/2024, 3:04:05 PM"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.name, "Old");
        assert_eq!(entry.water, WaterCondition::Clean);
        assert!(!entry.id.is_nil());
    }

    #[test]
    fn test_entry_missing_field_is_rejected() {
        let json = r#"{"name":"Old","water":"Clean","date":"today"}"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }

    #[test]
    fn test_entry_display() {
        let entry = Entry::new("Jane", "nausea", WaterCondition::Dirty);
        let output = format!("{}", entry);
        assert!(output.contains("Report: Jane"));
        assert!(output.contains("nausea"));
        assert!(output.contains("Dirty"));
    }
}
