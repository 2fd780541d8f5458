//! Projections of the stored lists into displayable tables.
//!
//! Nothing here touches storage; every function maps a slice of records to a
//! value that can be printed as text or serialized as JSON.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::models::{Alert, Entry};

pub const NO_ENTRIES: &str = "No entries yet.";
pub const NO_ALERTS: &str = "No alerts.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryRow {
    /// 1-based, counted from the end of the view so the oldest row is 1.
    pub display_index: usize,
    /// Index of the row in the view it was projected from.
    pub position: usize,
    pub id: Uuid,
    pub name: String,
    pub symptoms: String,
    pub water: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryTable {
    Placeholder(&'static str),
    Rows(Vec<EntryRow>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertItem {
    pub position: usize,
    pub id: Uuid,
    pub title: String,
    pub level: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertList {
    Placeholder(&'static str),
    Items(Vec<AlertItem>),
}

pub fn project_entries(view: &[&Entry]) -> EntryTable {
    if view.is_empty() {
        return EntryTable::Placeholder(NO_ENTRIES);
    }

    let total = view.len();
    EntryTable::Rows(
        view.iter()
            .enumerate()
            .map(|(i, e)| EntryRow {
                display_index: total - i,
                position: i,
                id: e.id,
                name: e.name.clone(),
                symptoms: e.symptoms.clone(),
                water: e.water.to_string(),
                date: e.date.clone(),
            })
            .collect(),
    )
}

pub fn project_alerts(alerts: &[Alert]) -> AlertList {
    if alerts.is_empty() {
        return AlertList::Placeholder(NO_ALERTS);
    }

    AlertList::Items(
        alerts
            .iter()
            .enumerate()
            .map(|(i, a)| AlertItem {
                position: i,
                id: a.id,
                title: a.title.clone(),
                level: a.level.to_string(),
                time: a.time.clone(),
            })
            .collect(),
    )
}

impl EntryTable {
    /// Id of the record rendered at `position`, if such a row exists.
    pub fn id_at(&self, position: usize) -> Option<Uuid> {
        match self {
            EntryTable::Placeholder(_) => None,
            EntryTable::Rows(rows) => rows.get(position).map(|r| r.id),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            EntryTable::Placeholder(_) => 0,
            EntryTable::Rows(rows) => rows.len(),
        }
    }
}

impl AlertList {
    pub fn id_at(&self, position: usize) -> Option<Uuid> {
        match self {
            AlertList::Placeholder(_) => None,
            AlertList::Items(items) => items.get(position).map(|i| i.id),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AlertList::Placeholder(_) => 0,
            AlertList::Items(items) => items.len(),
        }
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let cut: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}

impl fmt::Display for EntryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = match self {
            EntryTable::Placeholder(message) => return write!(f, "{}", message),
            EntryTable::Rows(rows) => rows,
        };

        writeln!(
            f,
            "{:<4} {:<4} {:<20} {:<28} {:<9} {:<24} ID",
            "POS", "#", "NAME", "SYMPTOMS", "WATER", "DATE"
        )?;
        writeln!(f, "{}", "-".repeat(130))?;
        for row in rows {
            writeln!(
                f,
                "{:<4} {:<4} {:<20} {:<28} {:<9} {:<24} {}",
                row.position,
                row.display_index,
                truncate(&row.name, 20),
                truncate(&row.symptoms, 28),
                truncate(&row.water, 9),
                row.date,
                row.id
            )?;
        }
        match rows.len() {
            1 => write!(f, "\nTotal: 1 entry"),
            n => write!(f, "\nTotal: {} entries", n),
        }
    }
}

impl fmt::Display for AlertList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = match self {
            AlertList::Placeholder(message) => return write!(f, "{}", message),
            AlertList::Items(items) => items,
        };

        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{}] {}", item.position, item.title)?;
            write!(f, "    {} \u{2022} {}  ({})", item.level, item.time, item.id)?;
        }
        Ok(())
    }
}
