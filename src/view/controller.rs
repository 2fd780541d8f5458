//! Report, delete, dismiss and search actions over the two stores.
//!
//! Every action mutates storage first and then re-projects the affected list
//! from what is stored, so the returned view always reflects persisted state.

use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use super::filter::filter_entries;
use super::render::{project_alerts, project_entries, AlertList, EntryTable};
use crate::models::{Alert, Entry, WaterCondition};
use crate::storage::{KeyValueStorage, ListStore, StorageError};

pub const SAVED: &str = "Saved!";
pub const CLEAR_PROMPT: &str = "Clear all saved entries?";

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Please fill all fields.")]
    MissingFields,
    #[error("No {list} at position {position} ({shown} shown)")]
    NoSuchRow {
        list: &'static str,
        position: usize,
        shown: usize,
    },
    #[error("No {list} with id {id}")]
    NotFound { list: &'static str, id: Uuid },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Raw values from the report form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportForm {
    pub name: String,
    pub symptoms: String,
    pub water: String,
}

impl ReportForm {
    pub fn new(
        name: impl Into<String>,
        symptoms: impl Into<String>,
        water: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symptoms: symptoms.into(),
            water: water.into(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn to_entry(&self) -> Result<Entry, DashboardError> {
        let name = self.name.trim();
        let symptoms = self.symptoms.trim();
        if name.is_empty() || symptoms.is_empty() {
            return Err(DashboardError::MissingFields);
        }
        let water: WaterCondition = self
            .water
            .parse()
            .map_err(|_| DashboardError::MissingFields)?;
        Ok(Entry::new(name, symptoms, water))
    }
}

/// Row selector for delete and dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Index in the list as currently shown.
    Position(usize),
    Id(Uuid),
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(Target::Id(id));
        }
        s.parse::<usize>().map(Target::Position).map_err(|_| {
            format!(
                "Invalid target '{}'. Use a row position or a record id.",
                s
            )
        })
    }
}

/// Reacts to a newly stored report.
pub trait SubmissionObserver {
    /// Returns the alert raised for `entry`, if any.
    fn on_submitted(&self, entry: &Entry) -> Result<Option<Alert>, StorageError>;
}

/// Raises an info alert whenever a report says the water is dirty.
pub struct DirtyWaterAlerts<'a, S> {
    alerts: &'a ListStore<Alert, S>,
}

impl<'a, S> DirtyWaterAlerts<'a, S> {
    pub fn new(alerts: &'a ListStore<Alert, S>) -> Self {
        Self { alerts }
    }
}

impl<S: KeyValueStorage> SubmissionObserver for DirtyWaterAlerts<'_, S> {
    fn on_submitted(&self, entry: &Entry) -> Result<Option<Alert>, StorageError> {
        if !entry.water.is_risky() {
            return Ok(None);
        }
        let alert = Alert::dirty_water_report(&entry.name);
        self.alerts.prepend(alert.clone())?;
        tracing::info!("Raised alert for dirty water reported by {}", entry.name);
        Ok(Some(alert))
    }
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of a successful report submission.
#[derive(Debug, Serialize)]
pub struct Submission {
    pub entry: Entry,
    pub status: &'static str,
    pub table: EntryTable,
    pub alerts_raised: Vec<Alert>,
    /// Re-rendered alert list, present only when an alert was raised.
    pub alerts: Option<AlertList>,
}

pub struct Dashboard<'a, S> {
    entries: &'a ListStore<Entry, S>,
    alerts: &'a ListStore<Alert, S>,
    observers: Vec<Box<dyn SubmissionObserver + 'a>>,
    query: String,
}

impl<'a, S: KeyValueStorage> Dashboard<'a, S> {
    /// A dashboard with no submission observers.
    pub fn new(entries: &'a ListStore<Entry, S>, alerts: &'a ListStore<Alert, S>) -> Self {
        Self {
            entries,
            alerts,
            observers: Vec::new(),
            query: String::new(),
        }
    }

    /// A dashboard that raises alerts for dirty-water reports.
    pub fn with_default_observers(
        entries: &'a ListStore<Entry, S>,
        alerts: &'a ListStore<Alert, S>,
    ) -> Self
    where
        S: 'a,
    {
        let mut dashboard = Self::new(entries, alerts);
        dashboard.subscribe(Box::new(DirtyWaterAlerts::new(alerts)));
        dashboard
    }

    pub fn subscribe(&mut self, observer: Box<dyn SubmissionObserver + 'a>) {
        self.observers.push(observer);
    }

    /// Sets the search query and re-renders the entry table from storage.
    pub fn search(&mut self, query: impl Into<String>) -> EntryTable {
        self.query = query.into();
        self.entry_table()
    }

    /// Entry table for the current query.
    pub fn entry_table(&self) -> EntryTable {
        let entries = self.entries.load();
        project_entries(&filter_entries(&entries, &self.query))
    }

    pub fn alert_list(&self) -> AlertList {
        project_alerts(&self.alerts.load())
    }

    /// Validates and stores a report, then notifies observers.
    ///
    /// On success the form is reset. A form with a blank field is left as is
    /// and nothing is stored.
    pub fn submit_report(&self, form: &mut ReportForm) -> Result<Submission, DashboardError> {
        let entry = form.to_entry()?;
        self.entries.prepend(entry.clone())?;
        form.reset();
        tracing::info!("Stored report from {} ({})", entry.name, entry.water);

        let mut alerts_raised = Vec::new();
        for observer in &self.observers {
            if let Some(alert) = observer.on_submitted(&entry)? {
                alerts_raised.push(alert);
            }
        }

        let alerts = if alerts_raised.is_empty() {
            None
        } else {
            Some(self.alert_list())
        };

        Ok(Submission {
            entry,
            status: SAVED,
            table: self.entry_table(),
            alerts_raised,
            alerts,
        })
    }

    /// Deletes an entry. Positions refer to the table for the current query.
    pub fn delete_entry(&self, target: Target) -> Result<(Entry, EntryTable), DashboardError> {
        let id = match target {
            Target::Id(id) => id,
            Target::Position(position) => {
                let table = self.entry_table();
                table.id_at(position).ok_or(DashboardError::NoSuchRow {
                    list: "entry",
                    position,
                    shown: table.len(),
                })?
            }
        };

        let removed = self
            .entries
            .remove_by_id(id)?
            .ok_or(DashboardError::NotFound { list: "entry", id })?;
        tracing::debug!("Deleted entry {}", id);
        Ok((removed, self.entry_table()))
    }

    pub fn dismiss_alert(&self, target: Target) -> Result<(Alert, AlertList), DashboardError> {
        let id = match target {
            Target::Id(id) => id,
            Target::Position(position) => {
                let list = self.alert_list();
                list.id_at(position).ok_or(DashboardError::NoSuchRow {
                    list: "alert",
                    position,
                    shown: list.len(),
                })?
            }
        };

        let removed = self
            .alerts
            .remove_by_id(id)?
            .ok_or(DashboardError::NotFound { list: "alert", id })?;
        tracing::debug!("Dismissed alert {}", id);
        Ok((removed, self.alert_list()))
    }

    /// Clears every entry once `confirm` agrees. Alerts are kept.
    ///
    /// Returns `None` when the user declines.
    pub fn clear_entries(
        &mut self,
        confirm: &dyn Confirm,
    ) -> Result<Option<EntryTable>, DashboardError> {
        if !confirm.confirm(CLEAR_PROMPT) {
            return Ok(None);
        }
        self.entries.clear()?;
        tracing::info!("Cleared all entries");
        Ok(Some(self.search("")))
    }

    pub fn inject_demo_alert(&self) -> Result<AlertList, DashboardError> {
        self.alerts.prepend(Alert::demo())?;
        Ok(self.alert_list())
    }
}
