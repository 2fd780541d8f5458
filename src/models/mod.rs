mod alert;
mod entry;
mod water;

pub use alert::Alert;
#[cfg(test)]
pub use alert::AlertLevel;
pub use entry::Entry;
pub use water::WaterCondition;

use chrono::Local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

/// A persisted list element. Records never change after creation.
pub trait Record: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> Uuid;
}

/// Current local time in the `M/D/YYYY, H:MM:SS AM` style shown to users.
pub fn local_timestamp() -> String {
    Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
