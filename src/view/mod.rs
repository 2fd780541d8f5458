mod controller;
mod filter;
mod render;

pub use controller::{Dashboard, ReportForm, Target};
pub use render::{AlertList, EntryTable};
