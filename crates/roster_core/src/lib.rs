//! Roster core: record store, filter/sort pipeline, summary aggregation and the CRUD
//! controller that ties them together. Everything here is synchronous and UI-agnostic.

pub mod config;
pub mod controller;
pub mod filter;
pub mod seed;
pub mod sort;
pub mod store;
pub mod summary;
pub mod table;

pub use config::{load_settings, Settings};
pub use controller::{
    CommandOutcome, EditContext, EditTarget, PendingDelete, RosterController, RosterView,
};
pub use filter::filter;
pub use seed::{load_store, SeedError};
pub use sort::sort;
pub use store::RecordStore;
pub use summary::{summarize, Summary};
pub use table::{RowAction, TableRow, TableView};
