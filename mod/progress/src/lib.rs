//! Progress module — hierarchical progress aggregation + history ledger.
//!
//! # Resources
//!
//! - **Area** — plant area grouping equipment; derived progress + count
//! - **Equipment** — optionally parent/child (linked by field tag), derived
//!   rolled-up progress
//! - **EquipmentTask** — the live progress record per (equipment, discipline)
//! - **ProgressHistoryEntry** — append-only audit record of every change
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use fieldtrack_sql::SqliteStore;
//! use progress::{ProgressLedger, ProgressStore};
//!
//! let db = Arc::new(SqliteStore::open(&config.resolve_sqlite_path())?);
//! let store = Arc::new(ProgressStore::new(db)?);
//! let ledger = ProgressLedger::new(store);
//! let entry = ledger.record_update(req, &actor)?;
//! ```

pub mod aggregate;
pub mod index;
pub mod ledger;
pub mod model;
pub mod store;

pub use aggregate::{Rollup, aggregate, area_average, task_average, task_rollup};
pub use index::EquipmentIndex;
pub use ledger::ProgressLedger;
pub use model::{
    Area, CreateArea, CreateEquipment, CreateTask, Equipment, EquipmentTask, Priority,
    ProgressHistoryEntry, ProgressState, RecordUpdate, TaskStatus,
};
pub use store::ProgressStore;
