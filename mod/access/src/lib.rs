//! Access module — role/sector authorization engine.
//!
//! # Components
//!
//! - **model** — closed enumerations (Role, Sector, Discipline, Resource,
//!   Action) plus the Actor identity snapshot
//! - **filter** — sector → allowed work disciplines
//! - **engine** — table-driven (role, resource, action) permission lookup
//!   and the user-deletion rank rule
//! - **ownership** — per-task edit gate layering role/sector rules with the
//!   sector-scoped supervisor exception
//!
//! Every function here is pure, synchronous and total: same inputs, same
//! answer, no side effects, no I/O. The actor is always an explicit argument,
//! never ambient session state.

pub mod engine;
pub mod filter;
pub mod model;
pub mod ownership;

pub use engine::{can, can_delete_user};
pub use filter::allowed_disciplines;
pub use model::{Action, Actor, Discipline, Resource, Role, Sector};
pub use ownership::can_edit_task;
