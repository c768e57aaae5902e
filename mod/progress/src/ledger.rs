use std::sync::Arc;

use tracing::{debug, warn};

use access::{Actor, Discipline, Role, can_edit_task};
use fieldtrack_core::{ListParams, ListResult, ServiceError, new_id, now_rfc3339};

use crate::aggregate::{Rollup, aggregate, area_average, task_rollup};
use crate::index::EquipmentIndex;
use crate::model::{ProgressHistoryEntry, RecordUpdate};
use crate::store::ProgressStore;

/// The progress history ledger.
///
/// Validates and appends progress-update records, producing the immutable
/// audit trail per (equipment, discipline), and refreshes the derived
/// ancestor averages after every accepted update.
///
/// Concurrency: the only read-check-then-write sequence in the core lives
/// here, and it is settled by the store's guarded update — a stale writer
/// gets a conflict and must re-fetch and retry itself. The ledger never
/// retries on the caller's behalf.
pub struct ProgressLedger {
    store: Arc<ProgressStore>,
}

impl ProgressLedger {
    pub fn new(store: Arc<ProgressStore>) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &Arc<ProgressStore> {
        &self.store
    }

    /// Validate and record one progress update.
    ///
    /// All checks pass or nothing is written:
    /// - next progress must be an integer in [0, 100];
    /// - the actor must hold task-edit rights for the discipline;
    /// - the (equipment, discipline) task must exist;
    /// - `previous` must still be the task's live state.
    ///
    /// On success the live task carries `next`, the returned entry is
    /// appended to the trail, and equipment/parent/area averages are
    /// refreshed before returning.
    pub fn record_update(
        &self,
        req: RecordUpdate,
        actor: &Actor,
    ) -> Result<ProgressHistoryEntry, ServiceError> {
        if !(0..=100).contains(&req.next.progress) {
            return Err(ServiceError::Validation(format!(
                "progress must be between 0 and 100, got {}",
                req.next.progress
            )));
        }

        if !can_edit_task(actor, req.discipline) {
            return Err(ServiceError::PermissionDenied(format!(
                "{} ({}, sector {}) may not update {} tasks",
                actor.id, actor.role, actor.sector, req.discipline
            )));
        }

        let task = self
            .store
            .discipline_task(&req.equipment_id, req.discipline)?;

        if req.previous.progress != task.current_progress as i64
            || req.previous.status != task.status
        {
            return Err(ServiceError::Conflict(format!(
                "progress for {}/{} changed since it was read (now {} {})",
                req.equipment_id, req.discipline, task.current_progress, task.status
            )));
        }

        let mut updated = task.clone();
        updated.current_progress = req.next.progress as u8;
        updated.status = req.next.status;

        // Guarded write: a concurrent update between our read and this
        // statement misses the guard and surfaces as a conflict.
        let applied = self
            .store
            .apply_progress(&updated, task.current_progress, task.status)?;
        if !applied {
            warn!(
                "lost progress race on {}/{}",
                req.equipment_id, req.discipline
            );
            return Err(ServiceError::Conflict(format!(
                "progress for {}/{} changed since it was read",
                req.equipment_id, req.discipline
            )));
        }

        let entry = ProgressHistoryEntry {
            id: new_id(),
            equipment_id: req.equipment_id.clone(),
            discipline: req.discipline,
            previous_progress: task.current_progress,
            new_progress: updated.current_progress,
            previous_status: task.status,
            new_status: updated.status,
            observations: req.observations,
            photos: req.photos,
            updated_by: actor.id.clone(),
            updated_at: now_rfc3339(),
        };
        self.store.append_history(&entry)?;

        self.refresh_aggregates(&req.equipment_id)?;

        debug!(
            "recorded {} {} -> {} on {}/{}",
            entry.updated_by,
            entry.previous_progress,
            entry.new_progress,
            entry.equipment_id,
            entry.discipline
        );
        Ok(entry)
    }

    /// Delete a history entry. Admin and supervisor only.
    ///
    /// History is a log, not the source of truth for current state: removing
    /// an entry deliberately leaves the live task's progress untouched.
    pub fn delete_entry(&self, entry_id: &str, actor: &Actor) -> Result<(), ServiceError> {
        if !matches!(actor.role, Role::Admin | Role::Supervisor) {
            return Err(ServiceError::PermissionDenied(format!(
                "role {} may not delete history entries",
                actor.role
            )));
        }
        self.store.delete_history_entry(entry_id)
    }

    /// Chronological history page for one (equipment, discipline).
    pub fn history(
        &self,
        equipment_id: &str,
        discipline: Discipline,
        params: &ListParams,
    ) -> Result<ListResult<ProgressHistoryEntry>, ServiceError> {
        let (items, total) =
            self.store
                .history(equipment_id, discipline, params.limit, params.offset)?;
        Ok(ListResult { items, total })
    }

    /// Current rolled-up figures for one equipment, computed from live state.
    pub fn equipment_rollup(&self, equipment_id: &str) -> Result<Rollup, ServiceError> {
        let equipment = self.store.get_equipment(equipment_id)?;
        let index = EquipmentIndex::build(self.store.list_equipment(&equipment.area_id)?);
        self.rollup_of(&index, equipment_id)
    }

    /// Recompute derived averages for the updated equipment, its parent
    /// (when it is a child) and the enclosing area.
    fn refresh_aggregates(&self, equipment_id: &str) -> Result<(), ServiceError> {
        let equipment = self.store.get_equipment(equipment_id)?;
        let index = EquipmentIndex::build(self.store.list_equipment(&equipment.area_id)?);

        let rollup = self.rollup_of(&index, equipment_id)?;
        self.store
            .set_equipment_progress(equipment_id, rollup.average_progress)?;

        if let Some(parent) = index.parent_of(equipment_id) {
            let parent_rollup = self.rollup_of(&index, &parent.id)?;
            self.store
                .set_equipment_progress(&parent.id, parent_rollup.average_progress)?;
        }

        // Area mean runs over freshly written top-level averages.
        let all = self.store.list_equipment(&equipment.area_id)?;
        let tops: Vec<u8> = all
            .iter()
            .filter(|e| e.is_parent)
            .map(|e| e.average_progress)
            .collect();
        self.store
            .set_area_progress(&equipment.area_id, area_average(&tops), all.len() as u32)?;

        Ok(())
    }

    /// Roll up one node: own tasks plus the rollups of its direct children.
    fn rollup_of(&self, index: &EquipmentIndex, equipment_id: &str) -> Result<Rollup, ServiceError> {
        let tasks = self.store.tasks_for(equipment_id)?;
        let children = index
            .children_of(equipment_id)
            .iter()
            .map(|child| Ok(task_rollup(&self.store.tasks_for(&child.id)?)))
            .collect::<Result<Vec<_>, ServiceError>>()?;
        Ok(aggregate(&tasks, &children))
    }
}
