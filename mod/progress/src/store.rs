use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use access::Discipline;
use fieldtrack_core::{ServiceError, new_id, now_rfc3339};
use fieldtrack_sql::{Row, SQLStore, Value};

use crate::model::{
    Area, CreateArea, CreateEquipment, CreateTask, Equipment, EquipmentTask,
    ProgressHistoryEntry, TaskStatus,
};

/// Persistent storage for areas, equipment, tasks and progress history,
/// backed by SQLStore (SQLite).
///
/// Follows the data-column convention: the full record as JSON in `data`,
/// plus scalar columns for everything queries filter or join on.
pub struct ProgressStore {
    db: Arc<dyn SQLStore>,
}

impl ProgressStore {
    /// Create a new ProgressStore and initialise the schema.
    pub fn new(db: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        let statements = [
            "CREATE TABLE IF NOT EXISTS areas (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                data TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            "CREATE INDEX IF NOT EXISTS idx_areas_name ON areas(name)",

            // Parent/child linking is by tag within an area; the UNIQUE
            // constraint is what makes tag references unambiguous.
            "CREATE TABLE IF NOT EXISTS equipment (
                id TEXT PRIMARY KEY,
                area_id TEXT NOT NULL,
                tag TEXT NOT NULL,
                is_parent INTEGER NOT NULL,
                parent_tag TEXT,
                data TEXT NOT NULL,
                created_at TEXT NOT NULL,
                UNIQUE (area_id, tag),
                FOREIGN KEY (area_id) REFERENCES areas(id)
            )",
            "CREATE INDEX IF NOT EXISTS idx_equipment_area ON equipment(area_id)",
            "CREATE INDEX IF NOT EXISTS idx_equipment_parent ON equipment(parent_tag)",

            // One task per (equipment, discipline): the task is the live
            // progress record the ledger's concurrency check runs against.
            "CREATE TABLE IF NOT EXISTS tasks (
                id TEXT PRIMARY KEY,
                equipment_id TEXT NOT NULL,
                discipline TEXT NOT NULL,
                progress INTEGER NOT NULL,
                status TEXT NOT NULL,
                data TEXT NOT NULL,
                created_at TEXT NOT NULL,
                UNIQUE (equipment_id, discipline),
                FOREIGN KEY (equipment_id) REFERENCES equipment(id)
            )",
            "CREATE INDEX IF NOT EXISTS idx_tasks_equipment ON tasks(equipment_id)",

            // Append-only. rowid doubles as the tie-breaker for entries
            // sharing an updated_at timestamp.
            "CREATE TABLE IF NOT EXISTS history (
                id TEXT PRIMARY KEY,
                equipment_id TEXT NOT NULL,
                discipline TEXT NOT NULL,
                data TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            "CREATE INDEX IF NOT EXISTS idx_history_target
                 ON history(equipment_id, discipline, updated_at)",
        ];

        for stmt in &statements {
            db.exec(stmt, &[])
                .map_err(|e| ServiceError::Storage(format!("progress schema init: {e}")))?;
        }

        debug!("progress schema initialised");
        Ok(Self { db })
    }

    // -----------------------------------------------------------------------
    // Areas
    // -----------------------------------------------------------------------

    /// Create a new area.
    pub fn create_area(&self, input: CreateArea) -> Result<Area, ServiceError> {
        if input.name.trim().is_empty() {
            return Err(ServiceError::Validation("area name cannot be empty".into()));
        }

        let area = Area {
            id: new_id(),
            name: input.name,
            status: input.status,
            average_progress: 0,
            equipment_count: 0,
            created_at: Some(now_rfc3339()),
        };
        let data = to_json(&area)?;

        self.db
            .exec(
                "INSERT INTO areas (id, name, data, created_at) VALUES (?1, ?2, ?3, ?4)",
                &[
                    Value::Text(area.id.clone()),
                    Value::Text(area.name.clone()),
                    Value::Text(data),
                    Value::Text(area.created_at.clone().unwrap_or_default()),
                ],
            )
            .map_err(storage_err)?;

        Ok(area)
    }

    /// Get an area by id.
    pub fn get_area(&self, id: &str) -> Result<Area, ServiceError> {
        let row = self
            .db
            .query_one(
                "SELECT data FROM areas WHERE id = ?1",
                &[Value::Text(id.to_string())],
            )
            .map_err(storage_err)?
            .ok_or_else(|| ServiceError::NotFound(format!("area {id}")))?;
        from_data(&row)
    }

    /// List all areas, oldest first.
    pub fn list_areas(&self) -> Result<Vec<Area>, ServiceError> {
        let rows = self
            .db
            .query("SELECT data FROM areas ORDER BY created_at ASC", &[])
            .map_err(storage_err)?;
        rows.iter().map(from_data).collect()
    }

    /// Overwrite an area's derived progress figures.
    pub fn set_area_progress(
        &self,
        id: &str,
        average_progress: u8,
        equipment_count: u32,
    ) -> Result<(), ServiceError> {
        let mut area = self.get_area(id)?;
        area.average_progress = average_progress;
        area.equipment_count = equipment_count;
        let data = to_json(&area)?;

        self.db
            .exec(
                "UPDATE areas SET data = ?1 WHERE id = ?2",
                &[Value::Text(data), Value::Text(id.to_string())],
            )
            .map_err(storage_err)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Equipment
    // -----------------------------------------------------------------------

    /// Create equipment, enforcing the parent/child invariants:
    /// a parent never carries a parent tag; a child must reference an
    /// existing parent's tag in the same area; tags are unique per area.
    pub fn create_equipment(&self, input: CreateEquipment) -> Result<Equipment, ServiceError> {
        if input.tag.trim().is_empty() {
            return Err(ServiceError::Validation("equipment tag cannot be empty".into()));
        }
        // Referenced area must exist.
        self.get_area(&input.area_id)?;

        if input.is_parent && input.parent_tag.is_some() {
            return Err(ServiceError::Validation(
                "parent equipment cannot reference a parent tag".into(),
            ));
        }
        if !input.is_parent {
            let parent_tag = input.parent_tag.as_deref().ok_or_else(|| {
                ServiceError::Validation(format!(
                    "child equipment '{}' requires a parent tag",
                    input.tag
                ))
            })?;
            match self.equipment_by_tag(&input.area_id, parent_tag)? {
                Some(parent) if parent.is_parent => {}
                Some(_) => {
                    return Err(ServiceError::Validation(format!(
                        "'{parent_tag}' is not a parent equipment"
                    )));
                }
                None => {
                    return Err(ServiceError::Validation(format!(
                        "parent tag '{parent_tag}' does not exist in this area"
                    )));
                }
            }
        }

        let equipment = Equipment {
            id: new_id(),
            tag: input.tag,
            area_id: input.area_id,
            is_parent: input.is_parent,
            parent_tag: input.parent_tag,
            average_progress: 0,
            created_at: Some(now_rfc3339()),
        };
        let data = to_json(&equipment)?;

        self.db
            .exec(
                "INSERT INTO equipment (id, area_id, tag, is_parent, parent_tag, data, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                &[
                    Value::Text(equipment.id.clone()),
                    Value::Text(equipment.area_id.clone()),
                    Value::Text(equipment.tag.clone()),
                    Value::from_bool(equipment.is_parent),
                    match &equipment.parent_tag {
                        Some(t) => Value::Text(t.clone()),
                        None => Value::Null,
                    },
                    Value::Text(data),
                    Value::Text(equipment.created_at.clone().unwrap_or_default()),
                ],
            )
            .map_err(|e| insert_err(e, || format!("equipment tag '{}' already exists", equipment.tag)))?;

        Ok(equipment)
    }

    /// Get equipment by id.
    pub fn get_equipment(&self, id: &str) -> Result<Equipment, ServiceError> {
        let row = self
            .db
            .query_one(
                "SELECT data FROM equipment WHERE id = ?1",
                &[Value::Text(id.to_string())],
            )
            .map_err(storage_err)?
            .ok_or_else(|| ServiceError::NotFound(format!("equipment {id}")))?;
        from_data(&row)
    }

    /// Resolve equipment by (area, tag).
    pub fn equipment_by_tag(
        &self,
        area_id: &str,
        tag: &str,
    ) -> Result<Option<Equipment>, ServiceError> {
        let row = self
            .db
            .query_one(
                "SELECT data FROM equipment WHERE area_id = ?1 AND tag = ?2",
                &[Value::Text(area_id.to_string()), Value::Text(tag.to_string())],
            )
            .map_err(storage_err)?;
        row.as_ref().map(from_data).transpose()
    }

    /// List an area's equipment, oldest first.
    pub fn list_equipment(&self, area_id: &str) -> Result<Vec<Equipment>, ServiceError> {
        let rows = self
            .db
            .query(
                "SELECT data FROM equipment WHERE area_id = ?1 ORDER BY created_at ASC, tag ASC",
                &[Value::Text(area_id.to_string())],
            )
            .map_err(storage_err)?;
        rows.iter().map(from_data).collect()
    }

    /// Overwrite an equipment's derived average progress.
    pub fn set_equipment_progress(&self, id: &str, average_progress: u8) -> Result<(), ServiceError> {
        let mut equipment = self.get_equipment(id)?;
        equipment.average_progress = average_progress;
        let data = to_json(&equipment)?;

        self.db
            .exec(
                "UPDATE equipment SET data = ?1 WHERE id = ?2",
                &[Value::Text(data), Value::Text(id.to_string())],
            )
            .map_err(storage_err)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    /// Create a task. At most one task exists per (equipment, discipline);
    /// a duplicate is a conflict, not a second work item.
    pub fn create_task(&self, input: CreateTask) -> Result<EquipmentTask, ServiceError> {
        if input.name.trim().is_empty() {
            return Err(ServiceError::Validation("task name cannot be empty".into()));
        }
        self.get_equipment(&input.equipment_id)?;

        let task = EquipmentTask {
            id: new_id(),
            equipment_id: input.equipment_id,
            discipline: input.discipline,
            name: input.name,
            current_progress: 0,
            status: TaskStatus::Pending,
            priority: input.priority,
            estimated_hours: input.estimated_hours,
            actual_hours: 0.0,
            created_at: Some(now_rfc3339()),
        };
        let data = to_json(&task)?;

        self.db
            .exec(
                "INSERT INTO tasks (id, equipment_id, discipline, progress, status, data, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                &[
                    Value::Text(task.id.clone()),
                    Value::Text(task.equipment_id.clone()),
                    Value::Text(task.discipline.as_str().to_string()),
                    Value::Integer(task.current_progress as i64),
                    Value::Text(task.status.as_str().to_string()),
                    Value::Text(data),
                    Value::Text(task.created_at.clone().unwrap_or_default()),
                ],
            )
            .map_err(|e| {
                insert_err(e, || {
                    format!(
                        "a {} task already exists for equipment {}",
                        task.discipline, task.equipment_id
                    )
                })
            })?;

        Ok(task)
    }

    /// Get a task by id.
    pub fn get_task(&self, id: &str) -> Result<EquipmentTask, ServiceError> {
        let row = self
            .db
            .query_one(
                "SELECT data FROM tasks WHERE id = ?1",
                &[Value::Text(id.to_string())],
            )
            .map_err(storage_err)?
            .ok_or_else(|| ServiceError::NotFound(format!("task {id}")))?;
        from_data(&row)
    }

    /// The live progress task for one discipline of one equipment.
    pub fn discipline_task(
        &self,
        equipment_id: &str,
        discipline: Discipline,
    ) -> Result<EquipmentTask, ServiceError> {
        let row = self
            .db
            .query_one(
                "SELECT data FROM tasks WHERE equipment_id = ?1 AND discipline = ?2",
                &[
                    Value::Text(equipment_id.to_string()),
                    Value::Text(discipline.as_str().to_string()),
                ],
            )
            .map_err(storage_err)?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "no {discipline} task for equipment {equipment_id}"
                ))
            })?;
        from_data(&row)
    }

    /// All tasks of an equipment.
    pub fn tasks_for(&self, equipment_id: &str) -> Result<Vec<EquipmentTask>, ServiceError> {
        let rows = self
            .db
            .query(
                "SELECT data FROM tasks WHERE equipment_id = ?1 ORDER BY discipline ASC",
                &[Value::Text(equipment_id.to_string())],
            )
            .map_err(storage_err)?;
        rows.iter().map(from_data).collect()
    }

    /// Apply a progress change to a task, guarded on the previously observed
    /// state (compare-and-swap).
    ///
    /// Returns `false` when the guard misses — the task moved on since the
    /// caller read it — and writes nothing in that case.
    pub fn apply_progress(
        &self,
        task: &EquipmentTask,
        previous_progress: u8,
        previous_status: TaskStatus,
    ) -> Result<bool, ServiceError> {
        let data = to_json(task)?;

        let affected = self
            .db
            .exec(
                "UPDATE tasks SET data = ?1, progress = ?2, status = ?3 \
                 WHERE id = ?4 AND progress = ?5 AND status = ?6",
                &[
                    Value::Text(data),
                    Value::Integer(task.current_progress as i64),
                    Value::Text(task.status.as_str().to_string()),
                    Value::Text(task.id.clone()),
                    Value::Integer(previous_progress as i64),
                    Value::Text(previous_status.as_str().to_string()),
                ],
            )
            .map_err(storage_err)?;

        Ok(affected > 0)
    }

    // -----------------------------------------------------------------------
    // Progress history
    // -----------------------------------------------------------------------

    /// Append a history entry. Entries are never updated in place.
    pub fn append_history(&self, entry: &ProgressHistoryEntry) -> Result<(), ServiceError> {
        let data = to_json(entry)?;

        self.db
            .exec(
                "INSERT INTO history (id, equipment_id, discipline, data, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                &[
                    Value::Text(entry.id.clone()),
                    Value::Text(entry.equipment_id.clone()),
                    Value::Text(entry.discipline.as_str().to_string()),
                    Value::Text(data),
                    Value::Text(entry.updated_at.clone()),
                ],
            )
            .map_err(storage_err)?;
        Ok(())
    }

    /// Get a history entry by id.
    pub fn get_history_entry(&self, id: &str) -> Result<ProgressHistoryEntry, ServiceError> {
        let row = self
            .db
            .query_one(
                "SELECT data FROM history WHERE id = ?1",
                &[Value::Text(id.to_string())],
            )
            .map_err(storage_err)?
            .ok_or_else(|| ServiceError::NotFound(format!("history entry {id}")))?;
        from_data(&row)
    }

    /// Delete a history entry. Never touches the tasks table.
    pub fn delete_history_entry(&self, id: &str) -> Result<(), ServiceError> {
        let affected = self
            .db
            .exec(
                "DELETE FROM history WHERE id = ?1",
                &[Value::Text(id.to_string())],
            )
            .map_err(storage_err)?;
        if affected == 0 {
            return Err(ServiceError::NotFound(format!("history entry {id}")));
        }
        Ok(())
    }

    /// Chronological history page for (equipment, discipline), ties broken
    /// by insertion order.
    pub fn history(
        &self,
        equipment_id: &str,
        discipline: Discipline,
        limit: usize,
        offset: usize,
    ) -> Result<(Vec<ProgressHistoryEntry>, usize), ServiceError> {
        let target = [
            Value::Text(equipment_id.to_string()),
            Value::Text(discipline.as_str().to_string()),
        ];

        let count_row = self
            .db
            .query_one(
                "SELECT COUNT(*) as cnt FROM history WHERE equipment_id = ?1 AND discipline = ?2",
                &target,
            )
            .map_err(storage_err)?;
        let total = count_row.and_then(|r| r.get_i64("cnt")).unwrap_or(0) as usize;

        let rows = self
            .db
            .query(
                "SELECT data FROM history WHERE equipment_id = ?1 AND discipline = ?2 \
                 ORDER BY updated_at ASC, rowid ASC LIMIT ?3 OFFSET ?4",
                &[
                    target[0].clone(),
                    target[1].clone(),
                    Value::Integer(limit as i64),
                    Value::Integer(offset as i64),
                ],
            )
            .map_err(storage_err)?;

        let items = rows.iter().map(from_data).collect::<Result<Vec<_>, _>>()?;
        Ok((items, total))
    }
}

// ---------------------------------------------------------------------------
// Row / JSON helpers
// ---------------------------------------------------------------------------

fn to_json<T: serde::Serialize>(record: &T) -> Result<String, ServiceError> {
    serde_json::to_string(record).map_err(|e| ServiceError::Internal(e.to_string()))
}

/// Deserialize a record from a row's `data` JSON column.
fn from_data<T: DeserializeOwned>(row: &Row) -> Result<T, ServiceError> {
    let json = row
        .get_str("data")
        .ok_or_else(|| ServiceError::Storage("missing data column".into()))?;
    serde_json::from_str(json).map_err(|e| ServiceError::Storage(format!("bad record json: {e}")))
}

fn storage_err(e: fieldtrack_sql::SQLError) -> ServiceError {
    ServiceError::Storage(e.to_string())
}

/// Map an insert failure, turning UNIQUE violations into conflicts.
fn insert_err(e: fieldtrack_sql::SQLError, conflict_msg: impl Fn() -> String) -> ServiceError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint") {
        ServiceError::Conflict(conflict_msg())
    } else {
        ServiceError::Storage(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldtrack_sql::SqliteStore;

    fn test_store() -> ProgressStore {
        let db = Arc::new(SqliteStore::open_in_memory().unwrap());
        ProgressStore::new(db).unwrap()
    }

    fn area(store: &ProgressStore) -> Area {
        store
            .create_area(CreateArea {
                name: "Substation 1".into(),
                status: "active".into(),
            })
            .unwrap()
    }

    fn parent(store: &ProgressStore, area_id: &str, tag: &str) -> Equipment {
        store
            .create_equipment(CreateEquipment {
                tag: tag.into(),
                area_id: area_id.into(),
                is_parent: true,
                parent_tag: None,
            })
            .unwrap()
    }

    #[test]
    fn create_and_get_area() {
        let store = test_store();
        let a = area(&store);
        let got = store.get_area(&a.id).unwrap();
        assert_eq!(got.name, "Substation 1");
        assert_eq!(got.average_progress, 0);

        assert!(matches!(
            store.get_area("missing"),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn equipment_invariants() {
        let store = test_store();
        let a = area(&store);

        // Parent with a parent tag is rejected.
        let err = store
            .create_equipment(CreateEquipment {
                tag: "P-1".into(),
                area_id: a.id.clone(),
                is_parent: true,
                parent_tag: Some("X".into()),
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        // Child without a parent tag is rejected.
        let err = store
            .create_equipment(CreateEquipment {
                tag: "P-1A".into(),
                area_id: a.id.clone(),
                is_parent: false,
                parent_tag: None,
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        // Child referencing an unknown parent tag is rejected.
        let err = store
            .create_equipment(CreateEquipment {
                tag: "P-1A".into(),
                area_id: a.id.clone(),
                is_parent: false,
                parent_tag: Some("P-9".into()),
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        // Valid parent + child pair.
        let p = parent(&store, &a.id, "P-1");
        let c = store
            .create_equipment(CreateEquipment {
                tag: "P-1A".into(),
                area_id: a.id.clone(),
                is_parent: false,
                parent_tag: Some("P-1".into()),
            })
            .unwrap();
        assert_eq!(c.parent_tag.as_deref(), Some("P-1"));

        // A child cannot serve as a parent tag target.
        let err = store
            .create_equipment(CreateEquipment {
                tag: "P-1A1".into(),
                area_id: a.id.clone(),
                is_parent: false,
                parent_tag: Some("P-1A".into()),
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        // Duplicate tag in the same area conflicts.
        let err = store
            .create_equipment(CreateEquipment {
                tag: "P-1".into(),
                area_id: a.id.clone(),
                is_parent: true,
                parent_tag: None,
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        let _ = p;
    }

    #[test]
    fn one_task_per_equipment_discipline() {
        let store = test_store();
        let a = area(&store);
        let p = parent(&store, &a.id, "P-1");

        let t = store
            .create_task(CreateTask {
                equipment_id: p.id.clone(),
                discipline: Discipline::Electrical,
                name: "cabling".into(),
                priority: Default::default(),
                estimated_hours: 16.0,
            })
            .unwrap();
        assert_eq!(t.current_progress, 0);
        assert_eq!(t.status, TaskStatus::Pending);

        let err = store
            .create_task(CreateTask {
                equipment_id: p.id.clone(),
                discipline: Discipline::Electrical,
                name: "more cabling".into(),
                priority: Default::default(),
                estimated_hours: 8.0,
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        // A different discipline is fine.
        store
            .create_task(CreateTask {
                equipment_id: p.id.clone(),
                discipline: Discipline::Mechanical,
                name: "alignment".into(),
                priority: Default::default(),
                estimated_hours: 8.0,
            })
            .unwrap();
        assert_eq!(store.tasks_for(&p.id).unwrap().len(), 2);

        let found = store
            .discipline_task(&p.id, Discipline::Electrical)
            .unwrap();
        assert_eq!(found.id, t.id);
        assert!(matches!(
            store.discipline_task(&p.id, Discipline::Civil),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn guarded_progress_update() {
        let store = test_store();
        let a = area(&store);
        let p = parent(&store, &a.id, "P-1");
        let mut task = store
            .create_task(CreateTask {
                equipment_id: p.id.clone(),
                discipline: Discipline::Electrical,
                name: "cabling".into(),
                priority: Default::default(),
                estimated_hours: 0.0,
            })
            .unwrap();

        task.current_progress = 40;
        task.status = TaskStatus::InProgress;
        let applied = store
            .apply_progress(&task, 0, TaskStatus::Pending)
            .unwrap();
        assert!(applied);

        // Stale guard (previous state already consumed): nothing written.
        let mut stale = task.clone();
        stale.current_progress = 80;
        let applied = store
            .apply_progress(&stale, 0, TaskStatus::Pending)
            .unwrap();
        assert!(!applied);

        let live = store.get_task(&task.id).unwrap();
        assert_eq!(live.current_progress, 40);
        assert_eq!(live.status, TaskStatus::InProgress);
    }

    #[test]
    fn history_append_order_and_delete() {
        let store = test_store();
        let entry = |id: &str, at: &str| ProgressHistoryEntry {
            id: id.into(),
            equipment_id: "e1".into(),
            discipline: Discipline::Electrical,
            previous_progress: 0,
            new_progress: 10,
            previous_status: TaskStatus::Pending,
            new_status: TaskStatus::InProgress,
            observations: None,
            photos: Vec::new(),
            updated_by: "u1".into(),
            updated_at: at.into(),
        };

        // Two entries share a timestamp — insertion order must win.
        store.append_history(&entry("h1", "2026-08-01T10:00:00+00:00")).unwrap();
        store.append_history(&entry("h2", "2026-08-01T11:00:00+00:00")).unwrap();
        store.append_history(&entry("h3", "2026-08-01T11:00:00+00:00")).unwrap();

        let (items, total) = store
            .history("e1", Discipline::Electrical, 50, 0)
            .unwrap();
        assert_eq!(total, 3);
        let ids: Vec<&str> = items.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["h1", "h2", "h3"]);

        store.delete_history_entry("h2").unwrap();
        assert!(matches!(
            store.delete_history_entry("h2"),
            Err(ServiceError::NotFound(_))
        ));
        let (_, total) = store
            .history("e1", Discipline::Electrical, 50, 0)
            .unwrap();
        assert_eq!(total, 2);
    }

    #[test]
    fn derived_progress_writes() {
        let store = test_store();
        let a = area(&store);
        let p = parent(&store, &a.id, "P-1");

        store.set_equipment_progress(&p.id, 55).unwrap();
        assert_eq!(store.get_equipment(&p.id).unwrap().average_progress, 55);

        store.set_area_progress(&a.id, 55, 1).unwrap();
        let got = store.get_area(&a.id).unwrap();
        assert_eq!(got.average_progress, 55);
        assert_eq!(got.equipment_count, 1);
    }
}
