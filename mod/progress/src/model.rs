use serde::{Deserialize, Serialize};

use access::Discipline;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of an equipment task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    OnHold,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::OnHold => "on-hold",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "on-hold" => Some(Self::OnHold),
            _ => None,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Normal,
    High,
    Critical,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Normal
    }
}

// ---------------------------------------------------------------------------
// Area
// ---------------------------------------------------------------------------

/// A plant area grouping equipment.
///
/// `average_progress` and `equipment_count` are read-derived: recomputed
/// from the area's equipment, never written directly by callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    /// UUID primary key.
    #[serde(default)]
    pub id: String,

    pub name: String,

    /// Free-form status label (the product does not enumerate these).
    #[serde(default)]
    pub status: String,

    /// Derived: equal-weighted mean of top-level equipment progress, 0–100.
    #[serde(default)]
    pub average_progress: u8,

    /// Derived: number of equipment records in the area.
    #[serde(default)]
    pub equipment_count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Input for creating an area.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArea {
    pub name: String,
    #[serde(default)]
    pub status: String,
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

/// A piece of equipment within an area.
///
/// Parent/child linking is by `parent_tag` (tag, not id) as recorded in the
/// field; resolution goes through the equipment index. A child always
/// references an existing parent tag in the same area; a parent never
/// carries a `parent_tag`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// UUID primary key.
    #[serde(default)]
    pub id: String,

    /// Field tag (e.g. "P-101"). Unique within an area.
    pub tag: String,

    pub area_id: String,

    pub is_parent: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_tag: Option<String>,

    /// Derived: rolled-up progress, 0–100.
    #[serde(default)]
    pub average_progress: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Input for creating equipment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    pub tag: String,
    pub area_id: String,
    pub is_parent: bool,
    #[serde(default)]
    pub parent_tag: Option<String>,
}

// ---------------------------------------------------------------------------
// EquipmentTask
// ---------------------------------------------------------------------------

/// The live progress record for one discipline of one equipment.
///
/// There is exactly one task per (equipment, discipline) pair; it is the
/// state the ledger's optimistic-concurrency check runs against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentTask {
    /// UUID primary key.
    #[serde(default)]
    pub id: String,

    pub equipment_id: String,

    pub discipline: Discipline,

    pub name: String,

    /// Completion percentage, integer 0–100.
    #[serde(default)]
    pub current_progress: u8,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub estimated_hours: f64,

    #[serde(default)]
    pub actual_hours: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Input for creating a task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub equipment_id: String,
    pub discipline: Discipline,
    pub name: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub estimated_hours: f64,
}

// ---------------------------------------------------------------------------
// Progress history
// ---------------------------------------------------------------------------

/// A (progress, status) pair as seen by a caller — the last-known state it
/// read, or the new state it wants to record. Progress is i64 here so that
/// out-of-range submissions are representable and can be rejected with a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub progress: i64,
    pub status: TaskStatus,
}

/// One append-only audit record of a progress change.
///
/// Never mutated or reordered after creation. Ordering key is `updated_at`,
/// ties broken by insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressHistoryEntry {
    /// UUID primary key, server-assigned.
    pub id: String,

    pub equipment_id: String,

    pub discipline: Discipline,

    pub previous_progress: u8,
    pub new_progress: u8,

    pub previous_status: TaskStatus,
    pub new_status: TaskStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,

    /// Opaque references to externally stored photo payloads. The core
    /// passes these through without interpreting them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,

    /// Actor id that recorded the change.
    pub updated_by: String,

    /// RFC 3339, server-assigned.
    pub updated_at: String,
}

/// Input for recording a progress update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUpdate {
    pub equipment_id: String,
    pub discipline: Discipline,

    /// The state the caller last read. Must still be current or the update
    /// is rejected as a conflict.
    pub previous: ProgressState,

    /// The state to record.
    pub next: ProgressState,

    #[serde(default)]
    pub observations: Option<String>,

    #[serde(default)]
    pub photos: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_string_bridge() {
        for status in [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::OnHold,
        ] {
            assert_eq!(TaskStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::from_str("running"), None);
    }

    #[test]
    fn status_wire_form_is_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::OnHold).unwrap(),
            "\"on-hold\""
        );
    }

    #[test]
    fn equipment_json_roundtrip() {
        let eq = Equipment {
            id: "e1".into(),
            tag: "P-101A".into(),
            area_id: "a1".into(),
            is_parent: false,
            parent_tag: Some("P-101".into()),
            average_progress: 35,
            created_at: None,
        };
        let json = serde_json::to_string(&eq).unwrap();
        let back: Equipment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, eq);
    }

    #[test]
    fn record_update_accepts_out_of_range_progress() {
        // Range enforcement belongs to the ledger, not the deserializer.
        let req: RecordUpdate = serde_json::from_str(
            r#"{
                "equipmentId": "e1",
                "discipline": "electrical",
                "previous": {"progress": 40, "status": "in-progress"},
                "next": {"progress": 101, "status": "completed"}
            }"#,
        )
        .unwrap();
        assert_eq!(req.next.progress, 101);
        assert!(req.photos.is_empty());
    }
}
