use serde::Serialize;

use crate::model::{EquipmentTask, TaskStatus};

/// Rolled-up progress figures for one equipment node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rollup {
    /// 0–100, round-half-up.
    pub average_progress: u8,
    pub task_count: usize,
    pub completed_count: usize,
}

/// Round-half-up mean of `sum` over `count`, clamped to [0, 100].
/// Integer arithmetic only: floor((2·sum + count) / (2·count)).
fn round_mean(sum: u64, count: u64) -> u8 {
    if count == 0 {
        return 0;
    }
    ((sum * 2 + count) / (count * 2)).min(100) as u8
}

/// Mean of a task slice's `current_progress`; 0 for an empty slice.
pub fn task_average(tasks: &[EquipmentTask]) -> u8 {
    let sum: u64 = tasks.iter().map(|t| t.current_progress as u64).sum();
    round_mean(sum, tasks.len() as u64)
}

/// Roll up a slice of tasks directly (the childless case).
pub fn task_rollup(tasks: &[EquipmentTask]) -> Rollup {
    Rollup {
        average_progress: task_average(tasks),
        task_count: tasks.len(),
        completed_count: tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count(),
    }
}

/// Compute a parent equipment's rolled-up figures.
///
/// With no children the parent is a degenerate single-node hierarchy and the
/// average is its own tasks' mean (not 0). With children, each child counts
/// equally regardless of how many tasks it carries — a documented product
/// property, not an accident; do not switch to task-count weighting here.
/// Task and completion counts always include the parent's own tasks plus
/// every child's.
pub fn aggregate(parent_tasks: &[EquipmentTask], children: &[Rollup]) -> Rollup {
    let own = task_rollup(parent_tasks);
    if children.is_empty() {
        return own;
    }

    let sum: u64 = children.iter().map(|c| c.average_progress as u64).sum();
    Rollup {
        average_progress: round_mean(sum, children.len() as u64),
        task_count: own.task_count + children.iter().map(|c| c.task_count).sum::<usize>(),
        completed_count: own.completed_count
            + children.iter().map(|c| c.completed_count).sum::<usize>(),
    }
}

/// Equal-weighted mean across an area's top-level equipment averages.
pub fn area_average(equipment_averages: &[u8]) -> u8 {
    let sum: u64 = equipment_averages.iter().map(|&p| p as u64).sum();
    round_mean(sum, equipment_averages.len() as u64)
}
