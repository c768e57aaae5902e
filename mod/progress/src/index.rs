use std::collections::HashMap;

use crate::model::Equipment;

/// In-memory equipment arena with secondary indexes.
///
/// Equipment records reference their parent by field tag, not id. Rather
/// than re-scanning tag strings at every lookup, the index is built once
/// from a store snapshot and resolves id, (area, tag) and parent/child
/// relationships in O(1).
///
/// The data model supports two levels (parent/child); the index stores
/// plain adjacency and does not special-case deeper nesting.
pub struct EquipmentIndex {
    arena: Vec<Equipment>,
    by_id: HashMap<String, usize>,
    /// (area_id, tag) → arena slot. Tags are only unique within an area.
    by_tag: HashMap<(String, String), usize>,
    /// parent slot → child slots, in insertion order.
    children: HashMap<usize, Vec<usize>>,
}

impl EquipmentIndex {
    /// Build the index from an equipment snapshot.
    ///
    /// Children whose `parent_tag` resolves to nothing are indexed but get
    /// no adjacency entry; the store rejects such records at creation, so
    /// they only appear in snapshots taken mid-migration.
    pub fn build(equipment: impl IntoIterator<Item = Equipment>) -> Self {
        let arena: Vec<Equipment> = equipment.into_iter().collect();

        let mut by_id = HashMap::with_capacity(arena.len());
        let mut by_tag = HashMap::with_capacity(arena.len());
        for (slot, eq) in arena.iter().enumerate() {
            by_id.insert(eq.id.clone(), slot);
            by_tag.insert((eq.area_id.clone(), eq.tag.clone()), slot);
        }

        let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
        for (slot, eq) in arena.iter().enumerate() {
            if let Some(parent_tag) = &eq.parent_tag {
                if let Some(&parent_slot) =
                    by_tag.get(&(eq.area_id.clone(), parent_tag.clone()))
                {
                    children.entry(parent_slot).or_default().push(slot);
                }
            }
        }

        Self {
            arena,
            by_id,
            by_tag,
            children,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Look up equipment by id.
    pub fn get(&self, id: &str) -> Option<&Equipment> {
        self.by_id.get(id).map(|&slot| &self.arena[slot])
    }

    /// Look up equipment by (area, tag).
    pub fn by_tag(&self, area_id: &str, tag: &str) -> Option<&Equipment> {
        self.by_tag
            .get(&(area_id.to_string(), tag.to_string()))
            .map(|&slot| &self.arena[slot])
    }

    /// Resolve a child's parent through the tag index.
    pub fn parent_of(&self, id: &str) -> Option<&Equipment> {
        let eq = self.get(id)?;
        let parent_tag = eq.parent_tag.as_deref()?;
        self.by_tag(&eq.area_id, parent_tag)
    }

    /// Direct children of the given equipment, in insertion order.
    pub fn children_of(&self, id: &str) -> Vec<&Equipment> {
        let Some(&slot) = self.by_id.get(id) else {
            return Vec::new();
        };
        self.children
            .get(&slot)
            .map(|slots| slots.iter().map(|&s| &self.arena[s]).collect())
            .unwrap_or_default()
    }

    /// Top-level (parent) equipment of an area.
    pub fn top_level(&self, area_id: &str) -> Vec<&Equipment> {
        self.arena
            .iter()
            .filter(|eq| eq.area_id == area_id && eq.is_parent)
            .collect()
    }
}
