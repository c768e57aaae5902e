use crate::model::{Discipline, Sector};

/// Map a sector to the ordered set of disciplines its holder may act on.
///
/// Sector "all" and sector "other" both yield the full five-discipline set —
/// "other" falling back to everything is intentional, not a bug (the
/// escalation semantics of "all" live in the ownership resolver, not here).
/// A named sector yields exactly its same-named discipline.
///
/// Total function: every sector yields a non-empty set.
pub fn allowed_disciplines(sector: Sector) -> Vec<Discipline> {
    match sector.discipline() {
        Some(d) => vec![d],
        None => Discipline::ALL.to_vec(),
    }
}
