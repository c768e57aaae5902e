use crate::engine::can;
use crate::model::{Action, Actor, Discipline, Resource, Role, Sector};

/// Decide whether an actor may mutate a task of the given discipline.
///
/// Rules, first match wins:
/// 1. admin — always.
/// 2. supervisor with sector "all" — always (explicit cross-sector
///    escalation; this is a modeled state, never inferred).
/// 3. any other supervisor — only when their sector names the same
///    discipline as the task. Sector "other" names none, so it denies.
/// 4. everyone else — the general task-update and progress-update grants
///    must both hold (engineer and operator qualify, viewer and sesmt
///    do not).
pub fn can_edit_task(actor: &Actor, discipline: Discipline) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Supervisor => {
            actor.sector == Sector::All || actor.sector.discipline() == Some(discipline)
        }
        role => {
            can(role, Resource::Tasks, Action::Update)
                && can(role, Resource::Progress, Action::Update)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: Role, sector: Sector) -> Actor {
        Actor::new("u1", role, sector)
    }

    #[test]
    fn admin_edits_anything() {
        for d in Discipline::ALL {
            assert!(can_edit_task(&actor(Role::Admin, Sector::Other), d));
        }
    }

    #[test]
    fn all_sector_supervisor_edits_anything() {
        for d in Discipline::ALL {
            assert!(can_edit_task(&actor(Role::Supervisor, Sector::All), d));
        }
    }

    #[test]
    fn sector_scoped_supervisor_edits_own_discipline_only() {
        let mech = actor(Role::Supervisor, Sector::Mechanical);
        assert!(can_edit_task(&mech, Discipline::Mechanical));
        assert!(!can_edit_task(&mech, Discipline::Electrical));
        assert!(!can_edit_task(&mech, Discipline::Civil));
    }

    #[test]
    fn other_sector_supervisor_is_not_escalated() {
        // "other" grants the full discipline filter but never the ownership
        // escalation — that asymmetry is load-bearing.
        let sup = actor(Role::Supervisor, Sector::Other);
        for d in Discipline::ALL {
            assert!(!can_edit_task(&sup, d));
        }
    }

    #[test]
    fn engineers_and_operators_pass_the_general_gate() {
        for d in Discipline::ALL {
            assert!(can_edit_task(&actor(Role::Engineer, Sector::Electrical), d));
            assert!(can_edit_task(&actor(Role::Operator, Sector::Civil), d));
        }
    }

    #[test]
    fn viewers_and_sesmt_never_edit() {
        for d in Discipline::ALL {
            assert!(!can_edit_task(&actor(Role::Viewer, Sector::All), d));
            assert!(!can_edit_task(&actor(Role::Sesmt, Sector::All), d));
        }
    }
}
