use crate::model::{Action, Resource, Role};

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// One grant: the listed roles may perform `action` on `resource`.
///
/// The table is the single authoritative source of permission decisions.
/// Anything not granted here is denied.
struct Rule {
    resource: Resource,
    action: Action,
    roles: &'static [Role],
}

const EVERYONE: &[Role] = &[
    Role::Admin,
    Role::Supervisor,
    Role::Engineer,
    Role::Operator,
    Role::Viewer,
    Role::Sesmt,
];
const MANAGERS: &[Role] = &[Role::Admin, Role::Supervisor];
const FIELD_EDITORS: &[Role] = &[Role::Admin, Role::Supervisor, Role::Engineer, Role::Operator];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

static RULES: &[Rule] = &[
    // view
    Rule { resource: Resource::Areas, action: Action::View, roles: EVERYONE },
    Rule { resource: Resource::Equipment, action: Action::View, roles: EVERYONE },
    Rule { resource: Resource::Tasks, action: Action::View, roles: EVERYONE },
    Rule { resource: Resource::Progress, action: Action::View, roles: EVERYONE },
    Rule { resource: Resource::Reports, action: Action::View, roles: EVERYONE },
    Rule { resource: Resource::Users, action: Action::View, roles: MANAGERS },
    Rule { resource: Resource::Settings, action: Action::View, roles: ADMIN_ONLY },
    Rule { resource: Resource::AdminDashboard, action: Action::View, roles: ADMIN_ONLY },
    // create
    Rule { resource: Resource::Areas, action: Action::Create, roles: MANAGERS },
    Rule { resource: Resource::Equipment, action: Action::Create, roles: MANAGERS },
    Rule { resource: Resource::Tasks, action: Action::Create, roles: MANAGERS },
    Rule { resource: Resource::Users, action: Action::Create, roles: ADMIN_ONLY },
    // update — engineer/operator task+progress updates are additionally
    // gated per task by the ownership resolver.
    Rule { resource: Resource::Areas, action: Action::Update, roles: MANAGERS },
    Rule { resource: Resource::Equipment, action: Action::Update, roles: MANAGERS },
    Rule { resource: Resource::Tasks, action: Action::Update, roles: FIELD_EDITORS },
    Rule { resource: Resource::Progress, action: Action::Update, roles: FIELD_EDITORS },
    Rule { resource: Resource::Users, action: Action::Update, roles: ADMIN_ONLY },
    Rule { resource: Resource::Settings, action: Action::Update, roles: ADMIN_ONLY },
    // delete — user deletion is further constrained by rank, see
    // `can_delete_user`.
    Rule { resource: Resource::Areas, action: Action::Delete, roles: MANAGERS },
    Rule { resource: Resource::Equipment, action: Action::Delete, roles: MANAGERS },
    Rule { resource: Resource::Tasks, action: Action::Delete, roles: MANAGERS },
    Rule { resource: Resource::Users, action: Action::Delete, roles: MANAGERS },
];

/// Decide whether `role` may perform `action` on `resource`.
///
/// Pure, deterministic table lookup. Default deny: a triple with no matching
/// grant is refused. UI-level gating (e.g. which navigation affordances to
/// render) is a presentation concern layered on top of this table.
pub fn can(role: Role, resource: Resource, action: Action) -> bool {
    RULES
        .iter()
        .any(|r| r.resource == resource && r.action == action && r.roles.contains(&role))
}

// ---------------------------------------------------------------------------
// User deletion ranking
// ---------------------------------------------------------------------------

/// Privilege rank for the deletion ordering.
/// operator, sesmt and viewer share the lowest rank.
fn rank(role: Role) -> u8 {
    match role {
        Role::Admin => 3,
        Role::Supervisor => 2,
        Role::Engineer => 1,
        Role::Operator | Role::Sesmt | Role::Viewer => 0,
    }
}

/// Decide whether an actor may delete a user account.
///
/// Requires the `users`/`delete` grant AND that the actor strictly outranks
/// the target. An actor never deletes a peer or a superior: admin cannot
/// delete admin, supervisor cannot delete supervisor or admin.
pub fn can_delete_user(actor: Role, target: Role) -> bool {
    can(actor, Resource::Users, Action::Delete) && rank(actor) > rank(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_grants() {
        for role in Role::ALL {
            assert!(can(role, Resource::Areas, Action::View));
            assert!(can(role, Resource::Equipment, Action::View));
            assert!(can(role, Resource::Reports, Action::View));
        }
        assert!(can(Role::Supervisor, Resource::Users, Action::View));
        assert!(!can(Role::Engineer, Resource::Users, Action::View));
        assert!(can(Role::Admin, Resource::AdminDashboard, Action::View));
        assert!(!can(Role::Supervisor, Resource::AdminDashboard, Action::View));
        assert!(!can(Role::Viewer, Resource::Settings, Action::View));
    }

    #[test]
    fn crud_grants() {
        for resource in [Resource::Areas, Resource::Equipment, Resource::Tasks] {
            assert!(can(Role::Supervisor, resource, Action::Create));
            assert!(can(Role::Admin, resource, Action::Delete));
            assert!(!can(Role::Engineer, resource, Action::Create));
            assert!(!can(Role::Viewer, resource, Action::Delete));
        }
        // Engineers and operators may update tasks and progress, nothing else.
        assert!(can(Role::Engineer, Resource::Tasks, Action::Update));
        assert!(can(Role::Operator, Resource::Progress, Action::Update));
        assert!(!can(Role::Engineer, Resource::Areas, Action::Update));
        assert!(!can(Role::Viewer, Resource::Tasks, Action::Update));
        assert!(!can(Role::Sesmt, Resource::Progress, Action::Update));
    }

    #[test]
    fn default_deny() {
        assert!(!can(Role::Viewer, Resource::Settings, Action::Update));
        assert!(!can(Role::Operator, Resource::Users, Action::Create));
        assert!(!can(Role::Engineer, Resource::AdminDashboard, Action::View));
        // No create/delete grant exists for progress or reports at all.
        for role in Role::ALL {
            assert!(!can(role, Resource::Progress, Action::Create));
            assert!(!can(role, Resource::Reports, Action::Delete));
        }
    }

    #[test]
    fn determinism_over_every_triple() {
        for role in Role::ALL {
            for resource in Resource::ALL {
                for action in Action::ALL {
                    let first = can(role, resource, action);
                    let second = can(role, resource, action);
                    assert_eq!(first, second, "{role}/{resource}/{action} wavered");
                }
            }
        }
    }

    #[test]
    fn deletion_requires_strict_outranking() {
        // admin outranks everyone but admin.
        assert!(can_delete_user(Role::Admin, Role::Supervisor));
        assert!(can_delete_user(Role::Admin, Role::Engineer));
        assert!(can_delete_user(Role::Admin, Role::Viewer));
        assert!(!can_delete_user(Role::Admin, Role::Admin));

        // supervisor outranks engineer and below, never a peer or superior.
        assert!(can_delete_user(Role::Supervisor, Role::Engineer));
        assert!(can_delete_user(Role::Supervisor, Role::Operator));
        assert!(can_delete_user(Role::Supervisor, Role::Sesmt));
        assert!(!can_delete_user(Role::Supervisor, Role::Supervisor));
        assert!(!can_delete_user(Role::Supervisor, Role::Admin));
    }

    #[test]
    fn deletion_needs_the_resource_grant_too() {
        // engineer outranks operator by rank but holds no users/delete grant.
        assert!(!can_delete_user(Role::Engineer, Role::Operator));
        assert!(!can_delete_user(Role::Viewer, Role::Viewer));
        assert!(!can_delete_user(Role::Operator, Role::Sesmt));
    }
}
