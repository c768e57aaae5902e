use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Systemic privilege level of a user.
///
/// Closed set, fixed in code. Adding a role is a core code change,
/// not a data migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    Supervisor,
    Engineer,
    Operator,
    Viewer,
    /// Workplace safety team (view-only, same standing as viewer).
    Sesmt,
}

impl Role {
    /// All roles, in rank order (highest first).
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::Supervisor,
        Role::Engineer,
        Role::Operator,
        Role::Viewer,
        Role::Sesmt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Supervisor => "supervisor",
            Self::Engineer => "engineer",
            Self::Operator => "operator",
            Self::Viewer => "viewer",
            Self::Sesmt => "sesmt",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "supervisor" => Some(Self::Supervisor),
            "engineer" => Some(Self::Engineer),
            "operator" => Some(Self::Operator),
            "viewer" => Some(Self::Viewer),
            "sesmt" => Some(Self::Sesmt),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Sector
// ---------------------------------------------------------------------------

/// Organizational affiliation of a user. Gates which disciplines of work
/// the user may act on.
///
/// "all" is the explicit cross-sector escalation state for supervisors;
/// "other" is a catch-all affiliation that does NOT escalate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sector {
    Electrical,
    Mechanical,
    Civil,
    Instrumentation,
    Automation,
    All,
    Other,
}

impl Sector {
    pub const ALL_SECTORS: [Sector; 7] = [
        Sector::Electrical,
        Sector::Mechanical,
        Sector::Civil,
        Sector::Instrumentation,
        Sector::Automation,
        Sector::All,
        Sector::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electrical => "electrical",
            Self::Mechanical => "mechanical",
            Self::Civil => "civil",
            Self::Instrumentation => "instrumentation",
            Self::Automation => "automation",
            Self::All => "all",
            Self::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "electrical" => Some(Self::Electrical),
            "mechanical" => Some(Self::Mechanical),
            "civil" => Some(Self::Civil),
            "instrumentation" => Some(Self::Instrumentation),
            "automation" => Some(Self::Automation),
            "all" => Some(Self::All),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// The discipline of the same name as this sector, if one exists.
    /// "all" and "other" have no direct discipline counterpart.
    pub fn discipline(&self) -> Option<Discipline> {
        match self {
            Self::Electrical => Some(Discipline::Electrical),
            Self::Mechanical => Some(Discipline::Mechanical),
            Self::Civil => Some(Discipline::Civil),
            Self::Instrumentation => Some(Discipline::Instrumentation),
            Self::Automation => Some(Discipline::Automation),
            Self::All | Self::Other => None,
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Discipline
// ---------------------------------------------------------------------------

/// Category of engineering work assigned to a task or equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Discipline {
    Electrical,
    Mechanical,
    Civil,
    Instrumentation,
    Automation,
}

impl Discipline {
    /// All disciplines, in canonical display order.
    pub const ALL: [Discipline; 5] = [
        Discipline::Electrical,
        Discipline::Mechanical,
        Discipline::Civil,
        Discipline::Instrumentation,
        Discipline::Automation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electrical => "electrical",
            Self::Mechanical => "mechanical",
            Self::Civil => "civil",
            Self::Instrumentation => "instrumentation",
            Self::Automation => "automation",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "electrical" => Some(Self::Electrical),
            "mechanical" => Some(Self::Mechanical),
            "civil" => Some(Self::Civil),
            "instrumentation" => Some(Self::Instrumentation),
            "automation" => Some(Self::Automation),
            _ => None,
        }
    }

    /// The sector of the same name. Every discipline has one.
    pub fn sector(&self) -> Sector {
        match self {
            Self::Electrical => Sector::Electrical,
            Self::Mechanical => Sector::Mechanical,
            Self::Civil => Sector::Civil,
            Self::Instrumentation => Sector::Instrumentation,
            Self::Automation => Sector::Automation,
        }
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Resource / Action
// ---------------------------------------------------------------------------

/// A permission-gated resource. Fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    Areas,
    Equipment,
    Tasks,
    Users,
    Reports,
    Settings,
    Progress,
    AdminDashboard,
}

impl Resource {
    pub const ALL: [Resource; 8] = [
        Resource::Areas,
        Resource::Equipment,
        Resource::Tasks,
        Resource::Users,
        Resource::Reports,
        Resource::Settings,
        Resource::Progress,
        Resource::AdminDashboard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Areas => "areas",
            Self::Equipment => "equipment",
            Self::Tasks => "tasks",
            Self::Users => "users",
            Self::Reports => "reports",
            Self::Settings => "settings",
            Self::Progress => "progress",
            Self::AdminDashboard => "admin-dashboard",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    View,
    Create,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::View, Action::Create, Action::Update, Action::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Actor
// ---------------------------------------------------------------------------

/// Identity snapshot of the current user, supplied by the identity provider
/// at session start. Immutable for the session; every decision function
/// takes it as an explicit argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: String,
    pub role: Role,
    pub sector: Sector,
}

impl Actor {
    pub fn new(id: impl Into<String>, role: Role, sector: Sector) -> Self {
        Self {
            id: id.into(),
            role,
            sector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_string_bridge() {
        for role in Role::ALL {
            assert_eq!(Role::from_str(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_str("root"), None);
    }

    #[test]
    fn sector_string_bridge() {
        for sector in Sector::ALL_SECTORS {
            assert_eq!(Sector::from_str(sector.as_str()), Some(sector));
        }
        assert_eq!(Sector::from_str(""), None);
    }

    #[test]
    fn discipline_sector_mapping_is_bijective() {
        for d in Discipline::ALL {
            assert_eq!(d.sector().discipline(), Some(d));
        }
        assert_eq!(Sector::All.discipline(), None);
        assert_eq!(Sector::Other.discipline(), None);
    }

    #[test]
    fn wire_forms_are_kebab_case() {
        let json = serde_json::to_string(&Resource::AdminDashboard).unwrap();
        assert_eq!(json, "\"admin-dashboard\"");
        let json = serde_json::to_string(&Role::Sesmt).unwrap();
        assert_eq!(json, "\"sesmt\"");
    }

    #[test]
    fn actor_json_shape() {
        let actor = Actor::new("u1", Role::Supervisor, Sector::Mechanical);
        let json = serde_json::to_value(&actor).unwrap();
        assert_eq!(json["role"], "supervisor");
        assert_eq!(json["sector"], "mechanical");
        let back: Actor = serde_json::from_value(json).unwrap();
        assert_eq!(back, actor);
    }
}
