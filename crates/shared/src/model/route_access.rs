//! Which roles may open which top-level path segment.
//!
//! The table is configured per role ("role → segments it may open") and
//! inverted on load into "segment → roles". A segment that no role lists is
//! unrestricted; a listed segment admits only the roles that list it.

use crate::{errors::ServiceError, model::Role};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Segments that never go through the table.
pub const PUBLIC_SEGMENTS: [&str; 2] = ["", "auth"];

pub fn is_public_segment(segment: &str) -> bool {
    PUBLIC_SEGMENTS.contains(&segment)
}

/// First segment of a request path after dot segments and repeated slashes
/// are resolved: `/users/3/edit` → `users`, `//users` → `users`,
/// `/./users` → `users`, `/` → ``.
pub fn first_segment(path: &str) -> &str {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }
    segments.first().copied().unwrap_or("")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteAccessConfig(pub BTreeMap<Role, Vec<String>>);

impl Default for RouteAccessConfig {
    fn default() -> Self {
        let superadmin = [
            "dashboard",
            "claim",
            "validation",
            "verification",
            "fraud",
            "tindakan",
            "diagnosa",
            "tarif",
            "faskes",
            "doctor",
            "patient",
            "users",
            "analytics",
            "profile",
        ];
        let admin = [
            "dashboard",
            "claim",
            "validation",
            "verification",
            "fraud",
            "users",
            "analytics",
            "profile",
        ];
        let faskes = ["dashboard", "claim", "validation", "verification", "profile"];

        fn owned(segments: &[&str]) -> Vec<String> {
            segments.iter().map(|s| s.to_string()).collect()
        }

        Self(BTreeMap::from([
            (Role::Superadmin, owned(&superadmin)),
            (Role::Admin, owned(&admin)),
            (Role::Faskes, owned(&faskes)),
        ]))
    }
}

impl RouteAccessConfig {
    pub fn from_json(raw: &str) -> Result<Self, ServiceError> {
        serde_json::from_str(raw)
            .map_err(|e| ServiceError::InvalidConfig(format!("route access table: {e}")))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteAccessTable {
    segments: HashMap<String, HashSet<Role>>,
}

impl RouteAccessTable {
    pub fn from_config(config: &RouteAccessConfig) -> Result<Self, ServiceError> {
        let mut segments: HashMap<String, HashSet<Role>> = HashMap::new();

        for (role, allowed) in &config.0 {
            for segment in allowed {
                if segment.contains('/') {
                    return Err(ServiceError::InvalidConfig(format!(
                        "segment {segment:?} for role {role} must not contain '/'"
                    )));
                }
                segments.entry(segment.clone()).or_default().insert(*role);
            }
        }

        Ok(Self { segments })
    }

    pub fn is_restricted(&self, segment: &str) -> bool {
        self.segments.contains_key(segment)
    }

    pub fn allows(&self, role: Role, segment: &str) -> bool {
        match self.segments.get(segment) {
            Some(roles) => roles.contains(&role),
            None => true,
        }
    }

    pub fn roles_for(&self, segment: &str) -> Option<&HashSet<Role>> {
        self.segments.get(segment)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_table() -> RouteAccessTable {
        RouteAccessTable::from_config(&RouteAccessConfig::default()).unwrap()
    }

    #[test]
    fn first_segment_of_common_paths() {
        assert_eq!(first_segment("/"), "");
        assert_eq!(first_segment(""), "");
        assert_eq!(first_segment("/users"), "users");
        assert_eq!(first_segment("/dashboard/claims"), "dashboard");
        assert_eq!(first_segment("/auth/login"), "auth");
    }

    #[test]
    fn first_segment_ignores_empty_and_dot_segments() {
        assert_eq!(first_segment("//"), "");
        assert_eq!(first_segment("//users"), "users");
        assert_eq!(first_segment("///users/3"), "users");
        assert_eq!(first_segment("/./users"), "users");
        assert_eq!(first_segment("/claim/../users"), "users");
        assert_eq!(first_segment("/../users"), "users");
        assert_eq!(first_segment("/users/.."), "");
    }

    #[test]
    fn faskes_may_not_open_users() {
        let table = default_table();
        assert!(!table.allows(Role::Faskes, "users"));
        assert!(table.allows(Role::Admin, "users"));
        assert!(table.allows(Role::Superadmin, "users"));
    }

    #[test]
    fn patient_is_superadmin_only() {
        let table = default_table();
        let roles = table.roles_for("patient").unwrap();
        assert_eq!(roles.len(), 1);
        assert!(roles.contains(&Role::Superadmin));
    }

    #[test]
    fn unlisted_segments_are_open_to_everyone() {
        let table = default_table();
        assert!(!table.is_restricted("api"));
        for role in Role::ALL {
            assert!(table.allows(role, "api"));
            assert!(table.allows(role, "metrics"));
        }
    }

    #[test]
    fn every_role_reaches_the_dashboard() {
        let table = default_table();
        for role in Role::ALL {
            assert!(table.allows(role, "dashboard"));
        }
    }

    #[test]
    fn parses_role_keyed_json() {
        let config =
            RouteAccessConfig::from_json(r#"{"faskes": ["dashboard"], "admin": ["dashboard", "users"]}"#)
                .unwrap();
        let table = RouteAccessTable::from_config(&config).unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.allows(Role::Faskes, "users"));
        assert!(!table.allows(Role::Superadmin, "users"));
    }

    #[test]
    fn rejects_unknown_roles_and_nested_segments() {
        assert!(RouteAccessConfig::from_json(r#"{"auditor": ["dashboard"]}"#).is_err());

        let nested = RouteAccessConfig(BTreeMap::from([(
            Role::Admin,
            vec!["claim/create".to_string()],
        )]));
        assert!(RouteAccessTable::from_config(&nested).is_err());
    }

    proptest! {
        #[test]
        fn segments_outside_the_table_never_deny(segment in "[a-z\\-]{1,16}") {
            let table = default_table();
            prop_assume!(!table.is_restricted(&segment));
            for role in Role::ALL {
                prop_assert!(table.allows(role, &segment));
            }
        }
    }
}
