//! Sidebar navigation registry.
//!
//! Entries are declared once as static data and never mutated. Filtering for a
//! role keeps declaration order, and grouping keeps the order in which each
//! group first appears.

use crate::{errors::ServiceError, model::Role};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub group: &'static str,
    pub roles: &'static [Role],
}

impl NavigationEntry {
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

const ALL_ROLES: &[Role] = &[Role::Admin, Role::Superadmin, Role::Faskes];

pub const NAVIGATION: &[NavigationEntry] = &[
    // main
    NavigationEntry {
        name: "Dashboard",
        href: "/dashboard",
        icon: "home",
        group: "main",
        roles: ALL_ROLES,
    },
    // claims
    NavigationEntry {
        name: "Upload Klaim",
        href: "/claim",
        icon: "document-arrow-up",
        group: "claims",
        roles: &[Role::Superadmin, Role::Admin],
    },
    NavigationEntry {
        name: "Validasi Klaim",
        href: "/validation",
        icon: "document-check",
        group: "claims",
        roles: &[Role::Superadmin, Role::Admin],
    },
    NavigationEntry {
        name: "Verifikasi BPJS",
        href: "/verification",
        icon: "user-group",
        group: "claims",
        roles: &[Role::Superadmin],
    },
    NavigationEntry {
        name: "Fraud Detection",
        href: "/fraud",
        icon: "shield-check",
        group: "claims",
        roles: &[Role::Superadmin],
    },
    // master data
    NavigationEntry {
        name: "Tindakan (ICD-9)",
        href: "/tindakan",
        icon: "document-check",
        group: "master-data",
        roles: &[Role::Superadmin],
    },
    NavigationEntry {
        name: "Diagnosa (ICD-10)",
        href: "/diagnosa",
        icon: "heart",
        group: "master-data",
        roles: &[Role::Superadmin],
    },
    NavigationEntry {
        name: "Tarif Tindakan",
        href: "/tarif",
        icon: "chart-bar",
        group: "master-data",
        roles: &[Role::Superadmin],
    },
    NavigationEntry {
        name: "Faskes",
        href: "/faskes",
        icon: "building-office",
        group: "master-data",
        roles: &[Role::Superadmin],
    },
    NavigationEntry {
        name: "Dokter",
        href: "/doctor",
        icon: "user-circle",
        group: "master-data",
        roles: &[Role::Superadmin, Role::Admin],
    },
    NavigationEntry {
        name: "Pasien",
        href: "/patient",
        icon: "user",
        group: "master-data",
        roles: &[Role::Admin],
    },
    // administration
    NavigationEntry {
        name: "Manajemen User",
        href: "/users",
        icon: "user",
        group: "admin",
        roles: &[Role::Superadmin],
    },
    NavigationEntry {
        name: "Analytics",
        href: "/analytics",
        icon: "chart-bar",
        group: "admin",
        roles: &[Role::Superadmin, Role::Admin],
    },
    NavigationEntry {
        name: "Update Profile",
        href: "/profile",
        icon: "cog",
        group: "admin",
        roles: ALL_ROLES,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationGroup<'a> {
    pub name: &'a str,
    pub entries: Vec<&'a NavigationEntry>,
}

/// Entries visible to `role`, in the order they were given.
pub fn filter_for_role<'a, I>(entries: I, role: Role) -> Vec<&'a NavigationEntry>
where
    I: IntoIterator<Item = &'a NavigationEntry>,
{
    entries
        .into_iter()
        .filter(|entry| entry.is_visible_to(role))
        .collect()
}

pub fn group_entries<'a>(entries: &[&'a NavigationEntry]) -> Vec<NavigationGroup<'a>> {
    let mut groups: Vec<NavigationGroup<'a>> = Vec::new();

    for &entry in entries {
        match groups.iter_mut().find(|group| group.name == entry.group) {
            Some(group) => group.entries.push(entry),
            None => groups.push(NavigationGroup {
                name: entry.group,
                entries: vec![entry],
            }),
        }
    }

    groups
}

#[derive(Debug, Clone, Copy)]
pub struct NavigationRegistry {
    entries: &'static [NavigationEntry],
}

impl Default for NavigationRegistry {
    fn default() -> Self {
        Self::new(NAVIGATION)
    }
}

impl NavigationRegistry {
    pub const fn new(entries: &'static [NavigationEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [NavigationEntry] {
        self.entries
    }

    /// Checks that every entry names at least one role and that no path is
    /// declared twice.
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut seen = HashSet::new();

        for entry in self.entries {
            if entry.roles.is_empty() {
                return Err(ServiceError::InvalidConfig(format!(
                    "navigation entry {} has no roles",
                    entry.href
                )));
            }
            if !seen.insert(entry.href) {
                return Err(ServiceError::InvalidConfig(format!(
                    "navigation path {} is declared more than once",
                    entry.href
                )));
            }
        }

        Ok(())
    }

    pub fn visible_to(&self, role: Role) -> Vec<&'static NavigationEntry> {
        filter_for_role(self.entries, role)
    }

    pub fn menu_for(&self, role: Role) -> Vec<NavigationGroup<'static>> {
        group_entries(&self.visible_to(role))
    }
}
