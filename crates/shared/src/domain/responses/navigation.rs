use crate::model::{NavigationEntry, NavigationGroup, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigationItemResponse {
    pub name: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigationGroupResponse {
    pub group: String,
    pub items: Vec<NavigationItemResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigationResponse {
    pub role: Role,
    pub groups: Vec<NavigationGroupResponse>,
}

impl From<&NavigationEntry> for NavigationItemResponse {
    fn from(entry: &NavigationEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            href: entry.href.to_string(),
            icon: entry.icon.to_string(),
        }
    }
}

impl From<&NavigationGroup<'_>> for NavigationGroupResponse {
    fn from(group: &NavigationGroup<'_>) -> Self {
        Self {
            group: group.name.to_string(),
            items: group.entries.iter().map(|entry| (*entry).into()).collect(),
        }
    }
}
