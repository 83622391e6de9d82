//! Static role → capability table.
//!
//! Every role carries a full [`CapabilityFlags`] record, so a role can never
//! be missing a capability key. Lookups by name fail closed: an unknown role
//! or capability name answers `false`.

use crate::model::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Capability {
    #[serde(rename = "canManageUsers")]
    ManageUsers,
    #[serde(rename = "canUploadDocuments")]
    UploadDocuments,
    #[serde(rename = "canValidateClaims")]
    ValidateClaims,
    #[serde(rename = "canAccessFraudDetection")]
    AccessFraudDetection,
    #[serde(rename = "canVerifyBPJS")]
    VerifyBpjs,
    #[serde(rename = "canManageINACBGs")]
    ManageInacbgs,
    #[serde(rename = "canViewAnalytics")]
    ViewAnalytics,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::ManageUsers,
        Capability::UploadDocuments,
        Capability::ValidateClaims,
        Capability::AccessFraudDetection,
        Capability::VerifyBpjs,
        Capability::ManageInacbgs,
        Capability::ViewAnalytics,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Capability::ManageUsers => "canManageUsers",
            Capability::UploadDocuments => "canUploadDocuments",
            Capability::ValidateClaims => "canValidateClaims",
            Capability::AccessFraudDetection => "canAccessFraudDetection",
            Capability::VerifyBpjs => "canVerifyBPJS",
            Capability::ManageInacbgs => "canManageINACBGs",
            Capability::ViewAnalytics => "canViewAnalytics",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cap| cap.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityFlags {
    pub can_manage_users: bool,
    pub can_upload_documents: bool,
    pub can_validate_claims: bool,
    pub can_access_fraud_detection: bool,
    #[serde(rename = "canVerifyBPJS")]
    pub can_verify_bpjs: bool,
    #[serde(rename = "canManageINACBGs")]
    pub can_manage_inacbgs: bool,
    pub can_view_analytics: bool,
}

impl CapabilityFlags {
    pub const NONE: CapabilityFlags = CapabilityFlags {
        can_manage_users: false,
        can_upload_documents: false,
        can_validate_claims: false,
        can_access_fraud_detection: false,
        can_verify_bpjs: false,
        can_manage_inacbgs: false,
        can_view_analytics: false,
    };

    pub const fn get(&self, capability: Capability) -> bool {
        match capability {
            Capability::ManageUsers => self.can_manage_users,
            Capability::UploadDocuments => self.can_upload_documents,
            Capability::ValidateClaims => self.can_validate_claims,
            Capability::AccessFraudDetection => self.can_access_fraud_detection,
            Capability::VerifyBpjs => self.can_verify_bpjs,
            Capability::ManageInacbgs => self.can_manage_inacbgs,
            Capability::ViewAnalytics => self.can_view_analytics,
        }
    }

    pub fn granted(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL
            .into_iter()
            .filter(move |cap| self.get(*cap))
    }
}

const SUPERADMIN: CapabilityFlags = CapabilityFlags {
    can_manage_users: true,
    can_upload_documents: true,
    can_validate_claims: true,
    can_access_fraud_detection: true,
    can_verify_bpjs: true,
    can_manage_inacbgs: true,
    can_view_analytics: true,
};

const ADMIN: CapabilityFlags = CapabilityFlags {
    can_manage_users: false,
    can_upload_documents: true,
    can_validate_claims: true,
    can_access_fraud_detection: false,
    can_verify_bpjs: false,
    can_manage_inacbgs: true,
    can_view_analytics: true,
};

const FASKES: CapabilityFlags = CapabilityFlags {
    can_manage_users: false,
    can_upload_documents: false,
    can_validate_claims: true,
    can_access_fraud_detection: true,
    can_verify_bpjs: true,
    can_manage_inacbgs: true,
    can_view_analytics: true,
};

pub const fn permissions_for(role: Role) -> CapabilityFlags {
    match role {
        Role::Superadmin => SUPERADMIN,
        Role::Admin => ADMIN,
        Role::Faskes => FASKES,
    }
}

pub const fn role_has(role: Role, capability: Capability) -> bool {
    permissions_for(role).get(capability)
}

/// Name-based lookup for untyped callers (cookie payloads, query strings).
pub fn has_permission(role: &str, capability: &str) -> bool {
    let (Ok(role), Some(capability)) = (role.parse::<Role>(), Capability::from_name(capability))
    else {
        return false;
    };

    role_has(role, capability)
}
