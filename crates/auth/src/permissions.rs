//! Permission identifiers.
//!
//! Permissions are a closed enumeration, namespaced `domain:action[:scope]`
//! (e.g. `contract:view:all`, `company:members:manage`). Keeping them as a
//! sum type makes an unknown permission a compile error rather than a runtime
//! string mismatch; the string form exists only for display and for parsing
//! values supplied by external policy/identity sources.

use core::str::FromStr;

use thiserror::Error;

use crate::roles::Department;

/// A single grantable capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    // Contract domain.
    ContractView,
    ContractViewAll,
    ContractCreate,
    ContractEdit,
    ContractDelete,
    ContractApprove,

    // Department-specific contract grants.
    ContractViewHr,
    ContractViewFinance,
    ContractViewLegal,
    ContractViewSales,
    ContractViewIt,
    ContractViewProcurement,
    ContractViewGeneral,
    ContractCreateHr,
    ContractCreateFinance,
    ContractCreateLegal,
    ContractCreateSales,
    ContractCreateIt,
    ContractCreateProcurement,
    ContractCreateGeneral,

    // Company domain.
    CompanyView,
    CompanyManage,
    CompanyMembersManage,

    // Template domain.
    TemplateView,
    TemplateCreate,
    TemplateManage,

    // Account administration.
    UserManage,
}

/// Every defined permission, in declaration order.
///
/// The ADMIN global role is granted this full set.
pub const ALL_PERMISSIONS: &[Permission] = &[
    Permission::ContractView,
    Permission::ContractViewAll,
    Permission::ContractCreate,
    Permission::ContractEdit,
    Permission::ContractDelete,
    Permission::ContractApprove,
    Permission::ContractViewHr,
    Permission::ContractViewFinance,
    Permission::ContractViewLegal,
    Permission::ContractViewSales,
    Permission::ContractViewIt,
    Permission::ContractViewProcurement,
    Permission::ContractViewGeneral,
    Permission::ContractCreateHr,
    Permission::ContractCreateFinance,
    Permission::ContractCreateLegal,
    Permission::ContractCreateSales,
    Permission::ContractCreateIt,
    Permission::ContractCreateProcurement,
    Permission::ContractCreateGeneral,
    Permission::CompanyView,
    Permission::CompanyManage,
    Permission::CompanyMembersManage,
    Permission::TemplateView,
    Permission::TemplateCreate,
    Permission::TemplateManage,
    Permission::UserManage,
];

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ContractView => "contract:view",
            Permission::ContractViewAll => "contract:view:all",
            Permission::ContractCreate => "contract:create",
            Permission::ContractEdit => "contract:edit",
            Permission::ContractDelete => "contract:delete",
            Permission::ContractApprove => "contract:approve",
            Permission::ContractViewHr => "contract:view:hr",
            Permission::ContractViewFinance => "contract:view:finance",
            Permission::ContractViewLegal => "contract:view:legal",
            Permission::ContractViewSales => "contract:view:sales",
            Permission::ContractViewIt => "contract:view:it",
            Permission::ContractViewProcurement => "contract:view:procurement",
            Permission::ContractViewGeneral => "contract:view:general",
            Permission::ContractCreateHr => "contract:create:hr",
            Permission::ContractCreateFinance => "contract:create:finance",
            Permission::ContractCreateLegal => "contract:create:legal",
            Permission::ContractCreateSales => "contract:create:sales",
            Permission::ContractCreateIt => "contract:create:it",
            Permission::ContractCreateProcurement => "contract:create:procurement",
            Permission::ContractCreateGeneral => "contract:create:general",
            Permission::CompanyView => "company:view",
            Permission::CompanyManage => "company:manage",
            Permission::CompanyMembersManage => "company:members:manage",
            Permission::TemplateView => "template:view",
            Permission::TemplateCreate => "template:create",
            Permission::TemplateManage => "template:manage",
            Permission::UserManage => "user:manage",
        }
    }

    /// The department-specific view grant for `department`.
    pub fn view_for(department: Department) -> Permission {
        match department {
            Department::Hr => Permission::ContractViewHr,
            Department::Finance => Permission::ContractViewFinance,
            Department::Legal => Permission::ContractViewLegal,
            Department::Sales => Permission::ContractViewSales,
            Department::It => Permission::ContractViewIt,
            Department::Procurement => Permission::ContractViewProcurement,
            Department::General => Permission::ContractViewGeneral,
        }
    }

    /// The department-specific create grant for `department`.
    pub fn create_for(department: Department) -> Permission {
        match department {
            Department::Hr => Permission::ContractCreateHr,
            Department::Finance => Permission::ContractCreateFinance,
            Department::Legal => Permission::ContractCreateLegal,
            Department::Sales => Permission::ContractCreateSales,
            Department::It => Permission::ContractCreateIt,
            Department::Procurement => Permission::ContractCreateProcurement,
            Department::General => Permission::ContractCreateGeneral,
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown permission: {0}")]
pub struct ParsePermissionError(pub String);

impl FromStr for Permission {
    type Err = ParsePermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PERMISSIONS
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePermissionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_forms_round_trip() {
        for p in ALL_PERMISSIONS {
            let parsed: Permission = p.as_str().parse().unwrap();
            assert_eq!(*p, parsed);
        }
    }

    #[test]
    fn string_forms_are_unique() {
        use std::collections::HashSet;
        let names: HashSet<&str> = ALL_PERMISSIONS.iter().map(|p| p.as_str()).collect();
        assert_eq!(names.len(), ALL_PERMISSIONS.len());
    }

    #[test]
    fn unknown_permission_fails_to_parse() {
        assert!("contract:teleport".parse::<Permission>().is_err());
    }
}
