//! Department access evaluation for contract subtypes.
//!
//! Department eligibility is a hard gate: if the user's department is not in
//! the subtype's allowed set, no role can override the denial. Within an
//! eligible department, access is decided purely by permission-set
//! membership, which is what lets a role carry standing cross-department
//! grants (see [`crate::policy::department_role_permissions`]).

use crate::permissions::Permission;
use crate::policy::{allowed_departments, department_role_permissions};
use crate::roles::{Department, DepartmentRole};

/// May a user in `department` holding `role` view records of `subtype`?
pub fn can_access_subtype(
    subtype: &str,
    department: Department,
    role: Option<DepartmentRole>,
) -> bool {
    check(subtype, department, role, AccessKind::View)
}

/// May a user in `department` holding `role` create records of `subtype`?
pub fn can_create_subtype(
    subtype: &str,
    department: Department,
    role: Option<DepartmentRole>,
) -> bool {
    check(subtype, department, role, AccessKind::Create)
}

#[derive(Clone, Copy)]
enum AccessKind {
    View,
    Create,
}

fn check(
    subtype: &str,
    department: Department,
    role: Option<DepartmentRole>,
    kind: AccessKind,
) -> bool {
    // Hard gate: the department must be eligible for the subtype at all.
    if !allowed_departments(subtype).contains(&department) {
        return false;
    }

    // No department role means no type-scoped access. Company-level access,
    // if any, goes through the authorize path instead.
    let Some(role) = role else {
        return false;
    };

    let perms = department_role_permissions(role);
    let (specific, generic) = match kind {
        AccessKind::View => (Permission::view_for(department), Permission::ContractViewAll),
        AccessKind::Create => (Permission::create_for(department), Permission::ContractCreate),
    };

    perms.contains(&specific) || perms.contains(&generic)
}
