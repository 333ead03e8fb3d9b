//! Permission resolution across the three role systems.
//!
//! A user's effective capability is the union of what the global role, the
//! company role (if any) and the department role (if any) grant. Adding a
//! role can only ever add permissions (monotonic); removing access is done
//! by removing the role, never by one table masking another.

use std::collections::BTreeSet;

use crate::permissions::Permission;
use crate::policy::{
    company_role_permissions, department_role_permissions, global_role_permissions,
};
use crate::roles::{CompanyRole, DepartmentRole, GlobalRole};

/// Point query: does any of the three role tables grant `permission`?
///
/// Short-circuiting OR over three static table lookups.
/// - No IO
/// - No panics
/// - No hidden state
pub fn has_permission(
    global: GlobalRole,
    company: Option<CompanyRole>,
    department: Option<DepartmentRole>,
    permission: Permission,
) -> bool {
    if global_role_permissions(global).contains(&permission) {
        return true;
    }
    if let Some(role) = company {
        if company_role_permissions(role).contains(&permission) {
            return true;
        }
    }
    if let Some(role) = department {
        if department_role_permissions(role).contains(&permission) {
            return true;
        }
    }
    false
}

/// The deduplicated union of all three tables' grants.
///
/// Intended for presenting capabilities to a caller ("what can I do");
/// single yes/no gates should use [`has_permission`] instead. Pure function:
/// identical inputs always yield identical sets, in a deterministic order.
pub fn effective_permissions(
    global: GlobalRole,
    company: Option<CompanyRole>,
    department: Option<DepartmentRole>,
) -> BTreeSet<Permission> {
    let mut set: BTreeSet<Permission> =
        global_role_permissions(global).iter().copied().collect();
    if let Some(role) = company {
        set.extend(company_role_permissions(role).iter().copied());
    }
    if let Some(role) = department {
        set.extend(department_role_permissions(role).iter().copied());
    }
    set
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::permissions::ALL_PERMISSIONS;

    #[test]
    fn viewer_scenario() {
        // VIEWER with no company/department role: view yes, delete no.
        assert!(has_permission(
            GlobalRole::Viewer,
            None,
            None,
            Permission::ContractView
        ));
        assert!(!has_permission(
            GlobalRole::Viewer,
            None,
            None,
            Permission::ContractDelete
        ));
    }

    #[test]
    fn company_role_only_adds() {
        let base = effective_permissions(GlobalRole::Viewer, None, None);
        let with_owner = effective_permissions(GlobalRole::Viewer, Some(CompanyRole::Owner), None);
        assert!(with_owner.is_superset(&base));
    }

    #[test]
    fn effective_permissions_is_idempotent() {
        let a = effective_permissions(
            GlobalRole::User,
            Some(CompanyRole::Member),
            Some(DepartmentRole::LegalCounsel),
        );
        let b = effective_permissions(
            GlobalRole::User,
            Some(CompanyRole::Member),
            Some(DepartmentRole::LegalCounsel),
        );
        assert_eq!(a, b);
    }

    fn global_roles() -> impl Strategy<Value = GlobalRole> {
        proptest::sample::select(GlobalRole::ALL.to_vec())
    }

    fn company_roles() -> impl Strategy<Value = Option<CompanyRole>> {
        proptest::option::of(proptest::sample::select(CompanyRole::ALL.to_vec()))
    }

    fn department_roles() -> impl Strategy<Value = Option<DepartmentRole>> {
        proptest::option::of(proptest::sample::select(DepartmentRole::ALL.to_vec()))
    }

    fn permissions() -> impl Strategy<Value = Permission> {
        proptest::sample::select(ALL_PERMISSIONS.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: `has_permission` is true iff the permission appears in
        /// at least one of the three contributing tables (union law).
        #[test]
        fn union_law(
            global in global_roles(),
            company in company_roles(),
            department in department_roles(),
            permission in permissions(),
        ) {
            let in_tables = crate::policy::global_role_permissions(global)
                .contains(&permission)
                || company.is_some_and(|r| {
                    crate::policy::company_role_permissions(r).contains(&permission)
                })
                || department.is_some_and(|r| {
                    crate::policy::department_role_permissions(r).contains(&permission)
                });

            prop_assert_eq!(
                has_permission(global, company, department, permission),
                in_tables
            );
        }

        /// Property: the point query agrees with membership in the union set.
        #[test]
        fn point_query_matches_union_set(
            global in global_roles(),
            company in company_roles(),
            department in department_roles(),
            permission in permissions(),
        ) {
            let set = effective_permissions(global, company, department);
            prop_assert_eq!(
                has_permission(global, company, department, permission),
                set.contains(&permission)
            );
        }

        /// Property: adding a role never removes a permission (monotonicity).
        #[test]
        fn monotonic_union(
            global in global_roles(),
            company in company_roles(),
            department in department_roles(),
        ) {
            let base = effective_permissions(global, None, None);
            let full = effective_permissions(global, company, department);
            prop_assert!(full.is_superset(&base));
        }
    }
}
