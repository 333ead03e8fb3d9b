//! Authorization checks at the handler boundary.
//!
//! Boolean checks ([`authorize`]) never fail; the `_or_fail` variants return
//! a typed [`AccessError`] that the excluded web layer converts into a
//! rejection. The three denial conditions are distinct so callers can render
//! appropriate guidance, but none of them reveals whether a particular
//! record exists.

use thiserror::Error;

use pactum_core::CompanyId;

use crate::context::TenantContext;
use crate::department::{can_access_subtype, can_create_subtype};
use crate::permissions::Permission;
use crate::policy::{
    allowed_departments, company_role_permissions, department_role_permissions,
};
use crate::resolver::has_permission;
use crate::roles::{CompanyRole, Department};

/// Why an operation was denied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// No resolvable tenant context: the caller is not authenticated.
    #[error("unauthenticated")]
    Unauthenticated,

    /// The caller is authenticated but lacks the required permission.
    #[error("forbidden: missing permission '{permission}'")]
    InsufficientPermission {
        permission: Permission,
        /// Company scope the check was made against, for diagnostics.
        company_id: Option<CompanyId>,
    },

    /// The caller's department is not eligible for the contract subtype, or
    /// the department role lacks the grant.
    #[error("department not eligible for contract subtype '{subtype}'")]
    DepartmentIneligible {
        subtype: String,
        /// Departments that would be eligible, for caller guidance.
        allowed: &'static [Department],
    },
}

/// Does the caller hold `permission`, optionally scoped to a company?
///
/// - A missing context is an automatic deny.
/// - Admin is an automatic allow.
/// - The company-role table contributes only when the requested company
///   scope matches the context's company (fail-closed on a mismatched
///   scope); global and department grants always apply.
pub fn authorize(
    ctx: Option<&TenantContext>,
    permission: Permission,
    company_id: Option<CompanyId>,
) -> bool {
    let Some(ctx) = ctx else {
        return false;
    };
    if ctx.is_admin() {
        return true;
    }

    let company_role = scoped_company_role(ctx, company_id);

    match ctx.global_role() {
        Some(global) => has_permission(global, company_role, ctx.department_role(), permission),
        // Malformed global role: the global table contributes nothing.
        None => {
            company_role.is_some_and(|r| company_role_permissions(r).contains(&permission))
                || ctx
                    .department_role()
                    .is_some_and(|r| department_role_permissions(r).contains(&permission))
        }
    }
}

/// [`authorize`], but with a typed error for the rejection path.
pub fn authorize_or_fail(
    ctx: Option<&TenantContext>,
    permission: Permission,
    company_id: Option<CompanyId>,
) -> Result<(), AccessError> {
    let ctx = ctx.ok_or(AccessError::Unauthenticated)?;
    if authorize(Some(ctx), permission, company_id) {
        Ok(())
    } else {
        Err(AccessError::InsufficientPermission {
            permission,
            company_id,
        })
    }
}

/// Require view eligibility for a contract subtype, with a department-aware
/// error.
pub fn require_subtype_view(
    ctx: Option<&TenantContext>,
    subtype: &str,
) -> Result<(), AccessError> {
    require_subtype(ctx, subtype, can_access_subtype)
}

/// Require create eligibility for a contract subtype.
pub fn require_subtype_create(
    ctx: Option<&TenantContext>,
    subtype: &str,
) -> Result<(), AccessError> {
    require_subtype(ctx, subtype, can_create_subtype)
}

fn require_subtype(
    ctx: Option<&TenantContext>,
    subtype: &str,
    check: fn(&str, Department, Option<crate::roles::DepartmentRole>) -> bool,
) -> Result<(), AccessError> {
    let ctx = ctx.ok_or(AccessError::Unauthenticated)?;
    if ctx.is_admin() {
        return Ok(());
    }

    let eligible = ctx
        .department()
        .is_some_and(|d| check(subtype, d, ctx.department_role()));

    if eligible {
        Ok(())
    } else {
        Err(AccessError::DepartmentIneligible {
            subtype: subtype.to_string(),
            allowed: allowed_departments(subtype),
        })
    }
}

fn scoped_company_role(
    ctx: &TenantContext,
    company_id: Option<CompanyId>,
) -> Option<CompanyRole> {
    match company_id {
        None => ctx.company_role(),
        Some(requested) if ctx.company_id() == Some(requested) => ctx.company_role(),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pactum_core::UserId;

    use super::*;
    use crate::context::{CompanyDirectory, Identity, establish};
    use crate::roles::GlobalRole;

    struct Directory {
        owners: HashMap<CompanyId, UserId>,
        members: HashMap<(CompanyId, UserId), CompanyRole>,
    }

    impl Directory {
        fn empty() -> Self {
            Self {
                owners: HashMap::new(),
                members: HashMap::new(),
            }
        }
    }

    impl CompanyDirectory for Directory {
        fn owner_of(&self, company: CompanyId) -> Option<UserId> {
            self.owners.get(&company).copied()
        }

        fn membership_role(&self, company: CompanyId, user: UserId) -> Option<CompanyRole> {
            self.members.get(&(company, user)).copied()
        }
    }

    fn ctx_for(global: &str, department: Option<&str>) -> TenantContext {
        let identity = Identity {
            user_id: UserId::new(),
            global_role: global.to_string(),
            department_role: department.map(str::to_string),
            company_id: None,
        };
        establish(Some(&identity), &Directory::empty()).unwrap()
    }

    #[test]
    fn no_context_denies_everything() {
        assert!(!authorize(None, Permission::ContractView, None));
        assert_eq!(
            authorize_or_fail(None, Permission::ContractView, None),
            Err(AccessError::Unauthenticated)
        );
    }

    #[test]
    fn admin_is_always_allowed() {
        let ctx = ctx_for("ADMIN", None);
        assert!(ctx.is_admin());
        for p in crate::permissions::ALL_PERMISSIONS.iter().copied() {
            assert!(authorize(Some(&ctx), p, None), "admin denied {p}");
        }
    }

    #[test]
    fn viewer_scenario() {
        let ctx = ctx_for("VIEWER", None);
        assert!(authorize(Some(&ctx), Permission::ContractView, None));
        assert!(!authorize(Some(&ctx), Permission::ContractDelete, None));

        let err =
            authorize_or_fail(Some(&ctx), Permission::ContractDelete, None).unwrap_err();
        assert_eq!(
            err,
            AccessError::InsufficientPermission {
                permission: Permission::ContractDelete,
                company_id: None,
            }
        );
    }

    #[test]
    fn company_role_applies_only_in_its_company() {
        let user = UserId::new();
        let company = CompanyId::new();
        let mut dir = Directory::empty();
        dir.owners.insert(company, user);

        let identity = Identity {
            user_id: user,
            global_role: "USER".to_string(),
            department_role: None,
            company_id: Some(company),
        };
        let ctx = establish(Some(&identity), &dir).unwrap();
        assert_eq!(ctx.company_role(), Some(CompanyRole::Owner));

        // In scope: the owner grant applies.
        assert!(authorize(
            Some(&ctx),
            Permission::CompanyMembersManage,
            Some(company)
        ));
        // A different company scope: fail-closed on the company dimension.
        assert!(!authorize(
            Some(&ctx),
            Permission::CompanyMembersManage,
            Some(CompanyId::new())
        ));
    }

    #[test]
    fn malformed_global_role_still_uses_department_grants() {
        let ctx = ctx_for("SUPERUSER", Some("LEGAL_COUNSEL"));
        assert_eq!(ctx.global_role(), None);
        assert!(authorize(Some(&ctx), Permission::ContractViewLegal, None));
        assert!(!authorize(Some(&ctx), Permission::CompanyManage, None));
    }

    #[test]
    fn subtype_checks_surface_department_guidance() {
        let ctx = ctx_for("USER", Some("LEGAL_COUNSEL"));
        assert!(require_subtype_view(Some(&ctx), "NDA").is_ok());

        let err = require_subtype_view(Some(&ctx), "SPONSORSHIP").unwrap_err();
        let AccessError::DepartmentIneligible { subtype, allowed } = err else {
            panic!("expected DepartmentIneligible");
        };
        assert_eq!(subtype, "SPONSORSHIP");
        assert_eq!(allowed, &[Department::Sales]);
    }

    #[test]
    fn subtype_create_requires_create_grant() {
        // Counsel can view NDAs but holds no HR/Sales create grants; from the
        // Legal seat creation needs contract:create:legal on an NDA.
        let ctx = ctx_for("USER", Some("LEGAL_COUNSEL"));
        assert!(require_subtype_create(Some(&ctx), "NDA").is_ok());

        let assistant = ctx_for("USER", Some("LEGAL_ASSISTANT"));
        assert!(require_subtype_create(Some(&assistant), "NDA").is_err());
    }

    #[test]
    fn admin_bypasses_department_gate() {
        let ctx = ctx_for("ADMIN", None);
        assert_eq!(ctx.global_role(), Some(GlobalRole::Admin));
        assert!(require_subtype_view(Some(&ctx), "SPONSORSHIP").is_ok());
        assert!(require_subtype_create(Some(&ctx), "SPONSORSHIP").is_ok());
    }
}
