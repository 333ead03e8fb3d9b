//! Request-scoped tenant context.
//!
//! The context is an explicit per-request **value**: it is built once at the
//! start of request handling and threaded as a parameter down to whatever
//! needs it. There is deliberately no process-wide "current context" slot —
//! a shared mutable variable would let one request observe another's
//! identity between establish and clear. Clearing is simply dropping the
//! value at the end of the request.

use serde::{Deserialize, Serialize};

use pactum_core::{CompanyId, UserId};

use crate::roles::{CompanyRole, Department, DepartmentRole, GlobalRole};

/// What the external identity/session collaborator resolves for a caller.
///
/// Role values are raw strings here because they come from outside the
/// process (session record, token claims). [`establish`] parses them;
/// unrecognized values are logged and degrade to "no role" rather than
/// failing the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: UserId,
    pub global_role: String,
    pub department_role: Option<String>,
    /// Company the caller asked to act within, if any.
    pub company_id: Option<CompanyId>,
}

/// Company ownership/membership lookups, supplied by the persistence layer.
///
/// These are the only lookups context establishment performs; implementations
/// should answer from already-loaded state or a request-local cache.
pub trait CompanyDirectory: Send + Sync {
    /// The creator of the company, who is its owner by derivation.
    fn owner_of(&self, company: CompanyId) -> Option<UserId>;

    /// The stored membership role of `user` in `company`, if a member.
    fn membership_role(&self, company: CompanyId, user: UserId) -> Option<CompanyRole>;
}

/// Per-request authorization context.
///
/// Immutable once established. `Send + Sync` so one request may move it
/// across its own task boundaries, but it must never be stored anywhere a
/// second request could read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    user_id: UserId,
    company_id: Option<CompanyId>,
    is_admin: bool,
    global_role: Option<GlobalRole>,
    company_role: Option<CompanyRole>,
    department_role: Option<DepartmentRole>,
}

impl TenantContext {
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn company_id(&self) -> Option<CompanyId> {
        self.company_id
    }

    /// Full-access bypass: department and company predicates do not apply.
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// `None` when the supplied global role string was unrecognized
    /// (fail-closed: contributes no permissions).
    pub fn global_role(&self) -> Option<GlobalRole> {
        self.global_role
    }

    pub fn company_role(&self) -> Option<CompanyRole> {
        self.company_role
    }

    pub fn department_role(&self) -> Option<DepartmentRole> {
        self.department_role
    }

    /// The user's home department, derived from the department role.
    pub fn department(&self) -> Option<Department> {
        self.department_role.map(|r| r.department())
    }
}

/// Build the per-request context from a resolved identity.
///
/// Returns `None` for `None` identity: unauthenticated is a state, not an
/// error. Downstream consumers must treat a missing context as most
/// restrictive (public-only reads, no writes).
///
/// Company role resolution checks ownership first (the company's creator is
/// its owner), then the membership record.
pub fn establish(
    identity: Option<&Identity>,
    directory: &dyn CompanyDirectory,
) -> Option<TenantContext> {
    let identity = identity?;

    let global_role = parse_role::<GlobalRole>("global", &identity.global_role);
    let department_role = identity
        .department_role
        .as_deref()
        .and_then(|raw| parse_role::<DepartmentRole>("department", raw));

    let company_role = identity.company_id.and_then(|company| {
        if directory.owner_of(company) == Some(identity.user_id) {
            Some(CompanyRole::Owner)
        } else {
            directory.membership_role(company, identity.user_id)
        }
    });

    Some(TenantContext {
        user_id: identity.user_id,
        company_id: identity.company_id,
        is_admin: global_role == Some(GlobalRole::Admin),
        global_role,
        company_role,
        department_role,
    })
}

fn parse_role<R: core::str::FromStr>(kind: &str, raw: &str) -> Option<R> {
    match raw.parse() {
        Ok(role) => Some(role),
        Err(_) => {
            // Fail-closed: an unknown role grants nothing and must not
            // crash the request path.
            tracing::warn!(role = raw, kind, "unrecognized role; treating as no role");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakeDirectory {
        owners: HashMap<CompanyId, UserId>,
        members: HashMap<(CompanyId, UserId), CompanyRole>,
    }

    impl CompanyDirectory for FakeDirectory {
        fn owner_of(&self, company: CompanyId) -> Option<UserId> {
            self.owners.get(&company).copied()
        }

        fn membership_role(&self, company: CompanyId, user: UserId) -> Option<CompanyRole> {
            self.members.get(&(company, user)).copied()
        }
    }

    fn identity(user_id: UserId, company: Option<CompanyId>) -> Identity {
        Identity {
            user_id,
            global_role: "USER".to_string(),
            department_role: None,
            company_id: company,
        }
    }

    #[test]
    fn no_identity_means_no_context() {
        let dir = FakeDirectory::default();
        assert!(establish(None, &dir).is_none());
    }

    #[test]
    fn owner_is_derived_from_creatorship() {
        let user = UserId::new();
        let company = CompanyId::new();
        let mut dir = FakeDirectory::default();
        dir.owners.insert(company, user);
        // A stale membership record must not shadow derived ownership.
        dir.members.insert((company, user), CompanyRole::Member);

        let ctx = establish(Some(&identity(user, Some(company))), &dir).unwrap();
        assert_eq!(ctx.company_role(), Some(CompanyRole::Owner));
    }

    #[test]
    fn membership_lookup_when_not_owner() {
        let user = UserId::new();
        let company = CompanyId::new();
        let mut dir = FakeDirectory::default();
        dir.owners.insert(company, UserId::new());
        dir.members.insert((company, user), CompanyRole::Manager);

        let ctx = establish(Some(&identity(user, Some(company))), &dir).unwrap();
        assert_eq!(ctx.company_role(), Some(CompanyRole::Manager));
    }

    #[test]
    fn non_member_has_no_company_role() {
        let user = UserId::new();
        let company = CompanyId::new();
        let mut dir = FakeDirectory::default();
        dir.owners.insert(company, UserId::new());

        let ctx = establish(Some(&identity(user, Some(company))), &dir).unwrap();
        assert_eq!(ctx.company_role(), None);
    }

    #[test]
    fn admin_flag_comes_from_global_role() {
        let dir = FakeDirectory::default();
        let id = Identity {
            user_id: UserId::new(),
            global_role: "ADMIN".to_string(),
            department_role: None,
            company_id: None,
        };
        let ctx = establish(Some(&id), &dir).unwrap();
        assert!(ctx.is_admin());
    }

    #[test]
    fn malformed_roles_degrade_to_none() {
        let dir = FakeDirectory::default();
        let id = Identity {
            user_id: UserId::new(),
            global_role: "SUPERUSER".to_string(),
            department_role: Some("WIZARD".to_string()),
            company_id: None,
        };
        let ctx = establish(Some(&id), &dir).unwrap();
        assert_eq!(ctx.global_role(), None);
        assert_eq!(ctx.department_role(), None);
        assert!(!ctx.is_admin());
    }

    #[test]
    fn department_derived_from_role() {
        let dir = FakeDirectory::default();
        let id = Identity {
            user_id: UserId::new(),
            global_role: "USER".to_string(),
            department_role: Some("FINANCE_SPECIALIST".to_string()),
            company_id: None,
        };
        let ctx = establish(Some(&id), &dir).unwrap();
        assert_eq!(ctx.department(), Some(Department::Finance));
    }
}
