//! Access-predicate injection.
//!
//! [`inject_access_predicate`] is the hook the persistence path calls before
//! executing any query against a tenant-scoped record type. It merges the
//! caller's filter with the predicate derived from the request's
//! [`TenantContext`], or rejects the operation outright when no context
//! exists (fail-closed).

use std::sync::OnceLock;

use thiserror::Error;

use pactum_auth::TenantContext;
use pactum_core::{CompanyId, UserId};

use crate::filter::{Filter, Value};

/// Well-known field names the injected predicates refer to.
pub mod fields {
    pub const CREATED_BY: &str = "created_by";
    pub const OWNER_USER_ID: &str = "owner_user_id";
    pub const COMPANY_ID: &str = "company_id";
    pub const IS_PUBLIC: &str = "is_public";
}

/// How a tenant-scoped record type is isolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordCategory {
    /// Records visible only to their creator (e.g. drafts).
    OwnershipScoped,
    /// Records shared within the companies the caller belongs to
    /// (e.g. contracts).
    CompanyScoped,
    /// Shareable records with a public flag (e.g. templates).
    VisibilityScoped,
    /// Strictly personal records (sessions, settings).
    UserPrivate,
}

/// Operation rejected before reaching persistence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IsolationError {
    /// No tenant context and the record type is not publicly readable.
    #[error("unauthenticated")]
    Unauthenticated,

    /// A write targeted a record outside the caller's access scope.
    #[error("record outside caller's access scope")]
    OutOfScope,
}

/// Company membership expansion, supplied by the persistence layer.
///
/// "Belongs to" means created the company or appears in its member list.
pub trait MembershipResolver: Send + Sync {
    fn companies_of(&self, user: UserId) -> Vec<CompanyId>;
}

/// Per-request memo over [`MembershipResolver`].
///
/// One request can issue many queries; the membership expansion is resolved
/// at most once per request, so predicate construction adds no N+1 lookups.
/// Create one per request, next to the context, and drop both together.
pub struct RequestScope<'a> {
    resolver: &'a dyn MembershipResolver,
    companies: OnceLock<Vec<CompanyId>>,
}

impl<'a> RequestScope<'a> {
    pub fn new(resolver: &'a dyn MembershipResolver) -> Self {
        Self {
            resolver,
            companies: OnceLock::new(),
        }
    }

    fn companies(&self, user: UserId) -> &[CompanyId] {
        self.companies
            .get_or_init(|| self.resolver.companies_of(user))
    }
}

/// Merge the access predicate for `category` into `base`.
///
/// The result is always `AND(predicate, base)` at the top level; `OR` only
/// ever appears inside the injected predicate, so the caller's filter cannot
/// widen access. An admin context gets `base` back untouched.
pub fn inject_access_predicate(
    category: RecordCategory,
    base: Filter,
    ctx: Option<&TenantContext>,
    scope: &RequestScope<'_>,
) -> Result<Filter, IsolationError> {
    let Some(ctx) = ctx else {
        // Unauthenticated: public-flagged reads only.
        return match category {
            RecordCategory::VisibilityScoped => Ok(Filter::and(vec![
                Filter::eq(fields::IS_PUBLIC, true),
                base,
            ])),
            _ => Err(IsolationError::Unauthenticated),
        };
    };

    if ctx.is_admin() {
        return Ok(base);
    }

    let user = ctx.user_id();
    let predicate = match category {
        RecordCategory::OwnershipScoped => Filter::eq(fields::CREATED_BY, user),
        RecordCategory::CompanyScoped => {
            let companies = scope
                .companies(user)
                .iter()
                .copied()
                .map(Value::from)
                .collect();
            Filter::or(vec![
                Filter::eq(fields::CREATED_BY, user),
                Filter::any_of(fields::COMPANY_ID, companies),
            ])
        }
        RecordCategory::VisibilityScoped => {
            let mut clauses = vec![
                Filter::eq(fields::IS_PUBLIC, true),
                Filter::eq(fields::CREATED_BY, user),
            ];
            if let Some(company) = ctx.company_id() {
                clauses.push(Filter::eq(fields::COMPANY_ID, company));
            }
            Filter::or(clauses)
        }
        RecordCategory::UserPrivate => Filter::eq(fields::OWNER_USER_ID, user),
    };

    Ok(Filter::and(vec![predicate, base]))
}
