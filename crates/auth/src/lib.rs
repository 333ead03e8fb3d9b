//! `pactum-auth` — pure authorization boundary for the contract engine.
//!
//! This crate is intentionally decoupled from HTTP and storage: the policy
//! tables are compile-time data, context establishment consumes an identity
//! value plus a [`CompanyDirectory`] lookup trait, and every check is a pure
//! function over the request's [`TenantContext`].

pub mod authorize;
pub mod context;
pub mod department;
pub mod permissions;
pub mod policy;
pub mod resolver;
pub mod roles;

pub use authorize::{
    AccessError, authorize, authorize_or_fail, require_subtype_create, require_subtype_view,
};
pub use context::{CompanyDirectory, Identity, TenantContext, establish};
pub use department::{can_access_subtype, can_create_subtype};
pub use permissions::{ALL_PERMISSIONS, ParsePermissionError, Permission};
pub use policy::{
    allowed_departments, company_role_permissions, department_role_permissions,
    global_role_permissions,
};
pub use resolver::{effective_permissions, has_permission};
pub use roles::{CompanyRole, Department, DepartmentRole, GlobalRole, ParseRoleError};
