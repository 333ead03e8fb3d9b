//! `pactum-isolation` — tenant isolation at the data-access boundary.
//!
//! Every query against a declared tenant-scoped record type passes through
//! [`inject_access_predicate`], which merges an access predicate derived
//! from the request's tenant context into the caller's filter, or rejects
//! the operation when no context exists. The predicate is a typed filter
//! AST, so "callers can narrow but never widen" is a property of the tree
//! shape rather than a convention.

pub mod filter;
pub mod scope;
pub mod store;

pub use filter::{FieldLookup, Filter, Value};
pub use scope::{
    IsolationError, MembershipResolver, RecordCategory, RequestScope, fields,
    inject_access_predicate,
};
pub use store::GuardedCollection;
