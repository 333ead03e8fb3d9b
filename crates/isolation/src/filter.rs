//! Typed query-filter expressions.
//!
//! Access predicates and caller filters share one small AST instead of
//! dynamically shaped filter objects. The shape makes the composition rule
//! structural: the injection step always produces `And([predicate, base])`,
//! and `Or` appears only inside the injected predicate's own clauses, so a
//! caller-supplied filter can narrow but never widen the visible set.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pactum_core::{CompanyId, UserId};

/// A scalar value a filter can compare against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Str(String),
    Id(Uuid),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<UserId> for Value {
    fn from(value: UserId) -> Self {
        Value::Id(value.into())
    }
}

impl From<CompanyId> for Value {
    fn from(value: CompanyId) -> Self {
        Value::Id(value.into())
    }
}

/// Row-level access to named fields, implemented by stored record types.
///
/// A missing field compares as a non-match (fail-closed).
pub trait FieldLookup {
    fn field(&self, name: &str) -> Option<Value>;
}

/// A filter expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    /// Matches every row. The identity for `And`.
    All,
    /// Field equals value.
    Eq(Cow<'static, str>, Value),
    /// Field equals one of the listed values. An empty list matches nothing.
    In(Cow<'static, str>, Vec<Value>),
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Filter::Eq(field.into(), value.into())
    }

    pub fn any_of(field: impl Into<Cow<'static, str>>, values: Vec<Value>) -> Self {
        Filter::In(field.into(), values)
    }

    pub fn and(clauses: Vec<Filter>) -> Self {
        Filter::And(clauses)
    }

    pub fn or(clauses: Vec<Filter>) -> Self {
        Filter::Or(clauses)
    }

    /// Evaluate the expression against one row.
    pub fn matches(&self, record: &dyn FieldLookup) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq(field, value) => record.field(field).as_ref() == Some(value),
            Filter::In(field, values) => record
                .field(field)
                .is_some_and(|v| values.contains(&v)),
            Filter::And(clauses) => clauses.iter().all(|c| c.matches(record)),
            Filter::Or(clauses) => clauses.iter().any(|c| c.matches(record)),
        }
    }

    /// Every identifier value the expression references, in tree order.
    ///
    /// Used to assert that an injected predicate only ever mentions the
    /// issuing request's own identity.
    pub fn referenced_ids(&self) -> Vec<Uuid> {
        let mut out = Vec::new();
        self.collect_ids(&mut out);
        out
    }

    fn collect_ids(&self, out: &mut Vec<Uuid>) {
        match self {
            Filter::All => {}
            Filter::Eq(_, value) => {
                if let Value::Id(id) = value {
                    out.push(*id);
                }
            }
            Filter::In(_, values) => {
                out.extend(values.iter().filter_map(|v| match v {
                    Value::Id(id) => Some(*id),
                    _ => None,
                }));
            }
            Filter::And(clauses) | Filter::Or(clauses) => {
                for c in clauses {
                    c.collect_ids(out);
                }
            }
        }
    }
}
