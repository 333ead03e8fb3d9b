//! In-memory guarded collection.
//!
//! Intended for tests/dev. Every read and write goes through
//! [`inject_access_predicate`]; there is no unguarded path to the rows, so
//! a caller holding only a `GuardedCollection` cannot observe another
//! tenant's records no matter what filter it supplies.

use std::sync::RwLock;

use pactum_auth::TenantContext;

use crate::filter::{FieldLookup, Filter};
use crate::scope::{IsolationError, RecordCategory, RequestScope, inject_access_predicate};

pub struct GuardedCollection<R> {
    category: RecordCategory,
    rows: RwLock<Vec<R>>,
}

impl<R> GuardedCollection<R>
where
    R: FieldLookup + Clone,
{
    pub fn new(category: RecordCategory) -> Self {
        Self {
            category,
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn category(&self) -> RecordCategory {
        self.category
    }

    /// Insert a record on behalf of the caller.
    ///
    /// Writes always require a context, and the record itself must fall
    /// within the caller's access scope (a user cannot insert a row
    /// attributed to someone else).
    pub fn insert(
        &self,
        ctx: Option<&TenantContext>,
        scope: &RequestScope<'_>,
        record: R,
    ) -> Result<(), IsolationError> {
        let ctx = ctx.ok_or(IsolationError::Unauthenticated)?;
        let predicate =
            inject_access_predicate(self.category, Filter::All, Some(ctx), scope)?;
        if !predicate.matches(&record) {
            return Err(IsolationError::OutOfScope);
        }
        if let Ok(mut rows) = self.rows.write() {
            rows.push(record);
        }
        Ok(())
    }

    /// Rows matching `base`, restricted to the caller's access scope.
    pub fn find(
        &self,
        ctx: Option<&TenantContext>,
        scope: &RequestScope<'_>,
        base: Filter,
    ) -> Result<Vec<R>, IsolationError> {
        let predicate = inject_access_predicate(self.category, base, ctx, scope)?;
        let rows = match self.rows.read() {
            Ok(rows) => rows,
            Err(_) => return Ok(vec![]),
        };
        Ok(rows.iter().filter(|r| predicate.matches(*r)).cloned().collect())
    }

    /// Delete rows matching `base` within the caller's access scope.
    ///
    /// Returns the number of rows removed. Rows outside the scope are left
    /// untouched and not reported, so a rejection is indistinguishable from
    /// the row not existing.
    pub fn delete_where(
        &self,
        ctx: Option<&TenantContext>,
        scope: &RequestScope<'_>,
        base: Filter,
    ) -> Result<usize, IsolationError> {
        let ctx = ctx.ok_or(IsolationError::Unauthenticated)?;
        let predicate = inject_access_predicate(self.category, base, Some(ctx), scope)?;
        let mut rows = match self.rows.write() {
            Ok(rows) => rows,
            Err(_) => return Ok(0),
        };
        let before = rows.len();
        rows.retain(|r| !predicate.matches(r));
        Ok(before - rows.len())
    }
}
