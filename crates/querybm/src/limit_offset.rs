//! LIMIT/OFFSET pagination.

use crate::builder::Builder;
use crate::statement::Statement;
use crate::value::Value;

/// Rows per page when no positive limit is given.
pub const DEFAULT_LIMIT: i64 = 100;

/// Starting row when a negative offset is given.
pub const DEFAULT_OFFSET: i64 = 0;

/// Renders `LIMIT ?` and, when the offset is positive, `OFFSET ?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitOffset {
    limit: i64,
    offset: i64,
}

impl LimitOffset {
    /// A non-positive `limit` becomes [`DEFAULT_LIMIT`]; a negative `offset`
    /// becomes [`DEFAULT_OFFSET`].
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: if limit <= 0 { DEFAULT_LIMIT } else { limit },
            offset: if offset < 0 { DEFAULT_OFFSET } else { offset },
        }
    }

    /// 1-based page number and page size. Pages before the first are
    /// treated as the first.
    pub fn page(page: i64, per_page: i64) -> Self {
        let limit = if per_page <= 0 { DEFAULT_LIMIT } else { per_page };
        let offset = (page.max(1) - 1).saturating_mul(limit);
        Self::new(limit, offset)
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for LimitOffset {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_OFFSET)
    }
}

impl Builder for LimitOffset {
    fn build(&self, st: &mut Statement) {
        if self.limit <= 0 {
            return;
        }
        st.limit_offset.add("LIMIT ?", vec![Value::Int(self.limit)]);
        if self.offset > 0 {
            st.limit_offset.add("OFFSET ?", vec![Value::Int(self.offset)]);
        }
    }
}
