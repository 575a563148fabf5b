//! Convenient imports for typical `querybm` usage.
//!
//! ```ignore
//! use querybm::prelude::*;
//! ```

pub use crate::expr::{
    and, between, contains, ends_with, eq, eq_or_in, field, gt, gte, in_list, in_range,
    is_not_null, is_null, like, lt, lte, not_eq, or, starts_with,
};
pub use crate::{
    Builder, ConditionExpr, Db, FieldMapper, Fields, FromRow, LimitOffset, Noop, Query,
    QueryError, QueryResult, Range, Scanner, ScannerExt, SortDir, SortItem, SortItems, Statement,
    ValidationError, Value,
};

#[cfg(feature = "pool")]
pub use crate::{create_pool, create_pool_with_config};
