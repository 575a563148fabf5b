//! # querybm
//!
//! A composable SELECT statement builder.
//!
//! ## Features
//!
//! - **Composable conditions**: column conditions combined into AND/OR trees,
//!   bracketed only where precedence requires it
//! - **Pluggable builders**: condition, sort and limit/offset are independent
//!   [`Builder`]s, each able to add joins, WHERE terms or ORDER BY items
//! - **Join de-duplication**: several builders may request the same join
//! - **Count and rows from one definition**: [`Query`] builds both statements
//!   and decodes rows through a [`FieldMapper`]
//! - **Backend-agnostic execution**: anything implementing [`Db`]; a
//!   PostgreSQL backend and a `deadpool-postgres` pool are included
//!
//! ## Example
//!
//! ```
//! use querybm::prelude::*;
//!
//! struct Book {
//!     id: i64,
//!     title: String,
//! }
//!
//! let fields = Fields::new(["b.id", "b.title"], |row: &dyn Scanner| {
//!     Ok(Book { id: row.get(0)?, title: row.get(1)? })
//! });
//! let condition = and([
//!     field("b.year", gte(2000)),
//!     or([field("b.lang", eq("en")), field("b.lang", eq("ja"))]),
//! ]);
//! let query = Query::new(
//!     (),
//!     "books b",
//!     fields,
//!     condition,
//!     SortItem::desc("b.year"),
//!     LimitOffset::new(20, 0),
//! );
//!
//! let (sql, args) = query.build_rows_select();
//! assert_eq!(
//!     sql,
//!     "SELECT b.id, b.title FROM books b WHERE b.year >= ? AND (b.lang = ? OR b.lang = ?) \
//!      ORDER BY b.year DESC LIMIT ?"
//! );
//! assert_eq!(args.len(), 4);
//! ```

pub mod builder;
pub mod db;
pub mod error;
pub mod expr;
pub mod limit_offset;
pub mod mapper;
pub mod postgres;
pub mod query;
pub mod range;
pub mod sort;
pub mod statement;
pub mod value;

pub use builder::{Builder, Noop};
pub use db::{Db, PreparedStatement, RowSet};
pub use error::{BoxError, Component, QueryError, QueryResult, ValidationError};
pub use expr::{ConditionExpr, Conditions, Connective, FieldBody, FieldCondition};
pub use limit_offset::{DEFAULT_LIMIT, DEFAULT_OFFSET, LimitOffset};
pub use mapper::{FieldMapper, Fields, FromRow, Scanner, ScannerExt};
pub use postgres::{PgDb, PgRows, PgStatement};
pub use query::{COUNT_FIELD, Query, Rows};
pub use range::Range;
pub use sort::{SortDir, SortItem, SortItems};
pub use statement::{Statement, is_count_only};
pub use value::{FromValue, Value};

pub mod prelude;

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::{create_pool, create_pool_with_config, create_pool_with_manager_config};
