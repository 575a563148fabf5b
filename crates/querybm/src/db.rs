//! The execution boundary between [`Query`](crate::Query) and a database.
//!
//! A [`Db`] prepares SQL into a [`PreparedStatement`], which runs with
//! positional arguments and yields either one row or a [`RowSet`]. Statements
//! and row sets are scoped resources and must be closed by whoever holds them.
//!
//! Cancellation and timeouts belong to the caller: drop the future, or wrap it
//! in `tokio::time::timeout`.

use crate::error::QueryResult;
use crate::mapper::Scanner;
use crate::value::Value;
use std::future::Future;

/// A database that can prepare statements.
pub trait Db: Send + Sync {
    type Statement: PreparedStatement;

    /// Prepare `sql`, written with positional `?` placeholders.
    fn prepare(&self, sql: &str) -> impl Future<Output = QueryResult<Self::Statement>> + Send;
}

/// A prepared statement.
pub trait PreparedStatement: Send + Sync {
    type Row: Scanner + Send;
    type Rows: RowSet<Row = Self::Row>;

    /// Run the statement and return its first row.
    ///
    /// Returns [`QueryError::NoRows`](crate::QueryError::NoRows) if nothing matched.
    fn query_row(&self, args: &[Value]) -> impl Future<Output = QueryResult<Self::Row>> + Send;

    /// Run the statement and return all matching rows.
    fn query(&self, args: &[Value]) -> impl Future<Output = QueryResult<Self::Rows>> + Send;

    /// Release the statement.
    fn close(self) -> impl Future<Output = QueryResult<()>> + Send;
}

/// Rows produced by [`PreparedStatement::query`].
pub trait RowSet: Send {
    type Row: Scanner + Send;

    /// The next row, or `None` once the set is exhausted.
    ///
    /// An error here ends iteration; it is the deferred error of the query.
    fn next(&mut self) -> impl Future<Output = QueryResult<Option<Self::Row>>> + Send;

    /// Release the row set.
    fn close(self) -> impl Future<Output = QueryResult<()>> + Send;
}

impl<D: Db + ?Sized> Db for &D {
    type Statement = D::Statement;

    fn prepare(&self, sql: &str) -> impl Future<Output = QueryResult<Self::Statement>> + Send {
        (**self).prepare(sql)
    }
}

impl<D: Db + ?Sized> Db for std::sync::Arc<D> {
    type Statement = D::Statement;

    fn prepare(&self, sql: &str) -> impl Future<Output = QueryResult<Self::Statement>> + Send {
        (**self).prepare(sql)
    }
}
