//! The query orchestrator: builds count and row statements from a condition,
//! a sort and a limit/offset builder, and executes them through a [`Db`].
//!
//! # Example
//!
//! ```ignore
//! use querybm::prelude::*;
//!
//! let query = Query::new(
//!     pool,
//!     "users",
//!     Fields::<User>::from_row(["id", "name"]),
//!     field("status", eq("active")),
//!     SortItem::desc("created_at"),
//!     LimitOffset::new(10, 0),
//! );
//! query.validate()?;
//! let total = query.count().await?;
//! let users = query.list().await?;
//! ```

use crate::builder::Builder;
use crate::db::{Db, PreparedStatement, RowSet};
use crate::error::{Component, QueryError, QueryResult};
use crate::mapper::{FieldMapper, ScannerExt};
use crate::statement::Statement;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Column expression selected by count statements.
pub const COUNT_FIELD: &str = "COUNT(*) AS count";

/// A reusable SELECT over one table for model `M`.
///
/// Every build starts from a fresh [`Statement`], so a query can be cloned and
/// run concurrently as long as its builders hold no shared mutable state.
pub struct Query<D, M> {
    db: D,
    table: String,
    fields: Arc<dyn FieldMapper<M>>,
    condition: Arc<dyn Builder>,
    sort: Arc<dyn Builder>,
    limit_offset: Arc<dyn Builder>,
}

impl<D, M> Query<D, M> {
    pub fn new(
        db: D,
        table: impl Into<String>,
        fields: impl FieldMapper<M> + 'static,
        condition: impl Builder + 'static,
        sort: impl Builder + 'static,
        limit_offset: impl Builder + 'static,
    ) -> Self {
        Self {
            db,
            table: table.into(),
            fields: Arc::new(fields),
            condition: Arc::new(condition),
            sort: Arc::new(sort),
            limit_offset: Arc::new(limit_offset),
        }
    }

    pub fn db(&self) -> &D {
        &self.db
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Replace the condition builder.
    pub fn with_condition(mut self, condition: impl Builder + 'static) -> Self {
        self.condition = Arc::new(condition);
        self
    }

    /// Replace the sort builder.
    pub fn with_sort(mut self, sort: impl Builder + 'static) -> Self {
        self.sort = Arc::new(sort);
        self
    }

    /// Replace the limit/offset builder.
    pub fn with_limit_offset(mut self, limit_offset: impl Builder + 'static) -> Self {
        self.limit_offset = Arc::new(limit_offset);
        self
    }

    /// Validate the condition, sort and limit/offset builders, in that order.
    ///
    /// The first failure is returned tagged with its [`Component`].
    pub fn validate(&self) -> QueryResult<()> {
        let checks = [
            (Component::Condition, &self.condition),
            (Component::Sort, &self.sort),
            (Component::LimitOffset, &self.limit_offset),
        ];
        for (component, builder) in checks {
            builder
                .validate()
                .map_err(|e| QueryError::validation(component, e))?;
        }
        Ok(())
    }

    /// `SELECT COUNT(*) AS count FROM ...` with only the condition applied.
    pub fn build_count_select(&self) -> (String, Vec<Value>) {
        let mut st = Statement::new(&self.table, [COUNT_FIELD]);
        self.condition.build(&mut st);
        st.build()
    }

    /// The rows statement: field mapper first, then condition, sort and
    /// limit/offset.
    pub fn build_rows_select(&self) -> (String, Vec<Value>) {
        let mut st = Statement::new(&self.table, self.fields.fields());
        self.fields.build(&mut st);
        self.condition.build(&mut st);
        self.sort.build(&mut st);
        self.limit_offset.build(&mut st);
        st.build()
    }
}

impl<D: Db, M> Query<D, M> {
    async fn prepare(&self, sql: String, args: Vec<Value>) -> QueryResult<(D::Statement, Vec<Value>)> {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "querybm.sql", sql = %sql, param_count = args.len(), "prepare");

        let stmt = self.db.prepare(&sql).await?;
        Ok((stmt, args))
    }

    /// Prepare the count statement. The caller must close it.
    pub async fn count_statement(&self) -> QueryResult<(D::Statement, Vec<Value>)> {
        let (sql, args) = self.build_count_select();
        self.prepare(sql, args).await
    }

    /// Prepare the rows statement. The caller must close it.
    pub async fn rows_statement(&self) -> QueryResult<(D::Statement, Vec<Value>)> {
        let (sql, args) = self.build_rows_select();
        self.prepare(sql, args).await
    }

    /// Number of rows matching the condition. A count query returning no
    /// row counts as zero.
    pub async fn count(&self) -> QueryResult<i64> {
        let (stmt, args) = self.count_statement().await?;
        let result = match stmt.query_row(&args).await {
            Ok(row) => row.get::<i64>(0),
            Err(QueryError::NoRows) => Ok(0),
            Err(e) => Err(e),
        };
        finish(result, stmt.close().await)
    }

    /// The first row of the rows statement, undecoded.
    ///
    /// Returns [`QueryError::NoRows`] if nothing matched.
    pub async fn first_row(&self) -> QueryResult<<D::Statement as PreparedStatement>::Row> {
        let (stmt, args) = self.rows_statement().await?;
        let result = stmt.query_row(&args).await;
        finish(result, stmt.close().await)
    }

    /// The first matching row decoded into `M`.
    ///
    /// Returns [`QueryError::NoRows`] if nothing matched.
    pub async fn first(&self) -> QueryResult<M> {
        let row = self.first_row().await?;
        self.fields.map(&row)
    }

    /// Run the rows statement and return an open row set.
    ///
    /// The returned [`Rows`] owns the statement; call [`Rows::close`] when done.
    pub async fn rows(&self) -> QueryResult<Rows<D::Statement>> {
        let (stmt, args) = self.rows_statement().await?;
        match stmt.query(&args).await {
            Ok(rows) => Ok(Rows {
                statement: stmt,
                rows,
            }),
            Err(e) => finish(Err(e), stmt.close().await),
        }
    }

    /// All matching rows decoded into `M`.
    ///
    /// The first decode or iteration error is returned and the rows decoded so
    /// far are discarded.
    pub async fn list(&self) -> QueryResult<Vec<M>> {
        let mut rows = self.rows().await?;
        let result = self.collect(&mut rows).await;
        finish(result, rows.close().await)
    }

    async fn collect(&self, rows: &mut Rows<D::Statement>) -> QueryResult<Vec<M>> {
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(self.fields.map(&row)?);
        }
        Ok(items)
    }
}

impl<D: Clone, M> Clone for Query<D, M> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            table: self.table.clone(),
            fields: Arc::clone(&self.fields),
            condition: Arc::clone(&self.condition),
            sort: Arc::clone(&self.sort),
            limit_offset: Arc::clone(&self.limit_offset),
        }
    }
}

impl<D, M> fmt::Debug for Query<D, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("table", &self.table)
            .field("fields", &self.fields.fields())
            .finish_non_exhaustive()
    }
}

/// An open row set together with the statement that produced it.
pub struct Rows<S: PreparedStatement> {
    statement: S,
    rows: S::Rows,
}

impl<S: PreparedStatement> Rows<S> {
    /// The next row, or `None` once the set is exhausted.
    pub async fn next(&mut self) -> QueryResult<Option<S::Row>> {
        self.rows.next().await
    }

    /// Close the row set, then the statement. The first close error is returned.
    pub async fn close(self) -> QueryResult<()> {
        let rows_closed = self.rows.close().await;
        let statement_closed = self.statement.close().await;
        finish(rows_closed, statement_closed)
    }
}

/// Combine an operation's result with the result of releasing its resources.
///
/// An operation error wins over a close error, which is then only logged.
fn finish<T>(result: QueryResult<T>, closed: QueryResult<()>) -> QueryResult<T> {
    match (result, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(_close_err)) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(target: "querybm.sql", error = %_close_err, "close failed after error");
            Err(e)
        }
    }
}
