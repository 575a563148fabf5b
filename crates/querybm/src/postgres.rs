//! PostgreSQL backend on top of `tokio-postgres`.
//!
//! Statements are written with `?` placeholders; they are rewritten to
//! PostgreSQL's `$1..$n` before preparing. Operators spelled with `?` (the
//! `jsonb` key tests) cannot be used in statement text; use the equivalent
//! functions such as `jsonb_exists` instead.

use crate::db::{Db, PreparedStatement, RowSet};
use crate::error::{QueryError, QueryResult};
use crate::mapper::Scanner;
use crate::value::Value;
use futures_core::Stream;
use std::pin::Pin;
use std::sync::Arc;
use tokio_postgres::{Client, Row, RowStream};

/// Rewrite `?` placeholders to `$1..$n`.
///
/// A `?` inside a single-quoted literal or a double-quoted identifier is left
/// untouched.
pub fn rewrite_placeholders(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut quote: Option<char> = None;
    let mut n = 0usize;
    for c in sql.chars() {
        match (quote, c) {
            (None, '\'' | '"') => {
                quote = Some(c);
                out.push(c);
            }
            (Some(q), _) if c == q => {
                quote = None;
                out.push(c);
            }
            (None, '?') => {
                n += 1;
                out.push('$');
                out.push_str(&n.to_string());
            }
            _ => out.push(c),
        }
    }
    out
}

/// A [`Db`] over a single shared `tokio_postgres::Client`.
#[derive(Clone)]
pub struct PgDb {
    client: Arc<Client>,
}

impl PgDb {
    pub fn new(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn from_shared(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl std::fmt::Debug for PgDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgDb").finish_non_exhaustive()
    }
}

impl Db for PgDb {
    type Statement = PgStatement;

    async fn prepare(&self, sql: &str) -> QueryResult<PgStatement> {
        let statement = self.client.prepare(&rewrite_placeholders(sql)).await?;
        Ok(PgStatement {
            conn: Conn::Shared(Arc::clone(&self.client)),
            statement,
        })
    }
}

enum Conn {
    Shared(Arc<Client>),
    #[cfg(feature = "pool")]
    Pooled(deadpool_postgres::Client),
}

/// A statement prepared on a PostgreSQL connection.
///
/// The connection is held until the statement is closed, so a pooled
/// connection returns to its pool on [`close`](PreparedStatement::close).
pub struct PgStatement {
    conn: Conn,
    statement: tokio_postgres::Statement,
}

impl PgStatement {
    #[cfg(feature = "pool")]
    pub(crate) fn pooled(client: deadpool_postgres::Client, statement: tokio_postgres::Statement) -> Self {
        Self {
            conn: Conn::Pooled(client),
            statement,
        }
    }

    fn client(&self) -> &Client {
        match &self.conn {
            Conn::Shared(client) => client,
            #[cfg(feature = "pool")]
            Conn::Pooled(client) => client,
        }
    }

    /// Number of parameters the server expects.
    pub fn param_count(&self) -> usize {
        self.statement.params().len()
    }
}

impl PreparedStatement for PgStatement {
    type Row = Row;
    type Rows = PgRows;

    async fn query_row(&self, args: &[Value]) -> QueryResult<Row> {
        let mut rows = self.query(args).await?;
        rows.next().await?.ok_or(QueryError::NoRows)
    }

    async fn query(&self, args: &[Value]) -> QueryResult<PgRows> {
        let stream = self.client().query_raw(&self.statement, args.iter()).await?;
        Ok(PgRows {
            stream: Box::pin(stream),
        })
    }

    async fn close(self) -> QueryResult<()> {
        drop(self);
        Ok(())
    }
}

/// Rows of a PostgreSQL query, streamed from the server as they are read.
pub struct PgRows {
    stream: Pin<Box<RowStream>>,
}

impl RowSet for PgRows {
    type Row = Row;

    async fn next(&mut self) -> QueryResult<Option<Row>> {
        let item = std::future::poll_fn(|cx| self.stream.as_mut().poll_next(cx)).await;
        item.transpose().map_err(QueryError::from)
    }

    async fn close(self) -> QueryResult<()> {
        Ok(())
    }
}

impl Scanner for Row {
    fn column_count(&self) -> usize {
        self.len()
    }

    fn value(&self, idx: usize) -> QueryResult<Value> {
        self.try_get::<_, Value>(idx).map_err(|e| {
            let column = Scanner::column_name(self, idx)
                .map(str::to_string)
                .unwrap_or_else(|| idx.to_string());
            QueryError::decode(column, e.to_string())
        })
    }

    fn column_name(&self, idx: usize) -> Option<&str> {
        self.columns().get(idx).map(|c| c.name())
    }
}
