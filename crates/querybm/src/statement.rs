//! SELECT statement assembly.
//!
//! A [`Statement`] is created fresh for every build, mutated by the builders of
//! a [`Query`](crate::Query), and consumed by [`Statement::build`], which
//! linearizes the clauses into SQL text and the matching argument list:
//!
//! ```text
//! SELECT <fields> FROM <table + joins> [WHERE ...] [ORDER BY ...] [LIMIT ? [OFFSET ?]]
//! ```
//!
//! # Example
//! ```
//! use querybm::Statement;
//! use querybm::expr::{eq, field};
//!
//! let mut st = Statement::new("users", ["id", "name"]);
//! st.where_.add(field("status", eq("active")));
//! st.sort.push("created_at DESC");
//! let (sql, args) = st.build();
//! assert_eq!(sql, "SELECT id, name FROM users WHERE status = ? ORDER BY created_at DESC");
//! assert_eq!(args.len(), 1);
//! ```

mod block;
mod table;
mod where_block;

pub use block::Block;
pub use table::{Join, JoinKind, TableBlock, TableRef};
pub use where_block::WhereBlock;

use crate::expr::Connective;
use crate::value::Value;
use std::sync::OnceLock;

fn count_re() -> &'static regex::Regex {
    static COUNT_RE: OnceLock<regex::Regex> = OnceLock::new();
    COUNT_RE.get_or_init(|| {
        regex::Regex::new(r"(?i)^\s*COUNT\(.+\)").expect("invalid built-in COUNT regex")
    })
}

/// Returns `true` if `fields` is a single `COUNT(...)` expression.
///
/// Condition builders use this to skip joins that only row queries need.
pub fn is_count_only<S: AsRef<str>>(fields: &[S]) -> bool {
    match fields {
        [only] => count_re().is_match(only.as_ref()),
        _ => false,
    }
}

/// A SELECT statement under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Columns or expressions to select; empty selects `*`.
    pub fields: Vec<String>,
    /// FROM target and joins.
    pub table: TableBlock,
    /// WHERE conditions, AND-joined at the root.
    pub where_: WhereBlock,
    /// ORDER BY items, comma-joined.
    pub sort: Block,
    /// `LIMIT ?` / `OFFSET ?` fragments, space-joined.
    pub limit_offset: Block,
}

impl Statement {
    pub fn new<I, S>(table: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            table: TableBlock::new(table),
            where_: WhereBlock::new(Connective::And),
            sort: Block::new(", "),
            limit_offset: Block::new(" "),
        }
    }

    /// Returns `true` if this statement selects a single `COUNT(...)`.
    pub fn is_count_only(&self) -> bool {
        is_count_only(&self.fields)
    }

    /// Render the final SQL and its arguments, in clause order.
    pub fn build(self) -> (String, Vec<Value>) {
        let fields = if self.fields.is_empty() {
            "*".to_string()
        } else {
            self.fields.join(", ")
        };
        let mut parts = vec!["SELECT".to_string(), fields];
        let mut args = Vec::new();

        let (table, values) = self.table.build();
        parts.push("FROM".to_string());
        parts.push(table);
        args.extend(values);

        if !self.where_.is_empty() {
            let (content, values) = self.where_.build();
            parts.push(format!("WHERE {content}"));
            args.extend(values);
        }

        if !self.sort.is_empty() {
            let (content, values) = self.sort.build();
            parts.push(format!("ORDER BY {content}"));
            args.extend(values);
        }

        if !self.limit_offset.is_empty() {
            let (content, values) = self.limit_offset.build();
            parts.push(content);
            args.extend(values);
        }

        (parts.join(" "), args)
    }
}

#[cfg(test)]
mod tests;
