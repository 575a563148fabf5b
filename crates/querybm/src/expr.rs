//! Condition expressions for WHERE and JOIN ... ON clauses.
//!
//! Leaves are [`FieldCondition`]s (a column paired with a [`FieldBody`] such as
//! [`eq`] or [`in_list`]); [`Conditions`] combine expressions with AND/OR.
//! Every expression renders SQL with positional `?` placeholders and yields the
//! values for those placeholders in the same order.
//!
//! # Example
//! ```
//! use querybm::expr::{and, field, eq, in_list, or};
//!
//! let expr = and([
//!     field("status", eq("active")),
//!     or([field("role", eq("admin")), field("team_id", in_list([1, 2]))]),
//! ]);
//! assert_eq!(expr.render(), "status = ? AND (role = ? OR team_id IN (?,?))");
//! assert_eq!(expr.values().len(), 3);
//! ```

mod conditions;
mod field;

pub use conditions::{Conditions, and, or};
pub use field::{
    FieldBody, FieldCondition, between, contains, ends_with, eq, eq_or_in, field, gt, gte,
    in_list, in_range, is_not_null, is_null, like, lt, lte, not_eq, starts_with,
};

use crate::error::ValidationError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Logical operator joining the children of a [`Conditions`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connective {
    #[default]
    And,
    Or,
}

impl Connective {
    /// The separator placed between rendered children.
    pub fn separator(self) -> &'static str {
        match self {
            Connective::And => " AND ",
            Connective::Or => " OR ",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.separator().trim())
    }
}

impl FromStr for Connective {
    type Err = ValidationError;

    /// Case- and whitespace-insensitive: `" and "`, `"AND"` and `"And"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("and") {
            Ok(Connective::And)
        } else if s.eq_ignore_ascii_case("or") {
            Ok(Connective::Or)
        } else {
            Err(ValidationError::invalid(format!("unknown connective '{s}'")))
        }
    }
}

/// A renderable boolean expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionExpr {
    /// A condition on a single column.
    Field(FieldCondition),
    /// An AND/OR combination of expressions.
    Conditions(Conditions),
    /// Raw SQL with one `?` per value.
    ///
    /// Rendered verbatim; it is never bracketed automatically, so a raw
    /// fragment containing a top-level `OR` should carry its own parentheses.
    Raw { sql: String, values: Vec<Value> },
}

impl ConditionExpr {
    /// Create a raw SQL expression.
    pub fn raw<I, V>(sql: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        ConditionExpr::Raw {
            sql: sql.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Render the SQL text and collect its placeholder values in one pass.
    pub fn build(&self) -> (String, Vec<Value>) {
        match self {
            ConditionExpr::Field(fc) => fc.build(),
            ConditionExpr::Conditions(c) => c.build(),
            ConditionExpr::Raw { sql, values } => {
                if sql.is_empty() {
                    (String::new(), Vec::new())
                } else {
                    (sql.clone(), values.clone())
                }
            }
        }
    }

    /// SQL text with `?` placeholders.
    pub fn render(&self) -> String {
        self.build().0
    }

    /// Placeholder values, in placeholder order.
    pub fn values(&self) -> Vec<Value> {
        self.build().1
    }

    /// The connective at the top level of the rendered text, if any.
    ///
    /// An enclosing [`Conditions`] brackets a child whose connective differs
    /// from its own. A node left with a single rendering child reports that
    /// child's connective.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            ConditionExpr::Field(fc) => fc.connective(),
            ConditionExpr::Conditions(c) => c.rendered_connective(),
            ConditionExpr::Raw { .. } => None,
        }
    }

    /// Returns `true` if this expression renders nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            ConditionExpr::Field(fc) => fc.is_empty(),
            ConditionExpr::Conditions(c) => c.render().is_empty(),
            ConditionExpr::Raw { sql, .. } => sql.is_empty(),
        }
    }
}

impl From<FieldCondition> for ConditionExpr {
    fn from(fc: FieldCondition) -> Self {
        ConditionExpr::Field(fc)
    }
}

impl From<Conditions> for ConditionExpr {
    fn from(c: Conditions) -> Self {
        ConditionExpr::Conditions(c)
    }
}

#[cfg(test)]
mod tests;
