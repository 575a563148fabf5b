//! Column-scoped condition bodies.

use super::{ConditionExpr, Connective};
use crate::value::Value;

/// The operator and operands of a column condition, independent of the column.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldBody {
    /// `field OP ?`
    Compare { op: &'static str, value: Value },
    /// `field IN (?,?,...)`; an empty list renders nothing.
    In(Vec<Value>),
    /// `field BETWEEN ? AND ?` (inclusive)
    Between(Value, Value),
    /// Half-open `field >= ? AND field < ?`, degrading to the present bound.
    InRange {
        start: Option<Value>,
        end: Option<Value>,
    },
    /// `field <keyword>` with no operand, e.g. `IS NULL`.
    Static(&'static str),
}

impl FieldBody {
    /// Render this body against `field`.
    pub fn build(&self, field: &str) -> (String, Vec<Value>) {
        match self {
            FieldBody::Compare { op, value } => (format!("{field} {op} ?"), vec![value.clone()]),
            FieldBody::In(values) => {
                if values.is_empty() {
                    return (String::new(), Vec::new());
                }
                let placeholders = vec!["?"; values.len()].join(",");
                (format!("{field} IN ({placeholders})"), values.clone())
            }
            FieldBody::Between(start, end) => (
                format!("{field} BETWEEN ? AND ?"),
                vec![start.clone(), end.clone()],
            ),
            FieldBody::InRange { start, end } => match (start, end) {
                (Some(s), Some(e)) => (
                    format!("{field} >= ? AND {field} < ?"),
                    vec![s.clone(), e.clone()],
                ),
                (Some(s), None) => (format!("{field} >= ?"), vec![s.clone()]),
                (None, Some(e)) => (format!("{field} < ?"), vec![e.clone()]),
                (None, None) => (String::new(), Vec::new()),
            },
            FieldBody::Static(keyword) => (format!("{field} {keyword}"), Vec::new()),
        }
    }

    /// A two-sided range renders two AND-joined comparisons.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            FieldBody::InRange {
                start: Some(_),
                end: Some(_),
            } => Some(Connective::And),
            _ => None,
        }
    }

    /// Returns `true` if this body renders nothing regardless of the column.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldBody::In(values) => values.is_empty(),
            FieldBody::InRange { start, end } => start.is_none() && end.is_none(),
            _ => false,
        }
    }
}

fn compare(op: &'static str, value: impl Into<Value>) -> FieldBody {
    FieldBody::Compare {
        op,
        value: value.into(),
    }
}

/// `field = ?`
pub fn eq(value: impl Into<Value>) -> FieldBody {
    compare("=", value)
}

/// `field <> ?`
pub fn not_eq(value: impl Into<Value>) -> FieldBody {
    compare("<>", value)
}

/// `field > ?`
pub fn gt(value: impl Into<Value>) -> FieldBody {
    compare(">", value)
}

/// `field >= ?`
pub fn gte(value: impl Into<Value>) -> FieldBody {
    compare(">=", value)
}

/// `field < ?`
pub fn lt(value: impl Into<Value>) -> FieldBody {
    compare("<", value)
}

/// `field <= ?`
pub fn lte(value: impl Into<Value>) -> FieldBody {
    compare("<=", value)
}

/// `field LIKE ?` with the pattern used as given.
pub fn like(pattern: impl Into<String>) -> FieldBody {
    let pattern: String = pattern.into();
    compare("LIKE", pattern)
}

/// Prefix match: `field LIKE 'value%'`.
pub fn starts_with(value: &str) -> FieldBody {
    like(format!("{value}%"))
}

/// Suffix match: `field LIKE '%value'`.
pub fn ends_with(value: &str) -> FieldBody {
    like(format!("%{value}"))
}

/// Substring match: `field LIKE '%value%'`.
pub fn contains(value: &str) -> FieldBody {
    like(format!("%{value}%"))
}

/// `field IN (?,?,...)`. An empty list contributes nothing to the statement.
pub fn in_list<I, V>(values: I) -> FieldBody
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    FieldBody::In(values.into_iter().map(Into::into).collect())
}

/// [`eq`] for exactly one value, otherwise [`in_list`].
pub fn eq_or_in<I, V>(values: I) -> FieldBody
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut values: Vec<Value> = values.into_iter().map(Into::into).collect();
    if values.len() == 1 {
        if let Some(value) = values.pop() {
            return eq(value);
        }
    }
    FieldBody::In(values)
}

/// `field BETWEEN ? AND ?`
pub fn between(start: impl Into<Value>, end: impl Into<Value>) -> FieldBody {
    FieldBody::Between(start.into(), end.into())
}

/// Half-open range `[start, end)`. A missing bound drops its comparison; with
/// both missing the condition contributes nothing.
pub fn in_range<S, E>(start: Option<S>, end: Option<E>) -> FieldBody
where
    S: Into<Value>,
    E: Into<Value>,
{
    FieldBody::InRange {
        start: start.map(Into::into),
        end: end.map(Into::into),
    }
}

/// `field IS NULL`
pub fn is_null() -> FieldBody {
    FieldBody::Static("IS NULL")
}

/// `field IS NOT NULL`
pub fn is_not_null() -> FieldBody {
    FieldBody::Static("IS NOT NULL")
}

/// A condition on a named column. A missing body renders nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCondition {
    pub name: String,
    pub body: Option<FieldBody>,
}

impl FieldCondition {
    pub fn new(name: impl Into<String>, body: impl Into<Option<FieldBody>>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        match &self.body {
            Some(body) => body.build(&self.name),
            None => (String::new(), Vec::new()),
        }
    }

    pub fn connective(&self) -> Option<Connective> {
        self.body.as_ref().and_then(FieldBody::connective)
    }

    pub fn is_empty(&self) -> bool {
        self.body.as_ref().is_none_or(FieldBody::is_empty)
    }
}

/// Scope `body` to the column `name`.
pub fn field(name: impl Into<String>, body: impl Into<Option<FieldBody>>) -> ConditionExpr {
    ConditionExpr::Field(FieldCondition::new(name, body))
}
