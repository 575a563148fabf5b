//! AND/OR combination of condition expressions.

use super::{ConditionExpr, Connective};
use crate::value::Value;

/// An ordered list of expressions joined by one [`Connective`].
///
/// Rendering skips children that render nothing, then:
/// - no children: empty text, no values
/// - one child: that child, verbatim
/// - otherwise: children joined by the connective, with a child bracketed
///   only when its own connective differs from this node's
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conditions {
    connective: Connective,
    items: Vec<ConditionExpr>,
}

impl Conditions {
    pub fn new(connective: Connective, items: Vec<ConditionExpr>) -> Self {
        Self { connective, items }
    }

    pub fn connective(&self) -> Connective {
        self.connective
    }

    pub fn items(&self) -> &[ConditionExpr] {
        &self.items
    }

    /// The connective of the rendered text: `None` when every child renders
    /// nothing, the sole rendering child's when only one renders.
    pub fn rendered_connective(&self) -> Option<Connective> {
        let mut rendering = self.items.iter().filter(|item| !item.is_empty());
        match (rendering.next(), rendering.next()) {
            (None, _) => None,
            (Some(only), None) => only.connective(),
            _ => Some(self.connective),
        }
    }

    /// Append a child expression.
    pub fn push(&mut self, item: impl Into<ConditionExpr>) {
        self.items.push(item.into());
    }

    /// Number of children, including ones that render nothing.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no children were added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        let rendered: Vec<(String, Vec<Value>, Option<Connective>)> = self
            .items
            .iter()
            .filter_map(|item| {
                let (sql, values) = item.build();
                (!sql.is_empty()).then(|| (sql, values, item.connective()))
            })
            .collect();

        match rendered.len() {
            0 => (String::new(), Vec::new()),
            1 => {
                let (sql, values, _) = rendered.into_iter().next().unwrap_or_default();
                (sql, values)
            }
            _ => {
                let mut sql = String::new();
                let mut values = Vec::new();
                for (i, (child_sql, child_values, child_connective)) in
                    rendered.into_iter().enumerate()
                {
                    if i > 0 {
                        sql.push_str(self.connective.separator());
                    }
                    if child_connective.is_some_and(|c| c != self.connective) {
                        sql.push('(');
                        sql.push_str(&child_sql);
                        sql.push(')');
                    } else {
                        sql.push_str(&child_sql);
                    }
                    values.extend(child_values);
                }
                (sql, values)
            }
        }
    }

    pub fn render(&self) -> String {
        self.build().0
    }

    pub fn values(&self) -> Vec<Value> {
        self.build().1
    }
}

/// Combine expressions with AND.
pub fn and(items: impl IntoIterator<Item = ConditionExpr>) -> ConditionExpr {
    ConditionExpr::Conditions(Conditions::new(
        Connective::And,
        items.into_iter().collect(),
    ))
}

/// Combine expressions with OR.
pub fn or(items: impl IntoIterator<Item = ConditionExpr>) -> ConditionExpr {
    ConditionExpr::Conditions(Conditions::new(
        Connective::Or,
        items.into_iter().collect(),
    ))
}
