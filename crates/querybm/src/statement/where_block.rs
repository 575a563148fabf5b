use crate::expr::{ConditionExpr, Conditions, Connective};
use crate::value::Value;

/// The WHERE clause: a root [`Conditions`] node (AND by default).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WhereBlock {
    root: Conditions,
}

impl WhereBlock {
    pub fn new(connective: Connective) -> Self {
        Self {
            root: Conditions::new(connective, Vec::new()),
        }
    }

    pub fn connective(&self) -> Connective {
        self.root.connective()
    }

    /// Append a condition to the root node.
    pub fn add(&mut self, condition: impl Into<ConditionExpr>) {
        self.root.push(condition);
    }

    /// Returns `true` if nothing would be rendered, including when every added
    /// condition renders empty.
    pub fn is_empty(&self) -> bool {
        self.root.items().iter().all(ConditionExpr::is_empty)
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        self.root.build()
    }
}
