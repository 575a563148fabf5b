//! The builder contract shared by conditions, sorts and limit/offset.

use crate::error::ValidationError;
use crate::expr::ConditionExpr;
use crate::statement::Statement;

/// Something that contributes clauses to a [`Statement`].
///
/// A [`Query`](crate::Query) holds three builders (condition, sort and
/// limit/offset) and applies them to a fresh statement on every build, so
/// `build` must not depend on state mutated by a previous call.
///
/// `validate` is optional: the default accepts everything.
pub trait Builder: Send + Sync {
    /// Add clauses, joins or values to `st`.
    fn build(&self, st: &mut Statement);

    /// Check the builder's own state before it is used.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl<F> Builder for F
where
    F: Fn(&mut Statement) + Send + Sync,
{
    fn build(&self, st: &mut Statement) {
        self(st)
    }
}

/// A condition expression used directly as a builder adds itself to WHERE.
impl Builder for ConditionExpr {
    fn build(&self, st: &mut Statement) {
        st.where_.add(self.clone());
    }
}

/// A builder that contributes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Noop;

impl Builder for Noop {
    fn build(&self, _st: &mut Statement) {}
}
