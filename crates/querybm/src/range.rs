//! Optional-bound ranges for WHERE conditions.

use crate::expr::{FieldBody, between, field, gte, in_range, lt, lte};
use crate::statement::Statement;
use crate::value::Value;

/// A range with optional start and end.
///
/// By default the range is half-open (`start <= x < end`); with
/// [`use_between`](Range::use_between) it is inclusive on both ends.
/// A missing bound drops its comparison; a range with neither bound adds
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range<T> {
    pub start: Option<T>,
    pub end: Option<T>,
    use_between: bool,
}

impl<T> Range<T> {
    pub fn new(start: Option<T>, end: Option<T>) -> Self {
        Self {
            start,
            end,
            use_between: false,
        }
    }

    /// Treat the default value of `T` (zero for numbers) as an absent bound.
    pub fn non_zero(start: T, end: T) -> Self
    where
        T: Default + PartialEq,
    {
        let zero = T::default();
        let start = (start != zero).then_some(start);
        let end = (end != zero).then_some(end);
        Self::new(start, end)
    }

    /// Make the end bound inclusive (`BETWEEN` / `<=`).
    pub fn use_between(mut self) -> Self {
        self.use_between = true;
        self
    }

    pub fn is_between(&self) -> bool {
        self.use_between
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl<T> Range<T>
where
    T: Clone + Into<Value>,
{
    /// The condition body for this range, or `None` when both bounds are absent.
    pub fn body(&self) -> Option<FieldBody> {
        match (&self.start, &self.end) {
            (None, None) => None,
            (Some(start), Some(end)) if self.use_between => {
                Some(between(start.clone(), end.clone()))
            }
            (Some(start), Some(end)) => Some(in_range(Some(start.clone()), Some(end.clone()))),
            (None, Some(end)) if self.use_between => Some(lte(end.clone())),
            (None, Some(end)) => Some(lt(end.clone())),
            (Some(start), None) => Some(gte(start.clone())),
        }
    }

    /// Add this range on `column` to the statement's WHERE clause.
    pub fn build(&self, column: &str, st: &mut Statement) {
        if let Some(body) = self.body() {
            st.where_.add(field(column, body));
        }
    }
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Self::new(None, None)
    }
}
