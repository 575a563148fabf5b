//! ORDER BY builders.

use crate::builder::Builder;
use crate::error::ValidationError;
use crate::statement::Statement;
use std::fmt;

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A single `column ASC|DESC` entry.
///
/// An empty column renders nothing and fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortItem {
    column: String,
    dir: SortDir,
}

impl SortItem {
    pub fn new(column: impl Into<String>, dir: SortDir) -> Self {
        Self {
            column: column.into(),
            dir,
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, SortDir::Asc)
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, SortDir::Desc)
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn dir(&self) -> SortDir {
        self.dir
    }
}

impl Builder for SortItem {
    fn build(&self, st: &mut Statement) {
        if self.column.is_empty() {
            return;
        }
        st.sort.push(format!("{} {}", self.column, self.dir));
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.column.is_empty() {
            return Err(ValidationError::EmptySortItem);
        }
        Ok(())
    }
}

/// An ordered list of sort entries.
///
/// Entries are optional so a list assembled from user input can carry holes;
/// a hole renders nothing and fails validation with
/// [`ValidationError::NilSortItem`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortItems(Vec<Option<SortItem>>);

impl SortItems {
    pub fn new(items: Vec<Option<SortItem>>) -> Self {
        Self(items)
    }

    pub fn push(&mut self, item: SortItem) {
        self.0.push(Some(item));
    }

    pub fn items(&self) -> &[Option<SortItem>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<SortItem> for SortItems {
    fn from_iter<I: IntoIterator<Item = SortItem>>(iter: I) -> Self {
        Self(iter.into_iter().map(Some).collect())
    }
}

impl From<Vec<SortItem>> for SortItems {
    fn from(items: Vec<SortItem>) -> Self {
        items.into_iter().collect()
    }
}

impl Builder for SortItems {
    fn build(&self, st: &mut Statement) {
        for item in self.0.iter().flatten() {
            item.build(st);
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        for item in &self.0 {
            match item {
                Some(item) => item.validate()?,
                None => return Err(ValidationError::NilSortItem),
            }
        }
        Ok(())
    }
}
