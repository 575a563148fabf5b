//! Row decoding: column lists paired with a row-to-model mapper.

use crate::builder::Builder;
use crate::error::{QueryError, QueryResult};
use crate::statement::Statement;
use crate::value::{FromValue, Value};
use std::fmt;
use std::sync::Arc;

/// Positional access to the columns of one result row.
pub trait Scanner {
    /// Number of columns in the row.
    fn column_count(&self) -> usize;

    /// The value of column `idx` (0-based).
    fn value(&self, idx: usize) -> QueryResult<Value>;

    /// The name of column `idx`, when the backend knows it.
    fn column_name(&self, idx: usize) -> Option<&str> {
        let _ = idx;
        None
    }
}

/// Typed column access on top of [`Scanner`].
pub trait ScannerExt: Scanner {
    /// Decode column `idx` as `T`, failing with [`QueryError::Decode`] on a type mismatch.
    fn get<T: FromValue>(&self, idx: usize) -> QueryResult<T> {
        let value = self.value(idx)?;
        T::from_value(value).map_err(|e| {
            let column = self
                .column_name(idx)
                .map(str::to_string)
                .unwrap_or_else(|| idx.to_string());
            QueryError::decode(column, e.to_string())
        })
    }
}

impl<S: Scanner + ?Sized> ScannerExt for S {}

/// A model that decodes itself from a row.
pub trait FromRow: Sized {
    fn from_row(row: &dyn Scanner) -> QueryResult<Self>;
}

/// Columns to select for a model `M` and how to decode them.
pub trait FieldMapper<M>: Send + Sync {
    /// Column expressions, in the order [`map`](FieldMapper::map) reads them.
    fn fields(&self) -> Vec<String>;

    /// Decode one row into a model.
    fn map(&self, row: &dyn Scanner) -> QueryResult<M>;

    /// Contribute to a rows statement before any other builder runs, e.g. to
    /// register a join the column list depends on.
    fn build(&self, st: &mut Statement) {
        let _ = st;
    }
}

type MapFn<M> = dyn Fn(&dyn Scanner) -> QueryResult<M> + Send + Sync;

/// A static column list with a mapping closure.
pub struct Fields<M> {
    names: Vec<String>,
    mapper: Arc<MapFn<M>>,
    builders: Vec<Arc<dyn Builder>>,
}

impl<M> Fields<M> {
    pub fn new<I, S, F>(names: I, mapper: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&dyn Scanner) -> QueryResult<M> + Send + Sync + 'static,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            mapper: Arc::new(mapper),
            builders: Vec::new(),
        }
    }

    /// Run `builder` against every rows statement that selects these fields.
    pub fn with_builder(mut self, builder: impl Builder + 'static) -> Self {
        self.builders.push(Arc::new(builder));
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl<M: FromRow + 'static> Fields<M> {
    /// Decode with [`FromRow`].
    pub fn from_row<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names, M::from_row)
    }
}

impl<M> Clone for Fields<M> {
    fn clone(&self) -> Self {
        Self {
            names: self.names.clone(),
            mapper: Arc::clone(&self.mapper),
            builders: self.builders.clone(),
        }
    }
}

impl<M> fmt::Debug for Fields<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fields")
            .field("names", &self.names)
            .field("builders", &self.builders.len())
            .finish_non_exhaustive()
    }
}

impl<M> FieldMapper<M> for Fields<M> {
    fn fields(&self) -> Vec<String> {
        self.names.clone()
    }

    fn map(&self, row: &dyn Scanner) -> QueryResult<M> {
        (self.mapper)(row)
    }

    fn build(&self, st: &mut Statement) {
        for builder in &self.builders {
            builder.build(st);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct VecRow(Vec<Value>);

    impl Scanner for VecRow {
        fn column_count(&self) -> usize {
            self.0.len()
        }

        fn value(&self, idx: usize) -> QueryResult<Value> {
            self.0
                .get(idx)
                .cloned()
                .ok_or_else(|| QueryError::decode(idx.to_string(), "column index out of range"))
        }
    }

    #[derive(Debug, PartialEq)]
    struct User {
        id: i64,
        name: String,
        email: Option<String>,
    }

    impl FromRow for User {
        fn from_row(row: &dyn Scanner) -> QueryResult<Self> {
            Ok(User {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
            })
        }
    }

    #[test]
    fn test_fields_from_row() {
        let fields = Fields::<User>::from_row(["id", "name", "email"]);
        assert_eq!(fields.fields(), vec!["id", "name", "email"]);

        let row = VecRow(vec![Value::Int(1), Value::from("alice"), Value::Null]);
        let user = fields.map(&row).unwrap();
        assert_eq!(
            user,
            User {
                id: 1,
                name: "alice".into(),
                email: None
            }
        );
    }

    #[test]
    fn test_fields_closure() {
        let fields = Fields::new(["COUNT(*) AS total"], |row: &dyn Scanner| row.get::<i64>(0));
        assert_eq!(fields.map(&VecRow(vec![Value::Int(42)])).unwrap(), 42);
    }

    #[test]
    fn test_get_type_mismatch_is_decode_error() {
        let row = VecRow(vec![Value::from("not a number")]);
        let err = row.get::<i64>(0).unwrap_err();
        match err {
            QueryError::Decode { column, message } => {
                assert_eq!(column, "0");
                assert!(message.contains("expected"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fields_builders_run_in_order() {
        let fields = Fields::<User>::from_row(["b.id", "a.name", "b.email"])
            .with_builder(|st: &mut Statement| {
                st.table.inner_join("authors a", "a.id = b.author_id", vec![]);
            })
            .with_builder(|st: &mut Statement| {
                st.table.inner_join("authors a", "a.id = b.editor_id", vec![]);
            });

        let mut st = Statement::new("books b", fields.fields());
        fields.build(&mut st);
        assert_eq!(
            st.build().0,
            "SELECT b.id, a.name, b.email FROM books b INNER JOIN authors a ON a.id = b.author_id"
        );
    }

    #[test]
    fn test_default_build_is_noop() {
        struct Plain;
        impl FieldMapper<i64> for Plain {
            fn fields(&self) -> Vec<String> {
                vec!["id".into()]
            }
            fn map(&self, row: &dyn Scanner) -> QueryResult<i64> {
                row.get(0)
            }
        }

        let mut st = Statement::new("t", Plain.fields());
        Plain.build(&mut st);
        assert_eq!(st.build().0, "SELECT id FROM t");
    }
}
