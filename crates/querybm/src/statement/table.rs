use crate::value::Value;
use std::fmt;

/// A table reference with an optional alias, e.g. `customers c` or `customers AS c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub name: String,
    pub alias: Option<String>,
    /// Whether the alias was written with an explicit `AS`.
    pub explicit_as: bool,
}

impl TableRef {
    /// Parse `name`, `name alias` or `name AS alias` (`AS` in any case).
    pub fn parse(text: &str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let n = tokens.len();
        if n >= 3 && tokens[n - 2].eq_ignore_ascii_case("as") {
            Self {
                name: tokens[..n - 2].join(" "),
                alias: Some(tokens[n - 1].to_string()),
                explicit_as: true,
            }
        } else if n >= 2 {
            Self {
                name: tokens[..n - 1].join(" "),
                alias: Some(tokens[n - 1].to_string()),
                explicit_as: false,
            }
        } else {
            Self {
                name: tokens.join(" "),
                alias: None,
                explicit_as: false,
            }
        }
    }

    /// Identity used for join de-duplication: the alias if present, else the
    /// name, lower-cased.
    pub fn key(&self) -> String {
        self.alias.as_deref().unwrap_or(&self.name).to_lowercase()
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.alias, self.explicit_as) {
            (Some(alias), true) => write!(f, "{} AS {}", self.name, alias),
            (Some(alias), false) => write!(f, "{} {}", self.name, alias),
            (None, _) => f.write_str(&self.name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    LeftOuter,
}

impl JoinKind {
    fn to_sql(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::LeftOuter => "LEFT OUTER JOIN",
        }
    }
}

/// A registered JOIN clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: TableRef,
    pub on: String,
    pub values: Vec<Value>,
}

impl Join {
    pub fn to_sql(&self) -> String {
        format!("{} {} ON {}", self.kind.to_sql(), self.table, self.on)
    }
}

/// The FROM clause: a base table plus de-duplicated joins.
///
/// Joins are keyed by [`TableRef::key`]; registering a join whose key is
/// already present keeps the first registration and drops the new one. This
/// lets several builders request the same join independently.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    base: TableRef,
    joins: Vec<Join>,
}

impl TableBlock {
    pub fn new(table: &str) -> Self {
        Self {
            base: TableRef::parse(table),
            joins: Vec::new(),
        }
    }

    pub fn base(&self) -> &TableRef {
        &self.base
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    /// Returns `true` if a join with this identity key is registered.
    pub fn has_join(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.joins.iter().any(|j| j.table.key() == key)
    }

    /// Add `INNER JOIN table ON on`. Returns `false` if the join was dropped as
    /// a duplicate.
    pub fn inner_join(&mut self, table: &str, on: impl Into<String>, values: Vec<Value>) -> bool {
        self.add_join(JoinKind::Inner, table, on, values)
    }

    /// Add `LEFT OUTER JOIN table ON on`. Returns `false` if the join was
    /// dropped as a duplicate.
    pub fn left_outer_join(
        &mut self,
        table: &str,
        on: impl Into<String>,
        values: Vec<Value>,
    ) -> bool {
        self.add_join(JoinKind::LeftOuter, table, on, values)
    }

    pub fn add_join(
        &mut self,
        kind: JoinKind,
        table: &str,
        on: impl Into<String>,
        values: Vec<Value>,
    ) -> bool {
        let table = TableRef::parse(table);
        let key = table.key();
        if self.joins.iter().any(|j| j.table.key() == key) {
            return false;
        }
        self.joins.push(Join {
            kind,
            table,
            on: on.into(),
            values,
        });
        true
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        let mut sql = self.base.to_string();
        let mut values = Vec::new();
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_sql());
            values.extend(join.values.iter().cloned());
        }
        (sql, values)
    }
}
