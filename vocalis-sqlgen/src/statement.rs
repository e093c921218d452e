//! Text assembly for the four generic CRUD statements.
//!
//! Table and column names are trusted identifiers supplied by the program;
//! every value travels as a bound parameter.

use crate::placeholder::where_suffix;
use crate::value::SqlValue;
use serde::Serialize;

/// Statement text plus its positional arguments, `$1..$n` in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub text: String,
    pub args: Vec<SqlValue>,
    /// Number of `?` markers found in the WHERE fragment, if any.
    #[serde(skip)]
    pub where_markers: usize,
    /// Number of arguments supplied for the WHERE fragment.
    #[serde(skip)]
    pub where_args: usize,
}

/// An optional WHERE fragment written with `?` markers, and its arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub clause: String,
    pub args: Vec<SqlValue>,
}

impl Filter {
    pub fn new<I, V>(clause: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        Self {
            clause: clause.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Shorthand for `id = ?`.
    pub fn by_id(id: i64) -> Self {
        Self::new("id = ?", [id])
    }

    /// No WHERE clause; the statement applies to every row.
    pub fn all() -> Self {
        Self::default()
    }
}

impl Statement {
    /// Caller-supplied text, executed verbatim.
    pub fn raw(text: impl Into<String>, args: Vec<SqlValue>) -> Self {
        Self {
            text: text.into(),
            args,
            where_markers: 0,
            where_args: 0,
        }
    }

    /// `INSERT INTO t (c1, c2) VALUES ($1, $2)`.
    ///
    /// `columns` and `values` must have the same length; a mismatch is left for
    /// the store to reject.
    pub fn insert(table: &str, columns: &[&str], values: Vec<SqlValue>) -> Self {
        let placeholders = (1..=columns.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let text = format!(
            "INSERT INTO {table} ({}) VALUES ({placeholders})",
            columns.join(", ")
        );
        Self::raw(text, values)
    }

    /// `UPDATE t SET c1 = $1, ... [WHERE ...]`, WHERE markers numbered after the SET values.
    pub fn update(table: &str, data: Vec<(String, SqlValue)>, filter: Filter) -> Self {
        let offset = data.len();
        let (columns, mut args): (Vec<String>, Vec<SqlValue>) = data.into_iter().unzip();
        let set_clause = columns
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = ${}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let (suffix, where_markers) = where_suffix(&filter.clause, offset);
        let where_args = filter.args.len();
        args.extend(filter.args);

        Self {
            text: format!("UPDATE {table} SET {set_clause}{suffix}"),
            args,
            where_markers,
            where_args,
        }
    }

    /// `SELECT <cols|*> FROM t [WHERE ...]`; an empty column list selects `*`.
    pub fn select(table: &str, columns: &[&str], filter: Filter) -> Self {
        let column_list = if columns.is_empty() {
            "*".to_string()
        } else {
            columns.join(", ")
        };
        let (suffix, where_markers) = where_suffix(&filter.clause, 0);

        Self {
            text: format!("SELECT {column_list} FROM {table}{suffix}"),
            where_args: filter.args.len(),
            args: filter.args,
            where_markers,
        }
    }

    /// `DELETE FROM t [WHERE ...]`.
    pub fn delete(table: &str, filter: Filter) -> Self {
        let (suffix, where_markers) = where_suffix(&filter.clause, 0);

        Self {
            text: format!("DELETE FROM {table}{suffix}"),
            where_args: filter.args.len(),
            args: filter.args,
            where_markers,
        }
    }

    /// True when the WHERE fragment's markers and arguments disagree in count.
    pub fn has_arity_mismatch(&self) -> bool {
        self.where_markers != self.where_args
    }
}
