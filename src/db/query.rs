//! Generic CRUD helpers over the store handle.
//!
//! Every helper builds exactly one statement and runs it once. Store errors are
//! returned as `VocalisError::Query` carrying the statement text; nothing is retried.

use crate::db::actor::StoreHandle;
use crate::db::row::Row;
use crate::error::VocalisError;
use crate::utils::logging::with_pretty_json_debug;
use tracing::{debug, warn};
use vocalis_sqlgen::{Filter, SqlValue, Statement};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    pub statement: String,
    pub rows_affected: u64,
    pub last_insert_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutcome {
    pub statement: String,
    pub rows_affected: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOutcome {
    pub statement: String,
    pub rows: Vec<Row>,
}

/// Dump the statement and its bound values at DEBUG, and warn on a WHERE arity mismatch.
fn inspect(statement: &Statement) {
    with_pretty_json_debug(statement, |json| debug!(statement = %json, "prepared statement"));
    if statement.has_arity_mismatch() {
        warn!(
            statement = %statement.text,
            markers = statement.where_markers,
            args = statement.where_args,
            "WHERE marker count does not match argument count"
        );
    }
}

impl StoreHandle {
    pub async fn insert(
        &self,
        table: &str,
        columns: &[&str],
        values: Vec<SqlValue>,
    ) -> Result<InsertOutcome, VocalisError> {
        let stmt = Statement::insert(table, columns, values);
        inspect(&stmt);
        let text = stmt.text.clone();
        let res = self.execute(stmt).await?;
        debug!(statement = %text, affected = res.rows_affected, id = res.last_insert_id, "insert");
        Ok(InsertOutcome {
            statement: text,
            rows_affected: res.rows_affected,
            last_insert_id: res.last_insert_id,
        })
    }

    /// `data` is applied in order; WHERE markers are numbered after its values.
    pub async fn update(
        &self,
        table: &str,
        data: Vec<(String, SqlValue)>,
        filter: Filter,
    ) -> Result<ExecOutcome, VocalisError> {
        let stmt = Statement::update(table, data, filter);
        inspect(&stmt);
        let text = stmt.text.clone();
        let res = self.execute(stmt).await?;
        debug!(statement = %text, affected = res.rows_affected, "update");
        Ok(ExecOutcome {
            statement: text,
            rows_affected: res.rows_affected,
        })
    }

    /// An empty `columns` slice selects `*`.
    pub async fn select(
        &self,
        table: &str,
        columns: &[&str],
        filter: Filter,
    ) -> Result<SelectOutcome, VocalisError> {
        let stmt = Statement::select(table, columns, filter);
        inspect(&stmt);
        let text = stmt.text.clone();
        let rows = self.fetch(stmt).await?;
        Ok(SelectOutcome {
            statement: text,
            rows,
        })
    }

    pub async fn delete_rows(
        &self,
        table: &str,
        filter: Filter,
    ) -> Result<ExecOutcome, VocalisError> {
        let stmt = Statement::delete(table, filter);
        inspect(&stmt);
        let text = stmt.text.clone();
        let res = self.execute(stmt).await?;
        debug!(statement = %text, affected = res.rows_affected, "delete");
        Ok(ExecOutcome {
            statement: text,
            rows_affected: res.rows_affected,
        })
    }

    /// Run caller-written SQL verbatim with positional arguments.
    ///
    /// The caller owns correctness and injection safety of `sql`.
    pub async fn select_raw(
        &self,
        sql: &str,
        args: Vec<SqlValue>,
    ) -> Result<SelectOutcome, VocalisError> {
        let stmt = Statement::raw(sql, args);
        inspect(&stmt);
        let rows = self.fetch(stmt).await?;
        Ok(SelectOutcome {
            statement: sql.to_string(),
            rows,
        })
    }
}
