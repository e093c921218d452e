//! Idempotent schema bootstrap.

use crate::db::row::bind_all;
use crate::db::schema::TableDescriptor;
use crate::error::VocalisError;
use sqlx::{Connection, SqliteConnection};
use tracing::{debug, info};
use vocalis_sqlgen::{SqlValue, Statement};

const TABLE_EXISTS_SQL: &str = "SELECT name FROM sqlite_master WHERE type='table' AND name=$1";

/// Ensure `table` exists, creating it (and its seed row) if absent.
///
/// Creation and seeding run in one transaction, so a failure leaves neither behind.
pub(crate) async fn ensure(
    conn: &mut SqliteConnection,
    table: &TableDescriptor,
) -> Result<(), VocalisError> {
    let bootstrap_err = |source| VocalisError::Bootstrap {
        table: table.name.to_string(),
        source,
    };

    let existing: Option<String> = sqlx::query_scalar(TABLE_EXISTS_SQL)
        .bind(table.name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(bootstrap_err)?;

    if existing.is_some() {
        debug!(table = table.name, "table already present");
        return Ok(());
    }

    let mut tx = conn.begin().await.map_err(bootstrap_err)?;

    sqlx::query(table.create_statement)
        .execute(&mut *tx)
        .await
        .map_err(bootstrap_err)?;

    if table.has_seed() {
        let seed = Statement::insert(
            table.name,
            table.seed_columns,
            table
                .seed_columns
                .iter()
                .map(|_| SqlValue::from(""))
                .collect(),
        );
        bind_all(sqlx::query(&seed.text), seed.args)
            .execute(&mut *tx)
            .await
            .map_err(bootstrap_err)?;
    }

    tx.commit().await.map_err(bootstrap_err)?;

    info!(table = table.name, seeded = table.has_seed(), "table created");
    Ok(())
}
