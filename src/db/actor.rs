use crate::db::bootstrap;
use crate::db::row::{Row, bind_all, decode_row};
use crate::db::schema::TableDescriptor;
use crate::error::VocalisError;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::{ConnectOptions, Connection, SqliteConnection};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info, warn};
use vocalis_sqlgen::Statement;

/// Outcome of a statement that does not return rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecResult {
    pub rows_affected: u64,
    pub last_insert_id: i64,
}

#[derive(Debug)]
pub enum StoreMessage {
    /// Open the store and bootstrap every table. No-op when already connected.
    Connect(RpcReplyPort<Result<(), VocalisError>>),

    /// Close the connection and return to the unconnected state.
    Disconnect(RpcReplyPort<Result<(), VocalisError>>),

    /// Run a statement that does not return rows (connects first if needed).
    Execute(Statement, RpcReplyPort<Result<ExecResult, VocalisError>>),

    /// Run a statement and collect its rows (connects first if needed).
    Fetch(Statement, RpcReplyPort<Result<Vec<Row>, VocalisError>>),

    IsConnected(RpcReplyPort<bool>),
}

/// Cloneable handle to the single store connection.
///
/// All access is serialized through one actor, so at most one connect sequence
/// and one statement are ever in flight.
#[derive(Clone)]
pub struct StoreHandle {
    actor: ActorRef<StoreMessage>,
}

impl StoreHandle {
    pub async fn connect(&self) -> Result<(), VocalisError> {
        ractor::call!(self.actor, StoreMessage::Connect)
            .map_err(|e| VocalisError::RactorError(format!("Store Connect RPC failed: {e}")))?
    }

    pub async fn disconnect(&self) -> Result<(), VocalisError> {
        ractor::call!(self.actor, StoreMessage::Disconnect)
            .map_err(|e| VocalisError::RactorError(format!("Store Disconnect RPC failed: {e}")))?
    }

    pub async fn is_connected(&self) -> Result<bool, VocalisError> {
        ractor::call!(self.actor, StoreMessage::IsConnected).map_err(|e| {
            VocalisError::RactorError(format!("Store IsConnected RPC failed: {e}"))
        })
    }

    pub(crate) async fn execute(&self, statement: Statement) -> Result<ExecResult, VocalisError> {
        ractor::call!(self.actor, StoreMessage::Execute, statement)
            .map_err(|e| VocalisError::RactorError(format!("Store Execute RPC failed: {e}")))?
    }

    pub(crate) async fn fetch(&self, statement: Statement) -> Result<Vec<Row>, VocalisError> {
        ractor::call!(self.actor, StoreMessage::Fetch, statement)
            .map_err(|e| VocalisError::RactorError(format!("Store Fetch RPC failed: {e}")))?
    }

    /// Stop the actor; the connection is dropped with it.
    pub fn shutdown(&self) {
        self.actor.stop(None);
    }
}

pub struct StoreArgs {
    pub database_url: String,
    pub tables: Vec<TableDescriptor>,
}

struct StoreState {
    database_url: String,
    tables: Vec<TableDescriptor>,
    /// `Some` exactly when connected and every table has been bootstrapped.
    conn: Option<SqliteConnection>,
}

struct StoreActor;

#[ractor::async_trait]
impl Actor for StoreActor {
    type Msg = StoreMessage;
    type State = StoreState;
    type Arguments = StoreArgs;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        debug!(database_url = %args.database_url, "StoreActor started (lazy connect)");
        Ok(StoreState {
            database_url: args.database_url,
            tables: args.tables,
            conn: None,
        })
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        if let Some(conn) = state.conn.take() {
            if let Err(e) = conn.close().await {
                warn!(error = %e, "closing store on shutdown failed");
            }
        }
        Ok(())
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            StoreMessage::Connect(reply) => {
                let res = self.ensure_connected(state).await.map(|_| ());
                let _ = reply.send(res);
            }
            StoreMessage::Disconnect(reply) => {
                let res = self.disconnect(state).await;
                let _ = reply.send(res);
            }
            StoreMessage::Execute(statement, reply) => {
                let res = self.execute(state, statement).await;
                let _ = reply.send(res);
            }
            StoreMessage::Fetch(statement, reply) => {
                let res = self.fetch(state, statement).await;
                let _ = reply.send(res);
            }
            StoreMessage::IsConnected(reply) => {
                let _ = reply.send(state.conn.is_some());
            }
        }
        Ok(())
    }
}

impl StoreActor {
    async fn ensure_connected<'a>(
        &self,
        state: &'a mut StoreState,
    ) -> Result<&'a mut SqliteConnection, VocalisError> {
        if state.conn.is_none() {
            let conn = open_and_bootstrap(&state.database_url, &state.tables).await?;
            state.conn = Some(conn);
        }
        state
            .conn
            .as_mut()
            .ok_or_else(|| VocalisError::RactorError("store connection vanished".to_string()))
    }

    async fn disconnect(&self, state: &mut StoreState) -> Result<(), VocalisError> {
        let Some(conn) = state.conn.take() else {
            warn!("disconnect requested while not connected; ignoring");
            return Ok(());
        };
        conn.close().await.map_err(VocalisError::Connect)?;
        info!("store disconnected");
        Ok(())
    }

    async fn execute(
        &self,
        state: &mut StoreState,
        statement: Statement,
    ) -> Result<ExecResult, VocalisError> {
        let conn = self.ensure_connected(state).await?;
        let Statement { text, args, .. } = statement;
        let res = bind_all(sqlx::query(&text), args)
            .execute(conn)
            .await
            .map_err(|source| VocalisError::Query {
                statement: text.clone(),
                source,
            })?;
        Ok(ExecResult {
            rows_affected: res.rows_affected(),
            last_insert_id: res.last_insert_rowid(),
        })
    }

    async fn fetch(
        &self,
        state: &mut StoreState,
        statement: Statement,
    ) -> Result<Vec<Row>, VocalisError> {
        let conn = self.ensure_connected(state).await?;
        let Statement { text, args, .. } = statement;
        let query_err = |source| VocalisError::Query {
            statement: text.clone(),
            source,
        };
        let rows = bind_all(sqlx::query(&text), args)
            .fetch_all(conn)
            .await
            .map_err(query_err)?;
        rows.iter()
            .map(decode_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(query_err)
    }
}

/// Open the store file (creating it if absent) and bootstrap `tables` in order.
///
/// Any failure closes the fresh connection and is returned; the caller stays unconnected.
async fn open_and_bootstrap(
    database_url: &str,
    tables: &[TableDescriptor],
) -> Result<SqliteConnection, VocalisError> {
    let mut conn = SqliteConnectOptions::from_str(database_url)
        .map_err(VocalisError::Connect)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .connect()
        .await
        .map_err(VocalisError::Connect)?;

    for table in tables {
        if let Err(e) = bootstrap::ensure(&mut conn, table).await {
            if let Err(close_err) = conn.close().await {
                warn!(error = %close_err, "closing store after failed bootstrap");
            }
            return Err(e);
        }
    }

    info!(database_url, tables = tables.len(), "store connected");
    Ok(conn)
}

/// Spawn the store actor and return a cloneable handle. The store is not opened
/// until the first `connect()` or statement.
pub async fn spawn(
    database_url: &str,
    tables: &[TableDescriptor],
) -> Result<StoreHandle, VocalisError> {
    let (actor, _jh) = ractor::Actor::spawn(
        None,
        StoreActor,
        StoreArgs {
            database_url: database_url.to_string(),
            tables: tables.to_vec(),
        },
    )
    .await
    .map_err(|e| VocalisError::RactorError(format!("failed to spawn StoreActor: {e}")))?;

    Ok(StoreHandle { actor })
}
