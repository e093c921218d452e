use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum VocalisError {
    #[error("Failed to open store: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to bootstrap table `{table}`: {source}")]
    Bootstrap {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Query failed: {source} (statement: {statement})")]
    Query {
        statement: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Stored `{column}` record is corrupt: {source}")]
    CorruptRecord {
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Options record (id = 1) is missing")]
    MissingOptionsRecord,

    #[error("Voice list unavailable: {0}")]
    RemoteVoices(String),

    #[error("Executable path unavailable: {0}")]
    ExePath(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Ractor error: {0}")]
    RactorError(String),
}

impl VocalisError {
    /// Errors after which the persistence layer cannot be used at all.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            VocalisError::Connect(_) | VocalisError::Bootstrap { .. } | VocalisError::RactorError(_)
        )
    }
}
