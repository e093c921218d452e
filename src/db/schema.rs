//! Tables the application needs, declared once and bootstrapped in order.

/// A table and the statement that creates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDescriptor {
    pub name: &'static str,
    /// Must create exactly the table called `name`.
    pub create_statement: &'static str,
    /// Columns of the single seed row inserted right after creation, all set to `''`.
    /// Empty means the table starts empty.
    pub seed_columns: &'static [&'static str],
}

impl TableDescriptor {
    pub fn has_seed(&self) -> bool {
        !self.seed_columns.is_empty()
    }
}

pub const OPTION_TABLE_NAME: &str = "option";

/// Primary key of the Options Record.
pub const OPTION_ROW_ID: i64 = 1;

pub const COL_VOICES: &str = "voices";
pub const COL_TTS_OPTION: &str = "ttsOption";
pub const COL_SOFT_OPTION: &str = "softOption";

/// Singleton row holding the three JSON blobs.
pub const OPTION_TABLE: TableDescriptor = TableDescriptor {
    name: OPTION_TABLE_NAME,
    create_statement: r#"
CREATE TABLE option (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    voices TEXT DEFAULT '',
    ttsOption TEXT DEFAULT '',
    softOption TEXT DEFAULT ''
)
"#,
    seed_columns: &[COL_VOICES, COL_TTS_OPTION, COL_SOFT_OPTION],
};

/// Every table, in bootstrap order.
pub const TABLES: &[TableDescriptor] = &[OPTION_TABLE];
