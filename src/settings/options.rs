//! Read-through / write-through cache of the TTS and application options.

use crate::backend::NativeBackend;
use crate::db::schema::{COL_SOFT_OPTION, COL_TTS_OPTION, OPTION_ROW_ID, OPTION_TABLE_NAME};
use crate::db::{Filter, Row, SqlValue, StoreHandle};
use crate::error::VocalisError;
use crate::settings::blob::{column_text, decode_blob};
use crate::utils::logging::with_pretty_json_debug;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use vocalis_schema::{SoftOption, TtsOption};

#[derive(Default)]
struct OptionsState {
    /// `None` until the first successful load.
    tts: Option<TtsOption>,
    soft: Option<SoftOption>,
    exe_dir: Option<String>,
}

/// In-memory mirror of the `ttsOption` and `softOption` columns.
///
/// Each record hydrates on its first access. Empty columns materialize
/// defaults in memory only. Updates hit the store first and replace the cached
/// value only once the write succeeded.
pub struct SettingsCache {
    store: StoreHandle,
    backend: Arc<dyn NativeBackend>,
    state: Mutex<OptionsState>,
}

impl SettingsCache {
    pub fn new(store: StoreHandle, backend: Arc<dyn NativeBackend>) -> Self {
        Self {
            store,
            backend,
            state: Mutex::new(OptionsState::default()),
        }
    }

    /// Read both records from the store, replacing whatever is cached.
    ///
    /// Each record settles on its own: one that fails to read is left unloaded
    /// while the other is still cached. The first error is returned.
    pub async fn load(&self) -> Result<(), VocalisError> {
        let mut state = self.state.lock().await;
        let row = match self.read_record(&[COL_SOFT_OPTION, COL_TTS_OPTION]).await {
            Ok(row) => row,
            Err(e) => {
                state.tts = None;
                state.soft = None;
                return Err(e);
            }
        };

        let tts = decode_tts(row.as_ref());
        let soft = self.resolve_soft(&mut state, row.as_ref()).await;
        let tts_res = settle(&mut state.tts, tts);
        let soft_res = settle(&mut state.soft, soft);
        tts_res.and(soft_res)
    }

    pub async fn is_loaded(&self) -> bool {
        let state = self.state.lock().await;
        state.tts.is_some() && state.soft.is_some()
    }

    pub async fn tts_option(&self) -> Result<TtsOption, VocalisError> {
        let mut state = self.state.lock().await;
        if let Some(tts) = state.tts.as_ref() {
            return Ok(tts.clone());
        }
        let row = self.read_record(&[COL_TTS_OPTION]).await?;
        let tts = decode_tts(row.as_ref())?;
        state.tts = Some(tts.clone());
        Ok(tts)
    }

    pub async fn soft_option(&self) -> Result<SoftOption, VocalisError> {
        let mut state = self.state.lock().await;
        if let Some(soft) = state.soft.as_ref() {
            return Ok(soft.clone());
        }
        let row = self.read_record(&[COL_SOFT_OPTION]).await?;
        let soft = self.resolve_soft(&mut state, row.as_ref()).await?;
        state.soft = Some(soft.clone());
        Ok(soft)
    }

    /// Executable directory with forward slashes and no trailing separator.
    pub async fn exe_path(&self) -> Result<String, VocalisError> {
        let mut state = self.state.lock().await;
        self.exe_dir_locked(&mut state).await
    }

    /// Persist `value` (minus its transient text) and cache a private copy of it.
    pub async fn update_tts_option(&self, value: &TtsOption) -> Result<(), VocalisError> {
        let mut owned = value.clone();
        owned.text.clear();
        let json = serde_json::to_string(&owned)?;

        let mut state = self.state.lock().await;
        self.write_column(COL_TTS_OPTION, json).await?;
        state.tts = Some(owned);
        Ok(())
    }

    /// Persist `value` and cache a private copy of it.
    pub async fn update_soft_option(&self, value: &SoftOption) -> Result<(), VocalisError> {
        let owned = value.clone();
        let json = serde_json::to_string(&owned)?;

        let mut state = self.state.lock().await;
        self.write_column(COL_SOFT_OPTION, json).await?;
        state.soft = Some(owned);
        Ok(())
    }

    async fn write_column(&self, column: &str, json: String) -> Result<(), VocalisError> {
        let outcome = self
            .store
            .update(
                OPTION_TABLE_NAME,
                vec![(column.to_string(), SqlValue::Text(json))],
                Filter::by_id(OPTION_ROW_ID),
            )
            .await?;
        if outcome.rows_affected == 0 {
            return Err(VocalisError::MissingOptionsRecord);
        }
        info!(column, "option saved");
        Ok(())
    }

    async fn read_record(&self, columns: &[&str]) -> Result<Option<Row>, VocalisError> {
        let outcome = self
            .store
            .select(OPTION_TABLE_NAME, columns, Filter::by_id(OPTION_ROW_ID))
            .await?;
        let row = outcome.rows.into_iter().next();
        if row.is_none() {
            warn!("options record missing; serving defaults");
        }
        Ok(row)
    }

    /// Soft defaults depend on the executable directory; only this path asks for it.
    async fn resolve_soft(
        &self,
        state: &mut OptionsState,
        row: Option<&Row>,
    ) -> Result<SoftOption, VocalisError> {
        let soft = match decode_blob::<SoftOption>(
            COL_SOFT_OPTION,
            column_text(row, COL_SOFT_OPTION),
        )? {
            Some(soft) => soft,
            None => SoftOption::defaults_for(&self.exe_dir_locked(state).await?),
        };
        with_pretty_json_debug(&soft, |json| debug!(soft_option = %json, "soft option loaded"));
        Ok(soft)
    }

    async fn exe_dir_locked(&self, state: &mut OptionsState) -> Result<String, VocalisError> {
        if let Some(dir) = state.exe_dir.as_ref() {
            return Ok(dir.clone());
        }
        let raw = self
            .backend
            .get_exe_path()
            .await
            .into_result()
            .map_err(VocalisError::ExePath)?;
        let dir = normalize_exe_path(&raw.path);
        debug!(exe_dir = %dir, "executable directory resolved");
        state.exe_dir = Some(dir.clone());
        Ok(dir)
    }
}

fn decode_tts(row: Option<&Row>) -> Result<TtsOption, VocalisError> {
    let tts = decode_blob::<TtsOption>(COL_TTS_OPTION, column_text(row, COL_TTS_OPTION))?
        .unwrap_or_default();
    with_pretty_json_debug(&tts, |json| debug!(tts_option = %json, "tts option loaded"));
    Ok(tts)
}

/// Cache a successful read, or drop back to unloaded on failure.
fn settle<T>(slot: &mut Option<T>, res: Result<T, VocalisError>) -> Result<(), VocalisError> {
    match res {
        Ok(value) => {
            *slot = Some(value);
            Ok(())
        }
        Err(e) => {
            *slot = None;
            Err(e)
        }
    }
}

/// Backslashes become forward slashes and trailing separators are dropped.
pub fn normalize_exe_path(path: &str) -> String {
    let forward = path.replace('\\', "/");
    let trimmed = forward.trim_end_matches('/');
    if trimmed.is_empty() && !forward.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
