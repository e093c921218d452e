//! Cached voice catalogue grouped by display language.

use crate::backend::NativeBackend;
use crate::db::schema::{COL_VOICES, OPTION_ROW_ID, OPTION_TABLE_NAME};
use crate::db::{Filter, SqlValue, StoreHandle};
use crate::error::VocalisError;
use crate::settings::blob::{column_text, decode_blob};
use crate::settings::locale::{gender_label, language_for};
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tracing::{info, warn};
use vocalis_schema::{RemoteVoice, VoiceEntry, VoiceGroups};

/// Progress of the remote voice refresh, as seen by observers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RefreshState {
    #[default]
    Idle,
    Refreshing,
    Done,
    Failed(String),
}

pub struct VoicesCache {
    store: StoreHandle,
    backend: Arc<dyn NativeBackend>,
    voices: Mutex<Option<VoiceGroups>>,
    refresh_tx: watch::Sender<RefreshState>,
}

impl VoicesCache {
    pub fn new(store: StoreHandle, backend: Arc<dyn NativeBackend>) -> Self {
        let (refresh_tx, _) = watch::channel(RefreshState::Idle);
        Self {
            store,
            backend,
            voices: Mutex::new(None),
            refresh_tx,
        }
    }

    /// Observe refresh progress. Publishing never waits on receivers.
    pub fn subscribe(&self) -> watch::Receiver<RefreshState> {
        self.refresh_tx.subscribe()
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.refresh_tx.borrow().clone()
    }

    /// Cached voices; on first use read the stored blob, or download and persist
    /// the list when the column is empty.
    pub async fn voices(&self) -> Result<VoiceGroups, VocalisError> {
        let mut cached = self.voices.lock().await;
        if let Some(groups) = cached.as_ref() {
            return Ok(groups.clone());
        }

        let outcome = self
            .store
            .select(
                OPTION_TABLE_NAME,
                &[COL_VOICES],
                Filter::by_id(OPTION_ROW_ID),
            )
            .await?;
        let stored = decode_blob::<VoiceGroups>(
            COL_VOICES,
            column_text(outcome.rows.first(), COL_VOICES),
        )?;

        let groups = match stored {
            Some(groups) => groups,
            None => self.refresh_from_remote().await?,
        };
        *cached = Some(groups.clone());
        Ok(groups)
    }

    /// Download the list again, persist it, and replace the cache.
    pub async fn refresh(&self) -> Result<VoiceGroups, VocalisError> {
        let mut cached = self.voices.lock().await;
        let groups = self.refresh_from_remote().await?;
        *cached = Some(groups.clone());
        Ok(groups)
    }

    async fn refresh_from_remote(&self) -> Result<VoiceGroups, VocalisError> {
        self.refresh_tx.send_replace(RefreshState::Refreshing);
        let res = self.download_and_persist().await;
        match &res {
            Ok(groups) => {
                info!(languages = groups.len(), "voice list refreshed");
                self.refresh_tx.send_replace(RefreshState::Done);
            }
            Err(e) => {
                warn!(error = %e, "voice list refresh failed");
                self.refresh_tx.send_replace(RefreshState::Failed(e.to_string()));
            }
        }
        res
    }

    async fn download_and_persist(&self) -> Result<VoiceGroups, VocalisError> {
        let remote = self
            .backend
            .get_voices_list()
            .await
            .into_result()
            .map_err(VocalisError::RemoteVoices)?;
        let groups = group_voices(remote);

        let outcome = self
            .store
            .update(
                OPTION_TABLE_NAME,
                vec![(
                    COL_VOICES.to_string(),
                    SqlValue::Text(serde_json::to_string(&groups)?),
                )],
                Filter::by_id(OPTION_ROW_ID),
            )
            .await?;
        if outcome.rows_affected == 0 {
            return Err(VocalisError::MissingOptionsRecord);
        }
        Ok(groups)
    }
}

/// Group remote voices by display language, keeping service order within a group.
pub fn group_voices(remote: Vec<RemoteVoice>) -> VoiceGroups {
    let mut groups = VoiceGroups::new();
    for voice in remote {
        let language = language_for(&voice.locale).to_string();
        // Runs of whitespace count as one separator.
        let simple_name = voice
            .friendly_name
            .split_whitespace()
            .nth(1)
            .unwrap_or_default()
            .to_string();
        groups.entry(language).or_default().push(VoiceEntry {
            gender: gender_label(&voice.gender).to_string(),
            simple_name,
            friendly_name: voice.friendly_name,
            name: voice.name,
        });
    }
    groups
}
