use super::NativeBackend;
use crate::config::BackendConfig;
use crate::error::VocalisError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;
use vocalis_schema::{CommandEnvelope, ExePathData, RemoteVoice};

/// Backend backed by the local process and the public Edge voice list.
#[derive(Debug, Clone)]
pub struct EdgeBackend {
    client: reqwest::Client,
    voices_list_url: Url,
}

impl EdgeBackend {
    pub fn new(cfg: &BackendConfig) -> Result<Self, VocalisError> {
        let mut builder = reqwest::Client::builder()
            .user_agent("vocalis/voices-list")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(cfg.request_timeout_secs));

        if let Some(proxy_url) = cfg.proxy.as_ref() {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
        }

        Ok(Self {
            client: builder.build()?,
            voices_list_url: cfg.voices_list_url.clone(),
        })
    }

    async fn fetch_voices(&self) -> Result<Vec<RemoteVoice>, VocalisError> {
        let resp = self
            .client
            .get(self.voices_list_url.clone())
            .send()
            .await?
            .error_for_status()?;
        let voices: Vec<RemoteVoice> = resp.json().await?;
        debug!(count = voices.len(), "voice list downloaded");
        Ok(voices)
    }
}

#[async_trait]
impl NativeBackend for EdgeBackend {
    async fn get_exe_path(&self) -> CommandEnvelope<ExePathData> {
        let exe = match std::env::current_exe() {
            Ok(exe) => exe,
            Err(e) => return CommandEnvelope::error(format!("failed to resolve executable: {e}")),
        };
        match exe.parent() {
            Some(dir) => CommandEnvelope::success(ExePathData {
                path: dir.display().to_string(),
            }),
            None => CommandEnvelope::error("executable has no parent directory"),
        }
    }

    async fn get_voices_list(&self) -> CommandEnvelope<Vec<RemoteVoice>> {
        match self.fetch_voices().await {
            Ok(voices) => CommandEnvelope::success(voices),
            Err(e) => {
                warn!(error = %e, "voice list request failed");
                CommandEnvelope::error(e.to_string())
            }
        }
    }
}
