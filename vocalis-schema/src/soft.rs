use serde::{Deserialize, Serialize};

/// Application-level preferences, persisted in the `softOption` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftOption {
    /// Directory that generated audio is written under.
    pub save_path: String,
    /// Open the output folder once synthesis finishes.
    pub open_folders: bool,
    /// Remember the last TTS settings across restarts.
    #[serde(rename = "saveTTSOptions")]
    pub save_tts_options: bool,
}

impl SoftOption {
    /// Defaults relative to the directory holding the executable.
    pub fn defaults_for(exe_dir: &str) -> Self {
        Self {
            save_path: format!("{exe_dir}/output"),
            open_folders: true,
            save_tts_options: true,
        }
    }
}
