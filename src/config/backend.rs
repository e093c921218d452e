use serde::{Deserialize, Serialize};
use url::Url;

const VOICES_LIST_URL: &str = "https://speech.platform.bing.com/consumer/speech/synthesize/readaloud/voices/list?trustedclienttoken=6A5AA1D4EAFF4E9FB37E23D68491D6F4";

/// Native backend settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Endpoint returning the JSON voice list.
    /// TOML: `backend.voices_list_url`.
    #[serde(default = "default_voices_list_url")]
    pub voices_list_url: Url,

    /// Optional upstream HTTP proxy for the voice list request.
    /// TOML: `backend.proxy`. Example: `http://127.0.0.1:1080`.
    #[serde(default)]
    pub proxy: Option<Url>,

    /// Timeout for the voice list request, in seconds.
    /// TOML: `backend.request_timeout_secs`. Default: `30`.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            voices_list_url: default_voices_list_url(),
            proxy: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_voices_list_url() -> Url {
    Url::parse(VOICES_LIST_URL).expect("valid voice list URL")
}

fn default_request_timeout_secs() -> u64 {
    30
}
