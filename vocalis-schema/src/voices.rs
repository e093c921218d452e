use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the voice list as the speech service reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoteVoice {
    pub name: String,
    pub short_name: Option<String>,
    pub gender: String,
    pub locale: String,
    pub friendly_name: String,
}

/// A voice as cached and shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceEntry {
    #[serde(rename = "FriendlyName")]
    pub friendly_name: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "simpleName")]
    pub simple_name: String,
}

/// Voices grouped by display language, persisted in the `voices` column.
pub type VoiceGroups = BTreeMap<String, Vec<VoiceEntry>>;
