use serde::{Deserialize, Serialize};

/// How subtitle cues are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubMarkerType {
    /// One cue per sentence, split on punctuation.
    #[default]
    MergeByPunctuation,
    /// One cue per `merge_by_number_number` words.
    MergeByNumber,
}

/// Speech-synthesis options, persisted in the `ttsOption` column.
///
/// `text` is the transient editor buffer. It is accepted on input but never
/// serialized, so it cannot reach the stored blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsOption {
    pub language: String,
    pub voice: String,
    pub pitch: i32,
    pub rate: i32,
    pub volume: i32,
    pub gender_sub_marker: bool,
    pub sub_marker_type: SubMarkerType,
    pub merge_by_number_number: i32,
    #[serde(default, skip_serializing)]
    pub text: String,
}

impl Default for TtsOption {
    fn default() -> Self {
        Self {
            language: "中文（大陆）".to_string(),
            voice: "Microsoft Server Speech Text to Speech Voice (zh-CN, XiaoxiaoNeural)"
                .to_string(),
            pitch: 0,
            rate: 0,
            volume: 0,
            gender_sub_marker: true,
            sub_marker_type: SubMarkerType::MergeByPunctuation,
            merge_by_number_number: 1,
            text: String::new(),
        }
    }
}
