pub mod envelope;
pub mod soft;
pub mod tts;
pub mod voices;

pub use envelope::{CommandEnvelope, ExePathData, SUCCESS_CODE};
pub use soft::SoftOption;
pub use tts::{SubMarkerType, TtsOption};
pub use voices::{RemoteVoice, VoiceEntry, VoiceGroups};
