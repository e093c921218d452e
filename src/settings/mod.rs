//! Settings held in the Options Record, mirrored in memory.

mod blob;
pub mod locale;
pub mod options;
pub mod voices;

pub use options::{SettingsCache, normalize_exe_path};
pub use voices::{RefreshState, VoicesCache, group_voices};
