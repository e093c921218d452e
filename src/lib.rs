pub mod backend;
pub mod config;
pub mod db;
pub mod error;
pub mod settings;
pub mod utils;

pub use backend::{EdgeBackend, NativeBackend};
pub use error::VocalisError;
pub use settings::{RefreshState, SettingsCache, VoicesCache};
