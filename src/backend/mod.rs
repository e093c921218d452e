//! Native backend commands consumed by the settings layer.

mod edge;

pub use edge::EdgeBackend;

use async_trait::async_trait;
use vocalis_schema::{CommandEnvelope, ExePathData, RemoteVoice};

/// Commands answered with a `{code, msg, data}` envelope; `code == 200` is success.
#[async_trait]
pub trait NativeBackend: Send + Sync {
    /// Directory containing the running executable.
    async fn get_exe_path(&self) -> CommandEnvelope<ExePathData>;

    /// Every voice the speech service offers.
    async fn get_voices_list(&self) -> CommandEnvelope<Vec<RemoteVoice>>;
}
