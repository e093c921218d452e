use std::sync::Arc;
use tracing::{error, info, warn};
use vocalis::config::Config;
use vocalis::db::{self, TABLES};
use vocalis::utils::logging::init_tracing;
use vocalis::{EdgeBackend, NativeBackend, SettingsCache, VoicesCache};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    init_tracing(&cfg.basic.loglevel);

    info!(
        database_url = %cfg.basic.database_url,
        loglevel = %cfg.basic.loglevel,
        voices_list_url = %cfg.backend.voices_list_url,
        proxy = %cfg.backend.proxy.as_ref().map_or("<none>", |u| u.as_str()),
        "config loaded"
    );

    let store = db::spawn(&cfg.basic.database_url, TABLES).await?;
    if let Err(e) = store.connect().await {
        error!(error = %e, "store unavailable; settings cannot be used");
        store.shutdown();
        return Err(e.into());
    }

    let backend: Arc<dyn NativeBackend> = Arc::new(EdgeBackend::new(&cfg.backend)?);
    let settings = SettingsCache::new(store.clone(), backend.clone());
    let voices = VoicesCache::new(store.clone(), backend);

    settings.load().await?;
    let tts = settings.tts_option().await?;
    let soft = settings.soft_option().await?;
    info!(
        language = %tts.language,
        voice = %tts.voice,
        save_path = %soft.save_path,
        open_folders = soft.open_folders,
        "settings loaded"
    );

    match voices.voices().await {
        Ok(groups) => info!(
            languages = groups.len(),
            voices = groups.values().map(Vec::len).sum::<usize>(),
            "voice catalogue ready"
        ),
        Err(e) => warn!(error = %e, "voice catalogue unavailable"),
    }

    store.disconnect().await?;
    store.shutdown();
    Ok(())
}
