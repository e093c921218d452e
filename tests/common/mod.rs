#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::SystemTime;
use tokio::fs;
use vocalis::NativeBackend;
use vocalis_schema::{CommandEnvelope, ExePathData, RemoteVoice};

/// A throwaway SQLite file in the system temp dir.
pub struct TempDb {
    pub path: PathBuf,
    pub url: String,
}

impl TempDb {
    pub fn new(tag: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        SystemTime::now().hash(&mut hasher);
        tag.hash(&mut hasher);
        std::process::id().hash(&mut hasher);
        let db_file_name = format!("test_vocalis_{tag}_{}.sqlite", hasher.finish());
        let path = std::env::temp_dir().join(db_file_name);
        let url = format!("sqlite:{}", path.to_str().unwrap());
        Self { path, url }
    }

    pub async fn cleanup(self) {
        let wal_path = PathBuf::from(format!("{}-wal", self.path.to_string_lossy()));
        let shm_path = PathBuf::from(format!("{}-shm", self.path.to_string_lossy()));
        let _ = fs::remove_file(&wal_path).await;
        let _ = fs::remove_file(&shm_path).await;
        let _ = fs::remove_file(&self.path).await;
    }
}

/// Scripted backend that records how often each command ran.
pub struct FakeBackend {
    pub exe_path: Mutex<CommandEnvelope<ExePathData>>,
    pub voices: Mutex<CommandEnvelope<Vec<RemoteVoice>>>,
    pub exe_calls: AtomicUsize,
    pub voice_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn new(exe_dir: &str, voices: Vec<RemoteVoice>) -> Self {
        Self {
            exe_path: Mutex::new(CommandEnvelope::success(ExePathData {
                path: exe_dir.to_string(),
            })),
            voices: Mutex::new(CommandEnvelope::success(voices)),
            exe_calls: AtomicUsize::new(0),
            voice_calls: AtomicUsize::new(0),
        }
    }

    pub fn fail_voices(&self, msg: &str) {
        *self.voices.lock().unwrap() = CommandEnvelope::error(msg);
    }

    pub fn fail_exe_path(&self, msg: &str) {
        *self.exe_path.lock().unwrap() = CommandEnvelope::error(msg);
    }

    pub fn voice_calls(&self) -> usize {
        self.voice_calls.load(Ordering::SeqCst)
    }

    pub fn exe_calls(&self) -> usize {
        self.exe_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NativeBackend for FakeBackend {
    async fn get_exe_path(&self) -> CommandEnvelope<ExePathData> {
        self.exe_calls.fetch_add(1, Ordering::SeqCst);
        self.exe_path.lock().unwrap().clone()
    }

    async fn get_voices_list(&self) -> CommandEnvelope<Vec<RemoteVoice>> {
        self.voice_calls.fetch_add(1, Ordering::SeqCst);
        self.voices.lock().unwrap().clone()
    }
}

pub fn remote_voice(locale: &str, gender: &str, friendly: &str, name: &str) -> RemoteVoice {
    RemoteVoice {
        name: name.to_string(),
        short_name: None,
        gender: gender.to_string(),
        locale: locale.to_string(),
        friendly_name: friendly.to_string(),
    }
}

pub fn sample_voices() -> Vec<RemoteVoice> {
    vec![
        remote_voice(
            "zh-CN",
            "Female",
            "Microsoft Xiaoxiao Online (Natural) - Chinese (Mainland)",
            "Microsoft Server Speech Text to Speech Voice (zh-CN, XiaoxiaoNeural)",
        ),
        remote_voice(
            "en-US",
            "Male",
            "Microsoft Guy Online (Natural) - English (United States)",
            "Microsoft Server Speech Text to Speech Voice (en-US, GuyNeural)",
        ),
    ]
}
