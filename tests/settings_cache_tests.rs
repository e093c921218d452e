mod common;

use common::{FakeBackend, TempDb};
use std::sync::Arc;
use vocalis::db::{self, Filter, SqlValue, StoreHandle, TABLES};
use vocalis::{SettingsCache, VocalisError};
use vocalis_schema::{SoftOption, SubMarkerType, TtsOption};

async fn stored_column(store: &StoreHandle, column: &str) -> String {
    let res = store
        .select("option", &[column], Filter::by_id(1))
        .await
        .unwrap();
    res.rows[0][column].as_str().unwrap().to_string()
}

#[tokio::test]
async fn fresh_store_yields_defaults_without_writing_them() {
    let tmp = TempDb::new("settings_defaults");
    let store = db::spawn(&tmp.url, TABLES).await.unwrap();
    store.connect().await.unwrap();
    let backend = Arc::new(FakeBackend::new(r"C:\Apps\Vocalis\", vec![]));
    let cache = SettingsCache::new(store.clone(), backend.clone());

    assert_eq!(stored_column(&store, "ttsOption").await, "");
    assert!(!cache.is_loaded().await);
    cache.load().await.unwrap();
    assert!(cache.is_loaded().await);

    let tts = cache.tts_option().await.unwrap();
    assert_eq!(tts.language, "中文（大陆）");
    assert_eq!(
        tts.voice,
        "Microsoft Server Speech Text to Speech Voice (zh-CN, XiaoxiaoNeural)"
    );
    assert_eq!((tts.pitch, tts.rate, tts.volume), (0, 0, 0));
    assert!(tts.gender_sub_marker);
    assert_eq!(tts.sub_marker_type, SubMarkerType::MergeByPunctuation);
    assert_eq!(tts.merge_by_number_number, 1);

    let soft = cache.soft_option().await.unwrap();
    assert_eq!(
        soft,
        SoftOption {
            save_path: "C:/Apps/Vocalis/output".to_string(),
            open_folders: true,
            save_tts_options: true,
        }
    );
    assert_eq!(cache.exe_path().await.unwrap(), "C:/Apps/Vocalis");
    assert_eq!(backend.exe_calls(), 1);

    // Defaults live in memory only.
    assert_eq!(stored_column(&store, "ttsOption").await, "");
    assert_eq!(stored_column(&store, "softOption").await, "");

    store.disconnect().await.unwrap();
    store.shutdown();
    tmp.cleanup().await;
}

#[tokio::test]
async fn tts_option_round_trips_without_text() {
    let tmp = TempDb::new("settings_roundtrip");
    let store = db::spawn(&tmp.url, TABLES).await.unwrap();
    let backend = Arc::new(FakeBackend::new("/opt/vocalis", vec![]));

    let original = TtsOption {
        language: "英语（美国）".to_string(),
        voice: "Microsoft Server Speech Text to Speech Voice (en-US, AriaNeural)".to_string(),
        pitch: -3,
        rate: 12,
        volume: 5,
        gender_sub_marker: false,
        sub_marker_type: SubMarkerType::MergeByNumber,
        merge_by_number_number: 4,
        text: "draft text that must not be stored".to_string(),
    };

    let cache = SettingsCache::new(store.clone(), backend.clone());
    cache.update_tts_option(&original).await.unwrap();

    let blob = stored_column(&store, "ttsOption").await;
    assert!(!blob.contains("text"));
    assert!(!blob.contains("draft"));

    let reloaded = SettingsCache::new(store.clone(), backend);
    let tts = reloaded.tts_option().await.unwrap();
    let expected = TtsOption {
        text: String::new(),
        ..original
    };
    assert_eq!(tts, expected);

    store.disconnect().await.unwrap();
    store.shutdown();
    tmp.cleanup().await;
}

#[tokio::test]
async fn cache_never_aliases_caller_value() {
    let tmp = TempDb::new("settings_isolation");
    let store = db::spawn(&tmp.url, TABLES).await.unwrap();
    let cache = SettingsCache::new(store.clone(), Arc::new(FakeBackend::new("/x", vec![])));

    let mut mine = TtsOption::default();
    mine.rate = 20;
    cache.update_tts_option(&mine).await.unwrap();

    mine.rate = -50;
    mine.voice.push_str(" (edited)");
    let cached = cache.tts_option().await.unwrap();
    assert_eq!(cached.rate, 20);
    assert!(!cached.voice.ends_with("(edited)"));

    let mut copy = cache.tts_option().await.unwrap();
    copy.pitch = 99;
    assert_eq!(cache.tts_option().await.unwrap().pitch, 0);

    store.disconnect().await.unwrap();
    store.shutdown();
    tmp.cleanup().await;
}

#[tokio::test]
async fn soft_option_write_through() {
    let tmp = TempDb::new("settings_soft");
    let store = db::spawn(&tmp.url, TABLES).await.unwrap();
    let backend = Arc::new(FakeBackend::new("/opt/vocalis", vec![]));
    let cache = SettingsCache::new(store.clone(), backend.clone());

    let soft = SoftOption {
        save_path: "/data/audio".to_string(),
        open_folders: false,
        save_tts_options: true,
    };
    cache.update_soft_option(&soft).await.unwrap();
    assert_eq!(cache.soft_option().await.unwrap(), soft);

    let blob = stored_column(&store, "softOption").await;
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(value["savePath"], "/data/audio");
    assert_eq!(value["openFolders"], false);

    // A stored record needs no executable path lookup.
    let reloaded = SettingsCache::new(store.clone(), backend.clone());
    reloaded.load().await.unwrap();
    assert_eq!(reloaded.soft_option().await.unwrap(), soft);
    assert_eq!(backend.exe_calls(), 0);

    store.disconnect().await.unwrap();
    store.shutdown();
    tmp.cleanup().await;
}

#[tokio::test]
async fn corrupt_blob_is_reported_not_defaulted() {
    let tmp = TempDb::new("settings_corrupt");
    let store = db::spawn(&tmp.url, TABLES).await.unwrap();
    store
        .update(
            "option",
            vec![("ttsOption".to_string(), SqlValue::from("{\"language\": 3"))],
            Filter::by_id(1),
        )
        .await
        .unwrap();

    let cache = SettingsCache::new(store.clone(), Arc::new(FakeBackend::new("/x", vec![])));
    let err = cache.load().await.unwrap_err();
    assert!(matches!(
        err,
        VocalisError::CorruptRecord {
            column: "ttsOption",
            ..
        }
    ));
    assert!(!cache.is_loaded().await);

    // Still unloaded: the next read tries again and fails the same way.
    assert!(cache.tts_option().await.is_err());

    store.disconnect().await.unwrap();
    store.shutdown();
    tmp.cleanup().await;
}

#[tokio::test]
async fn exe_path_failure_surfaces_backend_message() {
    let tmp = TempDb::new("settings_exe_fail");
    let store = db::spawn(&tmp.url, TABLES).await.unwrap();
    let backend = Arc::new(FakeBackend::new("/x", vec![]));
    backend.fail_exe_path("no parent directory");
    let cache = SettingsCache::new(store.clone(), backend);

    let err = cache.soft_option().await.unwrap_err();
    assert!(matches!(&err, VocalisError::ExePath(msg) if msg == "no parent directory"));

    // TTS options never need the executable directory.
    assert_eq!(cache.tts_option().await.unwrap(), TtsOption::default());
    assert!(cache.exe_path().await.is_err());

    store.disconnect().await.unwrap();
    store.shutdown();
    tmp.cleanup().await;
}

#[tokio::test]
async fn failed_write_keeps_previous_value() {
    let tmp = TempDb::new("settings_write_fail");
    let store = db::spawn(&tmp.url, TABLES).await.unwrap();
    let cache = SettingsCache::new(store.clone(), Arc::new(FakeBackend::new("/x", vec![])));

    let before = cache.tts_option().await.unwrap();
    store.delete_rows("option", Filter::by_id(1)).await.unwrap();

    let mut changed = before.clone();
    changed.volume = 30;
    let err = cache.update_tts_option(&changed).await.unwrap_err();
    assert!(matches!(err, VocalisError::MissingOptionsRecord));
    assert_eq!(cache.tts_option().await.unwrap(), before);

    // Without the row, a fresh cache still serves defaults.
    let fresh = SettingsCache::new(store.clone(), Arc::new(FakeBackend::new("/x", vec![])));
    assert_eq!(fresh.tts_option().await.unwrap(), TtsOption::default());

    store.disconnect().await.unwrap();
    store.shutdown();
    tmp.cleanup().await;
}

#[tokio::test]
async fn update_statement_matches_documented_shape() {
    let tmp = TempDb::new("settings_update_sql");
    let store = db::spawn(&tmp.url, TABLES).await.unwrap();

    let json = serde_json::to_string(&TtsOption::default()).unwrap();
    let res = store
        .update(
            "option",
            vec![("ttsOption".to_string(), SqlValue::from(json.clone()))],
            Filter::new("id = ?", [1]),
        )
        .await
        .unwrap();
    assert_eq!(res.statement, "UPDATE option SET ttsOption = $1 WHERE id = $2");
    assert_eq!(res.rows_affected, 1);
    assert_eq!(stored_column(&store, "ttsOption").await, json);

    store.disconnect().await.unwrap();
    store.shutdown();
    tmp.cleanup().await;
}

#[tokio::test]
async fn load_keeps_tts_when_exe_path_fails() {
    let tmp = TempDb::new("settings_load_exe_fail");
    let store = db::spawn(&tmp.url, TABLES).await.unwrap();
    let backend = Arc::new(FakeBackend::new("/x", vec![]));
    backend.fail_exe_path("no parent directory");
    let cache = SettingsCache::new(store.clone(), backend.clone());

    let err = cache.load().await.unwrap_err();
    assert!(matches!(err, VocalisError::ExePath(_)));
    assert!(!cache.is_loaded().await);
    assert_eq!(cache.tts_option().await.unwrap(), TtsOption::default());

    // Soft option stays unloaded and asks again on the next read.
    assert!(cache.soft_option().await.is_err());
    assert_eq!(backend.exe_calls(), 2);

    store.disconnect().await.unwrap();
    store.shutdown();
    tmp.cleanup().await;
}

#[tokio::test]
async fn failed_reload_drops_stale_record() {
    let tmp = TempDb::new("settings_reload_fail");
    let store = db::spawn(&tmp.url, TABLES).await.unwrap();
    let cache = SettingsCache::new(store.clone(), Arc::new(FakeBackend::new("/x", vec![])));

    let mut tts = TtsOption::default();
    tts.rate = 15;
    cache.update_tts_option(&tts).await.unwrap();
    cache.load().await.unwrap();
    assert_eq!(cache.tts_option().await.unwrap().rate, 15);

    store
        .update(
            "option",
            vec![("ttsOption".to_string(), SqlValue::from("not json"))],
            Filter::by_id(1),
        )
        .await
        .unwrap();

    let err = cache.load().await.unwrap_err();
    assert!(matches!(
        err,
        VocalisError::CorruptRecord {
            column: "ttsOption",
            ..
        }
    ));
    assert!(!cache.is_loaded().await);
    assert!(matches!(
        cache.tts_option().await,
        Err(VocalisError::CorruptRecord { .. })
    ));
    // The soft record read fine and is still served.
    assert_eq!(cache.soft_option().await.unwrap().save_path, "/x/output");

    store.disconnect().await.unwrap();
    store.shutdown();
    tmp.cleanup().await;
}
