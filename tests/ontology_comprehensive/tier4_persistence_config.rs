//! Tier 4: Persistence and configuration
//!
//! - Snapshots restore the exact ledger by replaying appends
//! - Config files drive bootstrap, paging and the snapshot path

use std::io::Write;

use aurora::{meta, Aurora, AuroraConfig, Event, EventId, Tag};
use tempfile::TempDir;

use crate::test_utils::*;

/// Test: write → save → reopen → same events and same answers
#[test]
fn test_snapshot_restart_preserves_answers() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ledger.jsonl");

    // Phase 1: write and save
    {
        let mut store = Aurora::open(AuroraConfig::new().snapshot_path(&path)).unwrap();
        store
            .append(
                Event::new(ACTOR_MAIN, meta::ACTOR, Tag::INDIVIDUAL, "Actor_Main")
                    .with_condition(meta::ACTOR_MODEL),
            )
            .unwrap();
        name_actor(&mut store, 1001, "Main Actor", 1);
        let saved = store.save().unwrap();
        assert_eq!(saved, store.len());
    }

    // Phase 2: reopen from the snapshot
    {
        let store = Aurora::open(AuroraConfig::new().snapshot_path(&path)).unwrap();
        assert_eq!(store.get(ACTOR_MAIN).unwrap().condition, meta::ACTOR_MODEL);
        assert_eq!(store.get(EventId::new(1001)).unwrap().timestamp, 1);
        assert_eq!(
            store.ontology().get_individual_attribute(ACTOR_MAIN, meta::NAME),
            vec!["Main Actor"]
        );
    }
}

#[test]
fn test_snapshot_is_json_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ledger.jsonl");
    let store = store_with_actor();
    store.save_snapshot(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), store.len());
    let last: serde_json::Value = serde_json::from_str(lines.last().unwrap()).unwrap();
    assert_eq!(last["id"], 1000);
    assert_eq!(last["payload"], "Actor_Main");
}

#[test]
fn test_corrupt_snapshot_fails_open() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ledger.jsonl");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{{\"id\":1,\"parent\":0,\"tag\":0}}").unwrap();
    writeln!(file, "not json").unwrap();
    drop(file);

    let err = Aurora::open(AuroraConfig::new().snapshot_path(&path)).unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_missing_snapshot_bootstraps() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.jsonl");
    let store = Aurora::open(AuroraConfig::new().snapshot_path(&path)).unwrap();
    assert!(store.get(meta::NAME).is_some());
    assert!(!path.exists());
}

#[test]
fn test_config_file_drives_open() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("aurora.toml");
    std::fs::write(&path, "bootstrap = false\ndefault_scan_limit = 2\n").unwrap();

    let config = AuroraConfig::load(&path).unwrap();
    let mut store = Aurora::open(config).unwrap();
    assert!(store.is_empty());

    for raw in 0..5u64 {
        store
            .append(Event::new(EventId::new(raw), meta::EVENT, Tag::SUB_EVENT, raw.to_string()))
            .unwrap();
    }
    assert_eq!(store.scan(0, None).len(), 2);
    assert_eq!(store.scan(4, None).len(), 1);
}

#[test]
fn test_config_rejects_unknown_keys() {
    assert!(AuroraConfig::from_toml_str("bootstrapp = true").is_err());
}
