//! Full pipeline tests: config file on disk, real filesystem, in-memory
//! store, real signer, then verification of what was published.

use std::fs;

use pretty_assertions::assert_eq;
use publish_core::{ManifestUploader, MemoryStore, PublishConfig, verify_envelope};
use publish_fs::{ConfigStore, LocalFilesystem};
use publish_test_utils::{TEST_ADDRESS, TEST_PRIVATE_KEY, fixed_clock};
use serde_json::{Value, json};
use tempfile::TempDir;

const YAML_CONFIG: &str = r#"
agent_name: large-transfer-detector
display_name: Large Transfer Detector
description: Flags unusually large token transfers
agent_id: "0x8a9f"
version: 0.1.0
documentation: DOCS
cli_version: 0.2.0
chain_ids: [137, 1]
external: true
chain_settings:
  137:
    shards: "4"
    target: "2"
  default:
    shards: 1
    target: 1
"#;

fn setup(readme: &str) -> (TempDir, PublishConfig) {
    let dir = TempDir::new().unwrap();
    let docs = dir.path().join("README.md");
    fs::write(&docs, readme).unwrap();

    let config_path = dir.path().join("publish.yaml");
    let yaml = YAML_CONFIG.replace("DOCS", &format!("'{}'", docs.display()));
    fs::write(&config_path, yaml).unwrap();

    let config = ConfigStore::new().load(&config_path).unwrap();
    (dir, config)
}

#[test]
fn published_envelope_round_trips_through_verification() {
    let (_dir, config) = setup("# Large Transfer Detector\n\nWatches transfers.\n");
    let store = MemoryStore::new();
    let uploader =
        ManifestUploader::new(config, LocalFilesystem::new(), &store).with_clock(fixed_clock());

    let envelope_ref = uploader.upload("bafyimage", TEST_PRIVATE_KEY).unwrap();

    let published = store.published();
    assert_eq!(published.len(), 2);
    let (doc_ref, doc_content) = &published[0];
    assert_eq!(doc_content, "# Large Transfer Detector\n\nWatches transfers.\n");
    assert_eq!(published[1].0, envelope_ref);

    let verified = verify_envelope(&published[1].1).unwrap();
    assert_eq!(verified.signer, TEST_ADDRESS);
    assert_eq!(&verified.manifest.documentation, doc_ref);
    assert_eq!(verified.manifest.chain_ids, vec![137, 1]);
    assert!(verified.manifest.external);
}

#[test]
fn yaml_chain_settings_keep_source_order() {
    let (_dir, config) = setup("docs");
    let store = MemoryStore::new();
    let uploader =
        ManifestUploader::new(config, LocalFilesystem::new(), &store).with_clock(fixed_clock());

    let envelope_ref = uploader.upload("bafyimage", TEST_PRIVATE_KEY).unwrap();
    let envelope: Value = serde_json::from_str(&store.get(&envelope_ref).unwrap()).unwrap();

    assert_eq!(
        envelope["manifest"]["chainSettings"],
        json!({"137": {"shards": 4, "target": 2}, "default": {"shards": 1, "target": 1}})
    );
    let keys: Vec<_> = envelope["manifest"]["chainSettings"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, ["137", "default"]);
}

#[test]
fn identical_inputs_produce_identical_envelopes() {
    let (_dir, config) = setup("docs");
    let store = MemoryStore::new();
    let uploader =
        ManifestUploader::new(config, LocalFilesystem::new(), &store).with_clock(fixed_clock());

    let first = uploader.upload("bafyimage", TEST_PRIVATE_KEY).unwrap();
    let second = uploader.upload("bafyimage", TEST_PRIVATE_KEY).unwrap();

    assert_eq!(first, second);
    assert_eq!(store.published().len(), 4);
}
