//! # Pipeline Tests
//!
//! Whitelist file in, claims document out, every claim re-verified from the
//! document alone.

use std::fs;
use std::path::Path;

use airdrop_merkle::{
    verify_claim, DistributionSink, DistributorApi, DistributorConfig, DistributorError,
    DistributorService, JsonFileSink, JsonFileSource, MerkleError, SourceError,
};
use tempfile::TempDir;

// =============================================================================
// TEST HELPERS
// =============================================================================

const WHITELIST: &str = r#"[
    { "address": "0x1111111111111111111111111111111111111111", "amount": "1000" },
    { "address": "0x2222222222222222222222222222222222222222", "amount": 2500 },
    { "address": "0x3333333333333333333333333333333333333333", "amount": "500" },
    { "address": "0x4444444444444444444444444444444444444444", "amount": "750" },
    { "address": "0x5555555555555555555555555555555555555555", "amount": "1000000000000000000000000" }
]"#;

const ROOT: &str = "0xfefb3c9d3398e87f551bdea0b4d5867f9746bd84c23f68a16990c15b7a8204ec";

fn write_whitelist(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("whitelist.json");
    fs::write(&path, content).unwrap();
    path
}

fn make_service(
    input: &Path,
    output: &Path,
    config: DistributorConfig,
) -> DistributorService<JsonFileSource, JsonFileSink> {
    DistributorService::new(config, JsonFileSource::new(input), JsonFileSink::new(output))
}

// =============================================================================
// END TO END
// =============================================================================

#[test]
fn test_generate_writes_verifiable_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_whitelist(&dir, WHITELIST);
    let output = dir.path().join("merkleData.json");

    let doc = make_service(&input, &output, DistributorConfig::default())
        .generate()
        .unwrap();
    assert_eq!(doc.merkle_root, ROOT);

    let reloaded = JsonFileSource::new(&output).load_distribution().unwrap();
    assert_eq!(reloaded, doc);

    let root = reloaded.root().unwrap();
    for record in &reloaded.claims {
        let claim = record.to_claim().unwrap();
        assert!(verify_claim(&claim, &root), "claim {}", record.index);
    }
}

#[test]
fn test_document_layout() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_whitelist(&dir, WHITELIST);
    let output = dir.path().join("merkleData.json");

    make_service(&input, &output, DistributorConfig::default())
        .generate()
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["merkleRoot"], ROOT);

    let last = &value["claims"][4];
    assert_eq!(last["index"], 4);
    assert_eq!(last["address"], "0x5555555555555555555555555555555555555555");
    assert_eq!(last["amount"], "1000000000000000000000000");
    assert_eq!(
        last["proof"],
        serde_json::json!(["0x82e3f403bff289f155fef8f9455b9424aeb930d418e6c110dd1a26ce18d53194"])
    );
}

#[test]
fn test_parallel_and_sequential_documents_match() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_whitelist(&dir, WHITELIST);
    let seq_out = dir.path().join("seq.json");
    let par_out = dir.path().join("par.json");

    let sequential = make_service(&input, &seq_out, DistributorConfig::default())
        .generate()
        .unwrap();
    let parallel = make_service(&input, &par_out, DistributorConfig::for_testing())
        .generate()
        .unwrap();

    assert_eq!(sequential, parallel);
    assert_eq!(fs::read(&seq_out).unwrap(), fs::read(&par_out).unwrap());
}

// =============================================================================
// FAILURES LEAVE NO OUTPUT
// =============================================================================

#[test]
fn test_empty_whitelist_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_whitelist(&dir, "[]");
    let output = dir.path().join("merkleData.json");

    let result = make_service(&input, &output, DistributorConfig::default()).generate();

    assert!(matches!(
        result,
        Err(DistributorError::Merkle(MerkleError::EmptyTree))
    ));
    assert!(!output.exists());
}

#[test]
fn test_float_amount_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_whitelist(
        &dir,
        r#"[{ "address": "0x1111111111111111111111111111111111111111", "amount": 1.5 }]"#,
    );
    let output = dir.path().join("merkleData.json");

    let result = make_service(&input, &output, DistributorConfig::default()).generate();

    assert!(matches!(
        result,
        Err(DistributorError::Merkle(MerkleError::EncodingRange { .. }))
    ));
    assert!(!output.exists());
}

#[test]
fn test_short_address_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_whitelist(&dir, r#"[{ "address": "0x1234", "amount": "1" }]"#);
    let output = dir.path().join("merkleData.json");

    let result = make_service(&input, &output, DistributorConfig::default()).generate();

    assert!(matches!(
        result,
        Err(DistributorError::Merkle(MerkleError::EncodingRange { .. }))
    ));
    assert!(!output.exists());
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("merkleData.json");

    let result = make_service(
        &dir.path().join("absent.json"),
        &output,
        DistributorConfig::default(),
    )
    .generate();

    assert!(matches!(
        result,
        Err(DistributorError::Source(SourceError::Io { .. }))
    ));
}

#[test]
fn test_sink_overwrites_previous_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_whitelist(&dir, WHITELIST);
    let output = dir.path().join("merkleData.json");
    fs::write(&output, "stale").unwrap();

    let doc = make_service(&input, &output, DistributorConfig::default())
        .generate()
        .unwrap();

    assert_eq!(JsonFileSource::new(&output).load_distribution().unwrap(), doc);
    assert!(!output.with_extension("tmp").exists());
    assert_eq!(JsonFileSink::new(&output).describe(), output.display().to_string());
}
