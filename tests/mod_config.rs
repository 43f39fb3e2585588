use seqbench::cli::OutputMode;
use seqbench::config::{PartialConfig, file_layer, load_config_file};
use seqbench::errors::BenchError;
use std::fs;
use tempfile::tempdir;

#[test]
fn explicit_file_supplies_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("seqbench.toml");
    fs::write(&path, "dataset_size = 42\noutput = \"json\"\n").unwrap();
    let layer = file_layer(Some(&path), &[]).unwrap();
    let cfg = PartialConfig::default().or(layer).resolve();
    assert_eq!(cfg.dataset_size, 42);
    assert_eq!(cfg.output_mode(), OutputMode::Json);
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn cli_layer_overrides_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.toml");
    fs::write(&path, "dataset_size = 42\n").unwrap();
    let cli = PartialConfig { dataset_size: Some(7), ..Default::default() };
    let cfg = cli.or(load_config_file(&path).unwrap()).resolve();
    assert_eq!(cfg.dataset_size, 7);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(file_layer(Some(&missing), &[]), Err(BenchError::Config(_))));
}

#[test]
fn broken_discovered_file_is_skipped() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("bad.toml");
    let good = dir.path().join("good.toml");
    fs::write(&bad, "dataset_size = [").unwrap();
    fs::write(&good, "dataset_size = 3\n").unwrap();
    let absent = dir.path().join("absent.toml");
    let layer = file_layer(None, &[absent, bad, good]).unwrap();
    assert_eq!(layer.dataset_size, Some(3));
}

#[test]
fn no_files_means_defaults() {
    let layer = file_layer(None, &[]).unwrap();
    assert_eq!(layer, PartialConfig::default());
    assert_eq!(layer.resolve().dataset_size, 100_000);
}
