//! Tests for TOML configuration loading.

use std::io::Write;
use strictly_hanoi::Pole;
use strictly_hanoi_server::HanoiConfig;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
[game]
min_disks = 2
max_disks = 10
default_disks = 4
target_pole = "middle"
history_limit = 20

[server]
host = "0.0.0.0"
port = 8080
"#,
    );

    let config = HanoiConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.game().min_disks(), 2);
    assert_eq!(*config.game().max_disks(), 10);
    assert_eq!(*config.game().default_disks(), 4);
    assert_eq!(*config.game().target_pole(), Pole::Middle);
    assert_eq!(*config.game().history_limit(), 20);
    assert_eq!(config.server().host(), "0.0.0.0");
    assert_eq!(*config.server().port(), 8080);
}

#[test]
fn test_rejects_max_above_supported() {
    let file = write_config("[game]\nmax_disks = 30\n");
    let err = HanoiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("max_disks"));
}

#[test]
fn test_rejects_unparseable_file() {
    let file = write_config("[game\nmax_disks = ");
    let err = HanoiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert_eq!(HanoiConfig::load(Some(path.as_path())).unwrap(), HanoiConfig::default());
    assert_eq!(HanoiConfig::load(None).unwrap(), HanoiConfig::default());
}

#[test]
fn test_load_reads_existing_file() {
    let file = write_config("[server]\nport = 9000\n");
    let config = HanoiConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.server().port(), 9000);
    assert_eq!(*config.game().max_disks(), 12);
}
