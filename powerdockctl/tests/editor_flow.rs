//! Integration tests for the edit/save flow driven through the CLI
//! handlers, against a real temporary configuration file.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use powerdock_core::{ConfigEditor, ConfigStore};
use powerdockctl::cli::{
    handle_backup, handle_keygen, handle_set, handle_units, DeviceField, SetCommands, UnitField,
};

fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("config.ini")
}

#[test]
fn fresh_environment_creates_documented_defaults() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    let editor = ConfigEditor::open(ConfigStore::new(&path)).unwrap();
    assert!(path.exists());

    let config = editor.draft();
    assert_eq!(config.general.num_pcs, 2);
    assert_eq!(config.units[0].mac_address, "AA:BB:CC:DD:EE:01");
    assert_eq!(config.units[0].ip_address, "192.168.1.100");
    assert_eq!(config.units[0].on_button_gpio, "GPIO16");

    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(on_disk.contains("[ESP32]"));
    assert!(on_disk.contains("[GENERAL]"));
    assert!(on_disk.contains("num_pcs = 2"));
    assert!(on_disk.contains("[UNIT8]"));
}

#[test]
fn set_commands_edit_and_persist() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    handle_set(
        &path,
        SetCommands::Device {
            field: DeviceField::StaticIp,
            value: "10.0.0.9".to_string(),
        },
    )
    .unwrap();

    handle_set(
        &path,
        SetCommands::Unit {
            unit: 3,
            field: UnitField::Name,
            value: "Render Node".to_string(),
        },
    )
    .unwrap();

    let config = ConfigStore::new(&path).load().unwrap();
    assert_eq!(config.device.static_ip, "10.0.0.9");
    assert_eq!(config.units[2].name, "Render Node");
}

#[test]
fn units_command_clamps_and_keeps_inert_sections() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    handle_units(&path, 99).unwrap();
    let config = ConfigStore::new(&path).load().unwrap();
    assert_eq!(config.general.num_pcs, 8);

    handle_units(&path, 0).unwrap();
    let config = ConfigStore::new(&path).load().unwrap();
    assert_eq!(config.general.num_pcs, 1);

    // Inert sections still persist with only one active unit
    let on_disk = fs::read_to_string(&path).unwrap();
    for n in 1..=8 {
        assert!(on_disk.contains(&format!("[UNIT{}]", n)));
    }
}

#[test]
fn invalid_unit_index_is_rejected_without_touching_file() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    ConfigStore::new(&path).load().unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let result = handle_set(
        &path,
        SetCommands::Unit {
            unit: 12,
            field: UnitField::Name,
            value: "nope".to_string(),
        },
    );
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn backup_is_a_warning_without_config_and_a_copy_with_one() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    // No file yet: warning path, still Ok
    handle_backup(&path).unwrap();
    assert!(!path.exists());

    ConfigStore::new(&path).load().unwrap();
    handle_backup(&path).unwrap();

    let backups: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_name()
                .to_string_lossy()
                .starts_with("config_backup_")
        })
        .collect();
    assert_eq!(backups.len(), 1);
}

#[test]
fn keygen_writes_key_file() {
    let dir = TempDir::new().unwrap();

    handle_keygen(Some(dir.path().to_path_buf())).unwrap();

    let content = fs::read_to_string(dir.path().join("api_key.txt")).unwrap();
    assert!(content.starts_with("api_key: \""));
    // 32 random bytes encode to 44 base64 characters
    let key = content
        .trim()
        .strip_prefix("api_key: \"")
        .and_then(|s| s.strip_suffix('"'))
        .unwrap();
    assert_eq!(key.len(), 44);
}
