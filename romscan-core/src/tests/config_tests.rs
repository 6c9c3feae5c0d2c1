use super::*;

fn settings(multidisc: Option<bool>) -> ScannerSettings {
    ScannerSettings {
        multidisc,
        ..Default::default()
    }
}

#[test]
fn defaults_when_absent() {
    let config = ScanConfig::from_settings(&settings(Some(false))).unwrap();
    assert_eq!(config.rom_path, FileRef::new(DEFAULT_ROM_PATH));
    assert!(config.extensions.is_empty());
    assert!(!config.recursive);
    assert!(config.ignore_bios);
    assert!(!config.multi_disc);
}

#[test]
fn multidisc_is_required() {
    let err = ScanConfig::from_settings(&settings(None)).unwrap_err();
    assert!(matches!(err, ScanError::MissingSetting(ref k) if k == "multidisc"));
}

#[test]
fn explicit_values() {
    let s = ScannerSettings {
        rompath: Some("/roms/psx".to_string()),
        romext: Some("cue|iso|chd".to_string()),
        scan_recursive: Some(true),
        ignore_bios: Some(false),
        multidisc: Some(true),
    };
    let config = ScanConfig::from_settings(&s).unwrap();
    assert_eq!(config.rom_path.path_string(), "/roms/psx");
    assert_eq!(config.extensions, vec!["cue", "iso", "chd"]);
    assert!(config.recursive);
    assert!(!config.ignore_bios);
    assert!(config.multi_disc);
}

#[test]
fn dotted_extension_rejected() {
    let s = ScannerSettings {
        romext: Some("cue|.bin".to_string()),
        multidisc: Some(false),
        ..Default::default()
    };
    let err = ScanConfig::from_settings(&s).unwrap_err();
    assert!(matches!(err, ScanError::InvalidSetting { ref key, .. } if key == "romext"));
}

#[test]
fn parse_extensions_drops_empty_items() {
    assert_eq!(parse_extensions("cue||bin|"), vec!["cue", "bin"]);
    assert!(parse_extensions("").is_empty());
}

#[test]
fn settings_round_trip_through_config() {
    let config = ScanConfig::new("/roms")
        .extensions(["zip", "7z"])
        .recursive(true)
        .multi_disc(true);
    let s = ScannerSettings::from(&config);
    assert_eq!(s.romext.as_deref(), Some("zip|7z"));
    assert_eq!(ScanConfig::from_settings(&s).unwrap(), config);
}
