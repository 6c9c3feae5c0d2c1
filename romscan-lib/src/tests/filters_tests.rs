use super::*;

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn extension_matches_any_allowed() {
    let allowed = exts(&["cue", "iso"]);
    assert_eq!(
        matches_extension(&FileRef::from("/roms/game.cue"), &allowed),
        Some("cue")
    );
    assert_eq!(
        matches_extension(&FileRef::from("/roms/game.iso"), &allowed),
        Some("iso")
    );
    assert_eq!(
        matches_extension(&FileRef::from("/roms/game.bin"), &allowed),
        None
    );
}

#[test]
fn extension_is_case_sensitive() {
    let allowed = exts(&["cue"]);
    assert_eq!(
        matches_extension(&FileRef::from("/roms/GAME.CUE"), &allowed),
        None
    );
}

#[test]
fn empty_allow_list_matches_nothing() {
    assert_eq!(matches_extension(&FileRef::from("/roms/game.cue"), &[]), None);
}

#[test]
fn file_without_extension_never_matches() {
    let allowed = exts(&["cue", ""]);
    assert_eq!(
        matches_extension(&FileRef::from("/roms/README"), &allowed),
        None
    );
}

#[test]
fn extension_must_match_whole_suffix() {
    let allowed = exts(&["bin"]);
    assert_eq!(
        matches_extension(&FileRef::from("/roms/game.cbin"), &allowed),
        None
    );
    assert_eq!(
        matches_extension(&FileRef::from("/roms/game.bin.bak"), &allowed),
        None
    );
}

#[test]
fn bios_marker_in_base_name() {
    assert!(is_bios(&FileRef::from("/roms/[BIOS] PlayStation (v3.0).bin")));
    assert!(is_bios(&FileRef::from("/roms/PlayStation [BIOS].bin")));
    assert!(!is_bios(&FileRef::from("/roms/[bios] PlayStation.bin")));
    assert!(!is_bios(&FileRef::from("/[BIOS]/PlayStation.bin")));
}

#[test]
fn known_files_seeded_from_entries() {
    let entries = vec![
        CatalogEntry::from_file(&FileRef::from("/roms/a.cue")),
        CatalogEntry::new("no file"),
    ];
    let known = KnownFiles::from_entries(&entries);
    assert_eq!(known.len(), 1);
    assert!(known.is_duplicate(&FileRef::from("/roms/a.cue")));
    assert!(!known.is_duplicate(&FileRef::from("/roms/b.cue")));
}

#[test]
fn known_files_compare_normalized_paths() {
    let entries = vec![CatalogEntry::from_file(&FileRef::from("/roms/a.cue"))];
    let known = KnownFiles::from_entries(&entries);
    assert!(known.is_duplicate(&FileRef::from("/roms/./a.cue")));
    assert!(known.is_duplicate(&FileRef::from("/roms/sub/../a.cue")));
}

#[test]
fn known_files_grow_with_inserts() {
    let mut known = KnownFiles::default();
    assert!(known.is_empty());
    known.insert(FileRef::from("/roms/a.cue"));
    assert!(known.is_duplicate(&FileRef::from("/roms/a.cue")));
    assert_eq!(known.len(), 1);
}
