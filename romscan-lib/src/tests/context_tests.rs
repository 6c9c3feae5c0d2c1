use super::*;
use crate::candidate::FileCandidate;
use crate::scanner::{ScanContext, ScanOutcome, ScanStats};
use romscan_core::{CatalogEntry, FileRef};

struct NullScanner {
    config: ScanConfig,
}

impl RomScanner for NullScanner {
    fn name(&self) -> &str {
        "Null scanner"
    }

    fn rom_path(&self) -> &FileRef {
        &self.config.rom_path
    }

    fn rom_extensions(&self) -> &[String] {
        &self.config.extensions
    }

    fn scan_recursive(&self) -> bool {
        false
    }

    fn ignore_bios(&self) -> bool {
        true
    }

    fn supports_multidisc(&self) -> bool {
        false
    }

    fn get_candidates(&self, _ctx: &ScanContext<'_>) -> Result<Vec<FileCandidate>, ScanError> {
        Ok(Vec::new())
    }

    fn get_dead_entries(
        &self,
        _catalog: &mut Vec<CatalogEntry>,
        _ctx: &ScanContext<'_>,
    ) -> Vec<CatalogEntry> {
        Vec::new()
    }

    fn process_candidates(
        &self,
        _candidates: Vec<FileCandidate>,
        _catalog: &[CatalogEntry],
        _ctx: &ScanContext<'_>,
    ) -> (ScanOutcome, ScanStats) {
        (ScanOutcome::Completed(Vec::new()), ScanStats::default())
    }
}

fn null_scanner(config: ScanConfig) -> Box<dyn RomScanner> {
    Box::new(NullScanner { config })
}

#[test]
fn builtin_registry_has_folder_scanner() {
    let registry = ScannerRegistry::with_builtin();
    assert_eq!(registry.ids(), ["folder"]);

    let scanner = registry.build("folder", ScanConfig::new("/roms")).unwrap();
    assert_eq!(scanner.name(), "Folder scanner");
}

#[test]
fn lookup_is_case_insensitive() {
    let registry = ScannerRegistry::with_builtin();
    assert!(registry.get("Folder").is_some());
    assert!(registry.get("FOLDER").is_some());
}

#[test]
fn unknown_scanner_is_an_error() {
    let registry = ScannerRegistry::with_builtin();
    let err = registry
        .build("steam", ScanConfig::new("/roms"))
        .err()
        .unwrap();
    assert!(matches!(err, ScanError::UnknownScanner(ref id) if id == "steam"));
}

#[test]
fn registered_scanners_keep_order() {
    let mut registry = ScannerRegistry::new();
    assert_eq!(registry.scanners().count(), 0);

    registry
        .register("null", "Null scanner", "Finds nothing", null_scanner)
        .register("folder", "Folder", "Plain folder", null_scanner);

    assert_eq!(registry.ids(), ["null", "folder"]);
    let first = registry.scanners().next().unwrap();
    assert_eq!(first.description, "Finds nothing");
}

#[test]
fn built_scanner_receives_config() {
    let mut registry = ScannerRegistry::new();
    registry.register("null", "Null scanner", "Finds nothing", null_scanner);

    let scanner = registry
        .build("null", ScanConfig::new("/games").extensions(["iso"]))
        .unwrap();
    assert_eq!(scanner.name(), "Null scanner");
    assert_eq!(scanner.rom_path().path_string(), "/games");
    assert_eq!(scanner.rom_extensions(), ["iso"]);
}
