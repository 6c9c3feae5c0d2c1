use super::*;

#[test]
fn strip_disc_tag_basic() {
    assert_eq!(
        strip_disc_tag("Final Fantasy VII (USA) (Disc 1)"),
        "Final Fantasy VII (USA)"
    );
    assert_eq!(
        strip_disc_tag("Final Fantasy VII (Disc 2) (USA)"),
        "Final Fantasy VII (USA)"
    );
}

#[test]
fn strip_disc_tag_variants() {
    assert_eq!(strip_disc_tag("Game (Disk 2)"), "Game");
    assert_eq!(strip_disc_tag("Riven [CD 3]"), "Riven");
    assert_eq!(strip_disc_tag("Saga (Europe) (Disc 2 of 4)"), "Saga (Europe)");
    assert_eq!(strip_disc_tag("Resident Evil 2 (Disc 1 - Leon)"), "Resident Evil 2");
    assert_eq!(strip_disc_tag("Game (disc 1)"), "Game");
}

#[test]
fn strip_disc_tag_leaves_other_names_alone() {
    assert_eq!(strip_disc_tag("Crash Bandicoot (USA)"), "Crash Bandicoot (USA)");
    assert_eq!(strip_disc_tag("Disc World (Europe)"), "Disc World (Europe)");
    assert_eq!(strip_disc_tag("Game (Discography)"), "Game (Discography)");
    assert_eq!(strip_disc_tag("Game (Disc A)"), "Game (Disc A)");
    assert_eq!(strip_disc_tag("Game (Disc 1 Bonus)"), "Game (Disc 1 Bonus)");
    assert_eq!(strip_disc_tag("[BIOS] PlayStation"), "[BIOS] PlayStation");
}

#[test]
fn extract_disc_numbers() {
    assert_eq!(extract_disc_number("Game (USA) (Disc 2)"), Some(2));
    assert_eq!(extract_disc_number("Game [CD 12]"), Some(12));
    assert_eq!(extract_disc_number("Game (Disc 3 of 4)"), Some(3));
    assert_eq!(extract_disc_number("Game (USA)"), None);
    assert_eq!(extract_disc_number("Game (Disc 1"), None);
}

#[test]
fn unclosed_bracket_does_not_hide_a_later_disc_tag() {
    assert_eq!(extract_disc_number("Game [beta (Disc 1)"), Some(1));
    assert_eq!(strip_disc_tag("Game [beta (Disc 1)"), "Game [beta");
    assert_eq!(extract_disc_number("Game (proto [CD 2]"), Some(2));

    let verdict = DiscTagParser.parse(&FileRef::from("/roms/Game [beta (Disc 1).cue"));
    assert!(verdict.is_multi_disc);
    assert_eq!(verdict.set_name, "Game [beta.cue");
}

#[test]
fn parser_names_set_after_stripped_file() {
    let verdict = DiscTagParser.parse(&FileRef::from("/roms/Best Game (Disc 2).bin"));
    assert_eq!(
        verdict,
        MultiDiscVerdict::disc("Best Game.bin", "Best Game (Disc 2).bin", ".bin", 2)
    );
}

#[test]
fn parser_keeps_region_tags_in_set_name() {
    let verdict = DiscTagParser.parse(&FileRef::from("/roms/Final Fantasy VII (USA) (Disc 3).cue"));
    assert!(verdict.is_multi_disc);
    assert_eq!(verdict.set_name, "Final Fantasy VII (USA).cue");
    assert_eq!(verdict.order, 3);
}

#[test]
fn parser_single_disc() {
    let verdict = DiscTagParser.parse(&FileRef::from("/roms/Crash Bandicoot (USA).cue"));
    assert_eq!(verdict, MultiDiscVerdict::single());
}

#[test]
fn discs_of_one_set_share_a_set_name() {
    let one = DiscTagParser.parse(&FileRef::from("/roms/Saga (Disc 1 of 2).iso"));
    let two = DiscTagParser.parse(&FileRef::from("/roms/Saga (Disc 2 of 2).iso"));
    assert_eq!(one.set_name, two.set_name);
    assert_ne!(one.disc_name, two.disc_name);
}
