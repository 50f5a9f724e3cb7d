//! End-to-end tests for the glyph catalog.
//!
//! These go through the public API only: the built-in registry, name search,
//! the derived views, and registries built from caller-supplied tables.

use std::collections::HashSet;

use hebrew_glyphs::glyph::{
    self, DuplicatePolicy, GlyphRegistry, HebrewChar, HebrewCharKind, RegistryConfig, alphabet,
    marks,
};
use hebrew_glyphs::GlyphError;

#[test]
fn search_then_lookup_agree() {
    let aleph = glyph::search_by_name("Aleph").unwrap();
    assert_eq!(aleph.char, "א");
    assert_eq!(aleph.classification, HebrewCharKind::Letter);

    let again = glyph::search_by_name("alef").unwrap();
    assert!(std::ptr::eq(aleph, again));
    assert!(std::ptr::eq(glyph::lookup_by_char("א").unwrap(), aleph));
}

#[test]
fn every_record_round_trips_by_char_and_name() {
    let mut chars = HashSet::new();
    for &record in glyph::all_chars() {
        assert!(chars.insert(record.char), "{} registered twice", record.char);
        assert_eq!(glyph::lookup_by_char(record.char), Some(record));
        for name in record.all_names() {
            let hit = glyph::search_by_name(&name.to_ascii_uppercase()).unwrap();
            assert_eq!(hit.char, record.char);
        }
    }
}

#[test]
fn derived_views_match_their_filters() {
    let expected_finals: Vec<_> = glyph::all_chars()
        .iter()
        .copied()
        .filter(|c| c.is_final_form && c.char.chars().count() == 1)
        .collect();
    assert_eq!(glyph::final_letters(), expected_finals.as_slice());
    assert_eq!(glyph::final_letters().len(), 5);
    assert!(glyph::final_letters().contains(&alphabet::FINAL_TZADIK));

    let yiddish: Vec<_> = glyph::yiddish_letters()
        .iter()
        .map(|c| c.canonical_name)
        .collect();
    assert_eq!(yiddish, ["Double Yod", "Double Vav", "Vav Yod"]);
}

#[test]
fn misses_are_none_not_errors() {
    assert!(glyph::lookup_by_char("Ω").is_none());
    assert!(glyph::search_by_name("NotARealName").is_none());
    assert!(glyph::search_by_name("xyz123").is_none());
    assert!(matches!(
        glyph::resolve_name("xyz123"),
        Err(GlyphError::UnknownName { .. })
    ));
}

#[test]
fn classify_text_from_a_pointed_word() {
    // shin, qamats, shin dot, lamed, vav, holam, mem sofit
    let word = "שָׁלוֹם";
    let kinds: Vec<_> = word
        .chars()
        .map(|c| glyph::classify(c.encode_utf8(&mut [0; 4])))
        .collect();
    assert_eq!(
        kinds,
        [
            Some(HebrewCharKind::Letter),
            Some(HebrewCharKind::Nikud),
            Some(HebrewCharKind::Nikud),
            Some(HebrewCharKind::Letter),
            Some(HebrewCharKind::Letter),
            Some(HebrewCharKind::Nikud),
            Some(HebrewCharKind::Letter),
        ]
    );
    assert!(marks::is_niqqud(marks::SHIN_DOT));
}

#[test]
fn builtin_registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| glyph::registry() as *const GlyphRegistry as usize))
        .collect();
    let addrs: HashSet<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(addrs.len(), 1);
}

static KAMATZ_ALEPH: HebrewChar = HebrewChar::new("אָ", "Kamatz Aleph", "קָמֵץ אָלֶף")
    .with_name_aliases(&["Komatz Alef"]);
static PATACH_ALEPH: HebrewChar =
    HebrewChar::new("אַ", "Pasech Aleph", "פַּתַּח אָלֶף").with_name_aliases(&["Patach Alef"]);
static PATACH_ALEPH_AGAIN: HebrewChar = HebrewChar::new("אַ", "Pasekh Alef", "");

#[test]
fn caller_tables_build_their_own_registry() {
    let reg = GlyphRegistry::build(
        &[&KAMATZ_ALEPH, &PATACH_ALEPH, alphabet::DOUBLE_VAV],
        &RegistryConfig::default(),
    )
    .unwrap();

    assert_eq!(reg.len(), 3);
    assert_eq!(reg.search_by_name("komatz alef").unwrap().char, "אָ");
    assert_eq!(reg.yiddish_letters(), [alphabet::DOUBLE_VAV]);
    assert!(reg.final_letters().is_empty());
    assert!(reg.search_by_name("Aleph").is_none());
}

#[test]
fn caller_tables_choose_a_duplicate_policy() {
    let table: [&'static HebrewChar; 2] = [&PATACH_ALEPH, &PATACH_ALEPH_AGAIN];

    let err = GlyphRegistry::build(&table, &RegistryConfig::default()).unwrap_err();
    assert!(matches!(err, GlyphError::DuplicateChar { .. }));

    let reg = GlyphRegistry::build(
        &table,
        &RegistryConfig {
            duplicates: DuplicatePolicy::LastWriteWins,
        },
    )
    .unwrap();
    let hit = reg.search_by_name("Patach Alef").unwrap();
    assert_eq!(hit.canonical_name, "Pasekh Alef");
}
