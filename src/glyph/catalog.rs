//! Glyph registry: the alphabet table indexed by character.
//!
//! The built-in registry is built from [`ALL_CHARS`] on first access and is
//! read-only afterwards, so it can be shared across threads freely.
//! [`GlyphRegistry::build`] builds a registry from any other table.

use std::collections::HashMap;
use std::sync::OnceLock;

use unicode_normalization::UnicodeNormalization;

use super::alphabet::ALL_CHARS;
use super::marks;
use super::record::{HebrewChar, HebrewCharKind};
use crate::error::{GlyphError, GlyphResult};

/// What to do when two records in a table share the same `char`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail the build with [`GlyphError::DuplicateChar`].
    #[default]
    Reject,
    /// Keep the later record in the character index and log a warning.
    LastWriteWins,
}

/// Options for [`GlyphRegistry::build`].
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    pub duplicates: DuplicatePolicy,
}

/// An immutable index over a table of glyph records.
#[derive(Debug, Clone)]
pub struct GlyphRegistry {
    /// Records in declaration order.
    chars: Vec<&'static HebrewChar>,
    by_char: HashMap<&'static str, &'static HebrewChar>,
    final_letters: Vec<&'static HebrewChar>,
    yiddish_letters: Vec<&'static HebrewChar>,
}

impl GlyphRegistry {
    /// Index `records`, validating each one and applying the duplicate policy.
    pub fn build(records: &[&'static HebrewChar], config: &RegistryConfig) -> GlyphResult<Self> {
        let mut by_char = HashMap::with_capacity(records.len());

        for &record in records {
            validate(record)?;
            if let Some(previous) = by_char.insert(record.char, record) {
                match config.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(GlyphError::DuplicateChar {
                            glyph: record.char.to_string(),
                            first: previous.canonical_name.to_string(),
                            second: record.canonical_name.to_string(),
                        });
                    }
                    DuplicatePolicy::LastWriteWins => {
                        tracing::warn!(
                            glyph = record.char,
                            replaced = previous.canonical_name,
                            kept = record.canonical_name,
                            "duplicate glyph, keeping the later record"
                        );
                    }
                }
            }
        }

        let final_letters: Vec<_> = records
            .iter()
            .copied()
            .filter(|c| c.is_final_form && c.is_single_code_point())
            .collect();
        let yiddish_letters: Vec<_> = records
            .iter()
            .copied()
            .filter(|c| c.classification == HebrewCharKind::YiddishLetter)
            .collect();

        tracing::debug!(
            records = records.len(),
            indexed = by_char.len(),
            final_letters = final_letters.len(),
            yiddish_letters = yiddish_letters.len(),
            "glyph registry built"
        );

        Ok(Self {
            chars: records.to_vec(),
            by_char,
            final_letters,
            yiddish_letters,
        })
    }

    /// Exact lookup by the literal glyph string.
    pub fn lookup_by_char(&self, glyph: &str) -> Option<&'static HebrewChar> {
        self.by_char.get(glyph).copied()
    }

    /// Like [`lookup_by_char`](Self::lookup_by_char), after NFC-normalizing
    /// the input. Presentation forms (U+FB1D..U+FB4F) decompose to the
    /// letter-plus-mark sequences the table uses.
    pub fn lookup_normalized(&self, text: &str) -> Option<&'static HebrewChar> {
        self.lookup_by_char(text).or_else(|| {
            let normalized: String = text.nfc().collect();
            self.lookup_by_char(&normalized)
        })
    }

    /// Like [`lookup_by_char`](Self::lookup_by_char), but absence is an error.
    pub fn resolve_char(&self, glyph: &str) -> GlyphResult<&'static HebrewChar> {
        self.lookup_by_char(glyph)
            .ok_or_else(|| GlyphError::UnknownChar {
                glyph: glyph.to_string(),
            })
    }

    /// Classify a glyph: a record's classification, or [`HebrewCharKind::Nikud`]
    /// / [`HebrewCharKind::Punctuation`] for a single bare mark.
    pub fn classify(&self, text: &str) -> Option<HebrewCharKind> {
        if let Some(record) = self.lookup_normalized(text) {
            return Some(record.classification);
        }
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if marks::is_niqqud(c) => Some(HebrewCharKind::Nikud),
            (Some(c), None) if marks::is_punctuation(c) => Some(HebrewCharKind::Punctuation),
            _ => None,
        }
    }

    /// Single-code-point sofit letters, in table order.
    pub fn final_letters(&self) -> &[&'static HebrewChar] {
        &self.final_letters
    }

    /// Yiddish ligatures, in table order.
    pub fn yiddish_letters(&self) -> &[&'static HebrewChar] {
        &self.yiddish_letters
    }

    /// Every record in declaration order, including any shadowed by a later duplicate.
    pub fn chars(&self) -> &[&'static HebrewChar] {
        &self.chars
    }

    /// Number of distinct glyphs in the index.
    pub fn len(&self) -> usize {
        self.by_char.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_char.is_empty()
    }
}

fn validate(record: &HebrewChar) -> GlyphResult<()> {
    if record.char.is_empty() {
        return Err(GlyphError::EmptyChar {
            name: record.canonical_name.to_string(),
        });
    }
    if record.all_names().any(str::is_empty) {
        return Err(GlyphError::EmptyName {
            glyph: record.char.to_string(),
        });
    }
    Ok(())
}

static REGISTRY: OnceLock<GlyphRegistry> = OnceLock::new();

/// The registry over the built-in alphabet table.
pub fn registry() -> &'static GlyphRegistry {
    REGISTRY.get_or_init(|| {
        GlyphRegistry::build(ALL_CHARS, &RegistryConfig::default())
            .expect("built-in alphabet table has unique, named glyphs")
    })
}

/// Every built-in record in declaration order.
pub fn all_chars() -> &'static [&'static HebrewChar] {
    registry().chars()
}

/// Look up a built-in glyph by its literal string.
/// Returns `None` if no record has exactly that `char`.
pub fn lookup_by_char(glyph: &str) -> Option<&'static HebrewChar> {
    registry().lookup_by_char(glyph)
}

/// Look up a built-in glyph after NFC normalization.
pub fn lookup_normalized(text: &str) -> Option<&'static HebrewChar> {
    registry().lookup_normalized(text)
}

/// Classify a glyph or bare mark against the built-in catalog.
pub fn classify(text: &str) -> Option<HebrewCharKind> {
    registry().classify(text)
}

/// The built-in single-code-point final letters.
pub fn final_letters() -> &'static [&'static HebrewChar] {
    registry().final_letters()
}

/// The built-in Yiddish ligatures.
pub fn yiddish_letters() -> &'static [&'static HebrewChar] {
    registry().yiddish_letters()
}
