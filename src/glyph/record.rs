//! Glyph records: one Hebrew or Yiddish character and the names it goes by.

use std::fmt;
use std::str::FromStr;

use crate::error::GlyphError;

/// Classification of a Hebrew script character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HebrewCharKind {
    /// A letter of the Hebrew alphabet, final forms included.
    Letter,
    /// A Yiddish digraph or ligature (e.g. double vav).
    YiddishLetter,
    /// A punctuation or cantillation mark.
    Punctuation,
    /// A vowel point.
    Nikud,
}

impl HebrewCharKind {
    /// Every kind, in declaration order.
    pub const ALL: [HebrewCharKind; 4] = [
        HebrewCharKind::Letter,
        HebrewCharKind::YiddishLetter,
        HebrewCharKind::Punctuation,
        HebrewCharKind::Nikud,
    ];

    /// The lowercase tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::YiddishLetter => "yiddish_letter",
            Self::Punctuation => "punctuation",
            Self::Nikud => "nikud",
        }
    }
}

impl fmt::Display for HebrewCharKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HebrewCharKind {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GlyphError::UnknownKind {
                value: s.to_string(),
            })
    }
}

/// Metadata for one Hebrew glyph.
///
/// Records are plain `'static` data so the alphabet table can live in
/// `static` items. Construction never fails; a [`GlyphRegistry`] validates
/// a table when it is built.
///
/// [`GlyphRegistry`]: crate::glyph::GlyphRegistry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct HebrewChar {
    /// The literal glyph. May be several code points (letter plus dagesh, shin dot...).
    pub char: &'static str,
    /// Primary English name, e.g. "Aleph".
    pub canonical_name: &'static str,
    /// Primary Hebrew name. Empty when unknown.
    pub canonical_hebrew_name: &'static str,
    /// Alternate English spellings.
    pub name_aliases: &'static [&'static str],
    /// Alternate Hebrew spellings.
    pub hebrew_name_aliases: &'static [&'static str],
    /// Whether this is a sofit (word-final) form.
    pub is_final_form: bool,
    pub classification: HebrewCharKind,
}

impl HebrewChar {
    /// A non-final [`HebrewCharKind::Letter`] with no aliases.
    pub const fn new(
        glyph: &'static str,
        canonical_name: &'static str,
        canonical_hebrew_name: &'static str,
    ) -> Self {
        Self {
            char: glyph,
            canonical_name,
            canonical_hebrew_name,
            name_aliases: &[],
            hebrew_name_aliases: &[],
            is_final_form: false,
            classification: HebrewCharKind::Letter,
        }
    }

    pub const fn with_name_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.name_aliases = aliases;
        self
    }

    pub const fn with_hebrew_name_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.hebrew_name_aliases = aliases;
        self
    }

    /// Mark the record as a sofit form.
    pub const fn final_form(mut self) -> Self {
        self.is_final_form = true;
        self
    }

    pub const fn with_classification(mut self, classification: HebrewCharKind) -> Self {
        self.classification = classification;
        self
    }

    /// The canonical English name followed by its aliases.
    pub fn all_names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.canonical_name).chain(self.name_aliases.iter().copied())
    }

    /// The canonical Hebrew name followed by its aliases.
    pub fn all_hebrew_names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.canonical_hebrew_name)
            .chain(self.hebrew_name_aliases.iter().copied())
    }

    /// Whether `query` equals one of the English names, ignoring ASCII case.
    pub fn answers_to(&self, query: &str) -> bool {
        self.all_names().any(|name| name.eq_ignore_ascii_case(query))
    }

    /// Whether the glyph is exactly one Unicode code point.
    pub fn is_single_code_point(&self) -> bool {
        let mut chars = self.char.chars();
        chars.next().is_some() && chars.next().is_none()
    }
}

impl fmt::Display for HebrewChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TSADI: HebrewChar = HebrewChar::new("צ", "Tsadi", "צַדִי")
        .with_name_aliases(&["Tzadik"])
        .with_hebrew_name_aliases(&["צדיק"]);

    #[test]
    fn builder_defaults_to_plain_letter() {
        let c = HebrewChar::new("א", "Aleph", "אָלֶף");
        assert_eq!(c.classification, HebrewCharKind::Letter);
        assert!(!c.is_final_form);
        assert!(c.name_aliases.is_empty());
        assert!(c.hebrew_name_aliases.is_empty());
    }

    #[test]
    fn all_names_put_canonical_first() {
        assert_eq!(TSADI.all_names().collect::<Vec<_>>(), ["Tsadi", "Tzadik"]);
        assert_eq!(
            TSADI.all_hebrew_names().collect::<Vec<_>>(),
            ["צַדִי", "צדיק"]
        );
    }

    #[test]
    fn empty_hebrew_name_is_still_listed() {
        let c = HebrewChar::new("ױ", "Vav Yod", "")
            .with_classification(HebrewCharKind::YiddishLetter);
        assert_eq!(c.all_hebrew_names().collect::<Vec<_>>(), [""]);
        assert_eq!(c.classification, HebrewCharKind::YiddishLetter);
    }

    #[test]
    fn answers_to_ignores_ascii_case_only() {
        assert!(TSADI.answers_to("tsadi"));
        assert!(TSADI.answers_to("TZADIK"));
        assert!(!TSADI.answers_to("Tsad"));
        assert!(!TSADI.answers_to("צַדִי"));
    }

    #[test]
    fn single_code_point_detection() {
        assert!(HebrewChar::new("ך", "Chaf Sofit", "").is_single_code_point());
        assert!(!HebrewChar::new("ךּ", "Kaf Sofit", "").is_single_code_point());
        assert!(!HebrewChar::new("", "Nothing", "").is_single_code_point());
    }

    #[test]
    fn display_writes_the_glyph() {
        assert_eq!(TSADI.to_string(), "צ");
    }

    #[test]
    fn kind_tags_round_trip() {
        for kind in HebrewCharKind::ALL {
            assert_eq!(kind.to_string().parse::<HebrewCharKind>().unwrap(), kind);
        }
        assert_eq!(HebrewCharKind::YiddishLetter.to_string(), "yiddish_letter");
    }

    #[test]
    fn unknown_kind_tag_is_an_error() {
        let err = "Letter".parse::<HebrewCharKind>().unwrap_err();
        assert_eq!(
            err,
            GlyphError::UnknownKind {
                value: "Letter".into()
            }
        );
    }
}
