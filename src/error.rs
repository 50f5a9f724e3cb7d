//! Rich diagnostic error types for the glyph catalog.
//!
//! Lookups report absence with `Option`; these errors only surface when a
//! registry is built from a malformed table, when a caller asks for a strict
//! resolution, or when a classification tag fails to parse.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building or strictly querying the glyph catalog.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum GlyphError {
    #[error("glyph '{name}' has an empty character string")]
    #[diagnostic(
        code(hebrew_glyphs::table::empty_char),
        help("Every record needs a non-empty `char`. Fix the table entry before building the registry.")
    )]
    EmptyChar { name: String },

    #[error("glyph '{glyph}' has an empty name")]
    #[diagnostic(
        code(hebrew_glyphs::table::empty_name),
        help(
            "The canonical name and every English alias must be non-empty. \
             Remove the blank alias or give the record a canonical name."
        )
    )]
    EmptyName { glyph: String },

    #[error("duplicate glyph '{glyph}': '{first}' and '{second}' share the same character")]
    #[diagnostic(
        code(hebrew_glyphs::table::duplicate_char),
        help(
            "Each character may be registered once. Merge the two records, or build with \
             `DuplicatePolicy::LastWriteWins` to let the later record replace the earlier one."
        )
    )]
    DuplicateChar {
        glyph: String,
        first: String,
        second: String,
    },

    #[error("no glyph is named '{name}'")]
    #[diagnostic(
        code(hebrew_glyphs::search::unknown_name),
        help("Names match case-insensitively against English names and aliases. Use all_chars() to list them.")
    )]
    UnknownName { name: String },

    #[error("no glyph is registered for '{glyph}'")]
    #[diagnostic(
        code(hebrew_glyphs::catalog::unknown_char),
        help(
            "Only letters and Yiddish ligatures are records. Vowel points and \
             cantillation marks live in `marks::NIQQUD` and `marks::PUNCTUATION`."
        )
    )]
    UnknownChar { glyph: String },

    #[error("unknown glyph kind: {value}")]
    #[diagnostic(
        code(hebrew_glyphs::kind::unknown),
        help("Valid kinds are: letter, yiddish_letter, punctuation, nikud.")
    )]
    UnknownKind { value: String },
}

/// Result type for glyph operations.
pub type GlyphResult<T> = std::result::Result<T, GlyphError>;
