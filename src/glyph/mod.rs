//! Hebrew and Yiddish glyph catalog.
//!
//! ## Components
//!
//! - [`record`]: the [`HebrewChar`] record and its [`HebrewCharKind`] classification
//! - [`alphabet`]: the 38 letter and ligature records with their spelling-variant bindings
//! - [`marks`]: niqqud and punctuation/cantillation marks as bare literals
//! - [`catalog`]: [`GlyphRegistry`], indexed by glyph, with final-letter and Yiddish views
//! - [`search`]: case-insensitive lookup by English name or alias

pub mod alphabet;
pub mod catalog;
pub mod marks;
pub mod record;
pub mod search;

pub use catalog::{
    DuplicatePolicy, GlyphRegistry, RegistryConfig, all_chars, classify, final_letters,
    lookup_by_char, lookup_normalized, registry, yiddish_letters,
};
pub use record::{HebrewChar, HebrewCharKind};
pub use search::{resolve_name, search_by_name};
