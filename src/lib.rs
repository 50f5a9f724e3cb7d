// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # hebrew-glyphs
//!
//! A reference catalog of Hebrew and Yiddish letters, vowel points (niqqud)
//! and cantillation marks, with lookup by glyph or by English name.
//!
//! ## Architecture
//!
//! - **Records** (`glyph::record`): immutable `'static` metadata per glyph
//! - **Alphabet** (`glyph::alphabet`): the letter table and its alias bindings
//! - **Marks** (`glyph::marks`): niqqud and punctuation literals
//! - **Registry** (`glyph::catalog`): build-once index with derived views
//! - **Search** (`glyph::search`): name and alias resolution
//!
//! ## Library usage
//!
//! ```
//! use hebrew_glyphs::glyph::{self, HebrewCharKind};
//!
//! let aleph = glyph::search_by_name("alef").unwrap();
//! assert_eq!(aleph.char, "א");
//! assert_eq!(aleph.classification, HebrewCharKind::Letter);
//!
//! let chaf = glyph::lookup_by_char("ך").unwrap();
//! assert!(chaf.is_final_form);
//! ```

pub mod error;
pub mod glyph;

pub use error::{GlyphError, GlyphResult};
pub use glyph::{GlyphRegistry, HebrewChar, HebrewCharKind};
