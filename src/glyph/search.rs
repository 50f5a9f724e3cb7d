//! Name search: resolve an English glyph name to its record.
//!
//! Matching is exact after ASCII case folding, over canonical names and
//! English aliases. Hebrew names are not searched.

use super::catalog::{GlyphRegistry, registry};
use super::record::HebrewChar;
use crate::error::{GlyphError, GlyphResult};

impl GlyphRegistry {
    /// Find the first record, in table order, answering to `query`.
    ///
    /// The hit is resolved through the character index, so when a table was
    /// built with `LastWriteWins` the surviving record for that glyph is
    /// returned.
    pub fn search_by_name(&self, query: &str) -> Option<&'static HebrewChar> {
        let found = self
            .chars()
            .iter()
            .find(|c| c.answers_to(query))
            .and_then(|c| self.lookup_by_char(c.char));
        if found.is_none() {
            tracing::trace!(query, "no glyph matches name");
        }
        found
    }

    /// Like [`search_by_name`](Self::search_by_name), but absence is an error.
    pub fn resolve_name(&self, query: &str) -> GlyphResult<&'static HebrewChar> {
        self.search_by_name(query)
            .ok_or_else(|| GlyphError::UnknownName {
                name: query.to_string(),
            })
    }
}

/// Search the built-in catalog by English name or alias (case-insensitive).
/// Returns `None` if nothing matches.
pub fn search_by_name(query: &str) -> Option<&'static HebrewChar> {
    registry().search_by_name(query)
}

/// Search the built-in catalog, reporting a miss as [`GlyphError::UnknownName`].
pub fn resolve_name(query: &str) -> GlyphResult<&'static HebrewChar> {
    registry().resolve_name(query)
}
