//! Bilingual content fields.

use serde::Serialize;

/// A content field carried in both site languages.
///
/// Every bilingual field is rendered as two co-located markup nodes, one per
/// language, with the inactive one hidden client-side. Both translations must
/// be present; [`crate::validate`] enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bilingual {
    /// English text
    pub en: &'static str,
    /// Danish text
    pub da: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, da: &'static str) -> Self {
        Self { en, da }
    }

    /// Whether both translations are present.
    pub fn is_complete(&self) -> bool {
        !self.en.trim().is_empty() && !self.da.trim().is_empty()
    }
}

/// Shorthand constructor for record tables.
pub const fn bi(en: &'static str, da: &'static str) -> Bilingual {
    Bilingual::new(en, da)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_pair() {
        assert!(bi("Contact", "Kontakt").is_complete());
    }

    #[test]
    fn missing_translation_is_incomplete() {
        assert!(!bi("Contact", "").is_complete());
        assert!(!bi("  ", "Kontakt").is_complete());
    }
}
