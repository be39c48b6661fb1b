/// Character-level classification for Devanagari output.

pub const HALANT: char = '\u{094D}';

pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Dependent vowel signs (matras), U+093A..U+094C plus the rare
/// U+0955..U+0957 extensions.
pub fn is_matra_sign(c: char) -> bool {
    ('\u{093A}'..='\u{094C}').contains(&c) || ('\u{0955}'..='\u{0957}').contains(&c)
}

pub fn is_halant(c: char) -> bool {
    c == HALANT
}

/// Check that a string consists entirely of Devanagari code points.
pub fn is_devanagari_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_devanagari)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_devanagari('क'));
        assert!(is_devanagari('ा'));
        assert!(is_devanagari('्'));
        assert!(!is_devanagari('k'));
        assert!(!is_devanagari('あ'));
        assert!(is_matra_sign('ा'));
        assert!(is_matra_sign('ौ'));
        assert!(!is_matra_sign('क'));
        assert!(is_halant('्'));
        assert!(!is_halant('ा'));
    }

    #[test]
    fn test_is_devanagari_text() {
        assert!(is_devanagari_text("नमस्ते"));
        assert!(is_devanagari_text("्"));
        assert!(!is_devanagari_text("नमस्ते!"));
        assert!(!is_devanagari_text("abc"));
        assert!(!is_devanagari_text(""));
    }
}
