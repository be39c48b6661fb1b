//! Dictionary-first, greedy longest-match transliteration.
//!
//! Each word segment is looked up whole in the word dictionary; on a miss
//! it is decomposed left to right, always taking the longest table match at
//! the current position. At equal length a consonant+vowel combination
//! beats a pure consonant cluster, which beats a standalone vowel.
//! Characters no table knows pass through unchanged, so the engine is
//! total over all inputs.

use crate::rules::RuleSet;
use crate::tokenize::{segments, SegmentKind};

/// Transliterate `text` using the process-wide rule set.
///
/// Empty or whitespace-only input yields an empty string; whitespace and
/// punctuation are otherwise preserved verbatim in their original order.
pub fn transliterate(text: &str) -> String {
    transliterate_with(text, RuleSet::global())
}

/// Same as [`transliterate`], against an explicit rule set.
pub fn transliterate_with(text: &str, rules: &RuleSet) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len() * 3);
    for seg in segments(text, rules) {
        match seg.kind {
            SegmentKind::Word => out.push_str(&transliterate_word(seg.text, rules)),
            SegmentKind::Whitespace | SegmentKind::Punctuation => out.push_str(seg.text),
        }
    }
    out
}

/// Transliterate a single word. Never fails.
pub fn transliterate_word(word: &str, rules: &RuleSet) -> String {
    // Case-fold per char so folded and original stay index-aligned; the
    // tables only hold ASCII keys anyway.
    let original: Vec<char> = word.chars().collect();
    let folded: Vec<char> = original.iter().map(|c| c.to_ascii_lowercase()).collect();

    let folded_word: String = folded.iter().collect();
    // Whole-word dictionary hit preempts any decomposition
    if let Some(hit) = rules.word(&folded_word) {
        return hit.to_string();
    }

    let mut out = String::new();
    let mut i = 0;
    while i < folded.len() {
        let consumed = emit_longest_match(&folded, i, rules, &mut out);
        if consumed == 0 {
            // Identity fallback for unmapped characters
            out.push(original[i]);
            i += 1;
        } else {
            i += consumed;
        }
    }
    out
}

/// Emit the longest table match starting at `pos` and return how many input
/// characters it consumed (0 when nothing matched).
///
/// For each candidate length, longest first, the precedence is:
/// 1. consonant cluster + vowel suffix, trying the longest consonant prefix
///    first; the suffix is either a matra spelling or the literal "a"
///    (inherent vowel — the base glyph alone already carries it);
/// 2. a pure consonant cluster, which gets the halant appended;
/// 3. a standalone vowel spelling.
fn emit_longest_match(chars: &[char], pos: usize, rules: &RuleSet, out: &mut String) -> usize {
    let remaining = chars.len() - pos;
    let max_len = rules.max_scan_len().min(remaining);

    for len in (1..=max_len).rev() {
        let slice = &chars[pos..pos + len];
        if !slice.iter().all(|c| c.is_ascii()) {
            // Table keys are ASCII; a shorter candidate may still match
            continue;
        }
        let candidate: String = slice.iter().collect();

        for split in (1..len).rev() {
            let (cons, vowel) = candidate.split_at(split);
            let Some(glyph) = rules.consonant(cons) else {
                continue;
            };
            if vowel == "a" {
                out.push_str(glyph);
                return len;
            }
            if let Some(matra) = rules.matra(vowel) {
                out.push_str(glyph);
                out.push_str(matra);
                return len;
            }
        }

        if let Some(glyph) = rules.consonant(&candidate) {
            out.push_str(glyph);
            out.push_str(rules.halant());
            return len;
        }

        if let Some(glyph) = rules.vowel(&candidate) {
            out.push_str(glyph);
            return len;
        }
    }

    0
}
