//*** START FILE: src/alignment/highlighter.rs ***//
use crate::types::lesson_data::VocabularyEntry;
use regex::Regex;
use serde::Serialize;

/// Output of highlighting: the input text cut into plain slices and
/// annotated matches. Concatenating the pieces reproduces the input
/// exactly; the reader view and the editor view both render from this.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub enum HighlightSegment {
    Plain(String),
    Matched { text: String, entry: VocabularyEntry },
}

impl HighlightSegment {
    pub fn text(&self) -> &str {
        match self {
            HighlightSegment::Plain(text) => text,
            HighlightSegment::Matched { text, .. } => text,
        }
    }
}

/// Finds vocabulary occurrences in the text: case-insensitive, whole-word,
/// longest entry first. One alternation regex covers the whole list; words
/// are escaped so an entry like "peer(s)" stays literal text instead of
/// becoming pattern syntax. Longer words are listed first in the
/// alternation because the engine tries alternatives left to right, which
/// is what keeps "block" from shadowing "block header".
pub fn highlight_vocabulary(text: &str, vocabulary: &[VocabularyEntry]) -> Vec<HighlightSegment> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<&VocabularyEntry> = vocabulary
        .iter()
        .filter(|entry| !entry.word.trim().is_empty())
        .collect();
    if candidates.is_empty() {
        // An alternation over zero words would match the empty string
        // everywhere; bail out before building one.
        return vec![HighlightSegment::Plain(text.to_string())];
    }
    candidates.sort_by(|a, b| b.word.trim().len().cmp(&a.word.trim().len()));

    let alternation = candidates
        .iter()
        .map(|entry| regex::escape(entry.word.trim()))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"(?i)\b({})\b", alternation);
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return vec![HighlightSegment::Plain(text.to_string())],
    };

    let mut segments: Vec<HighlightSegment> = Vec::new();
    let mut cursor = 0usize; // byte offset into text

    for found in re.find_iter(text) {
        if found.start() > cursor {
            segments.push(HighlightSegment::Plain(text[cursor..found.start()].to_string()));
        }
        let matched_text = found.as_str();
        match entry_for_match(&candidates, matched_text) {
            Some(entry) => segments.push(HighlightSegment::Matched {
                text: matched_text.to_string(),
                entry: entry.clone(),
            }),
            // No entry resolvable for the match; keep the characters anyway.
            None => segments.push(HighlightSegment::Plain(matched_text.to_string())),
        }
        cursor = found.end();
    }
    if cursor < text.len() {
        segments.push(HighlightSegment::Plain(text[cursor..].to_string()));
    }
    segments
}

/// Exact case-insensitive word lookup first, then containment as a fallback
/// for minor morphological variants.
fn entry_for_match<'a>(
    candidates: &[&'a VocabularyEntry],
    matched_text: &str,
) -> Option<&'a VocabularyEntry> {
    let matched_lower = matched_text.to_lowercase();
    candidates
        .iter()
        .find(|entry| entry.word.trim().to_lowercase() == matched_lower)
        .or_else(|| {
            candidates
                .iter()
                .find(|entry| matched_lower.contains(&entry.word.trim().to_lowercase()))
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(word: &str, definition: &str) -> VocabularyEntry {
        VocabularyEntry {
            word: word.to_string(),
            lemma: String::new(),
            definition: definition.to_string(),
            context_match: true,
        }
    }

    fn joined(segments: &[HighlightSegment]) -> String {
        segments.iter().map(|segment| segment.text()).collect()
    }

    #[test]
    fn every_character_survives_highlighting() {
        let text = "Digital signatures provide part of the solution, but the main\nbenefits are lost.";
        let vocabulary = vec![entry("digital signatures", "전자 서명"), entry("solution", "해결책")];
        let segments = highlight_vocabulary(text, &vocabulary);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn longest_entry_wins_over_its_prefix() {
        let vocabulary = vec![entry("pay", "지불하다"), entry("payment", "지불")];
        let segments = highlight_vocabulary("online payment", &vocabulary);
        assert_eq!(
            segments,
            vec![
                HighlightSegment::Plain("online ".to_string()),
                HighlightSegment::Matched {
                    text: "payment".to_string(),
                    entry: entry("payment", "지불"),
                },
            ]
        );
    }

    #[test]
    fn phrase_entries_beat_their_component_words() {
        let vocabulary = vec![entry("block", "블록"), entry("block header", "블록 헤더")];
        let segments = highlight_vocabulary("hash of the block header", &vocabulary);
        assert_eq!(
            segments,
            vec![
                HighlightSegment::Plain("hash of the ".to_string()),
                HighlightSegment::Matched {
                    text: "block header".to_string(),
                    entry: entry("block header", "블록 헤더"),
                },
            ]
        );
    }

    #[test]
    fn matching_is_case_insensitive_and_keeps_original_casing() {
        let vocabulary = vec![entry("coin", "코인")];
        let segments = highlight_vocabulary("A Coin is defined here.", &vocabulary);
        assert_eq!(
            segments[1],
            HighlightSegment::Matched { text: "Coin".to_string(), entry: entry("coin", "코인") }
        );
    }

    #[test]
    fn word_boundaries_block_partial_word_matches() {
        let vocabulary = vec![entry("block", "블록")];
        let segments = highlight_vocabulary("unblockable blocks", &vocabulary);
        assert_eq!(segments, vec![HighlightSegment::Plain("unblockable blocks".to_string())]);
    }

    #[test]
    fn repeated_matches_never_overlap() {
        let vocabulary = vec![entry("node", "노드")];
        let segments = highlight_vocabulary("node to node", &vocabulary);
        assert_eq!(joined(&segments), "node to node");
        let matched = segments
            .iter()
            .filter(|s| matches!(s, HighlightSegment::Matched { .. }))
            .count();
        assert_eq!(matched, 2);
    }

    #[test]
    fn metacharacters_in_entries_stay_literal() {
        let vocabulary = vec![entry("node.js", "런타임")];
        let segments = highlight_vocabulary("runs node.js and nodexjs", &vocabulary);
        assert_eq!(
            segments[1],
            HighlightSegment::Matched { text: "node.js".to_string(), entry: entry("node.js", "런타임") }
        );
        assert_eq!(joined(&segments), "runs node.js and nodexjs");
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn empty_vocabulary_returns_one_plain_segment() {
        let segments = highlight_vocabulary("some text", &[]);
        assert_eq!(segments, vec![HighlightSegment::Plain("some text".to_string())]);
        let blank_words = vec![entry("", "x"), entry("   ", "y")];
        let segments = highlight_vocabulary("some text", &blank_words);
        assert_eq!(segments, vec![HighlightSegment::Plain("some text".to_string())]);
    }
}
//*** END FILE: src/alignment/highlighter.rs ***//
