//*** START FILE: src/alignment/matcher.rs ***//
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareStatus {
    Empty,
    Match,
    Mismatch,
}

/// What stopped the comparison: a concrete source character that disagrees
/// with the verified text, or the source running out first.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchChar {
    Char(char),
    EndOfSource,
}

/// Recomputed on every change to the source text or the verified segment
/// list; never persisted. `match_index` counts source chars consumed.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CompareReport {
    pub status: CompareStatus,
    pub match_index: usize,
    pub mismatch_char: Option<MismatchChar>,
}

/// Two-cursor walk over source and verified text. Whitespace is free on
/// both sides: regenerated or re-pasted segments constantly reflow paragraph
/// breaks and indentation without touching the actual content, and the point
/// of this check is catching content drift (typos, omissions, reorderings),
/// not formatting drift.
///
/// A `Match` means the verified text is a whitespace-tolerant, in-order
/// subset of the source. Trailing source text after the verified portion is
/// fine; source running out before the verified content does is not.
pub fn compare_source_to_verified(source: &str, verified: &str) -> CompareReport {
    if source.is_empty() {
        return CompareReport {
            status: CompareStatus::Empty,
            match_index: 0,
            mismatch_char: None,
        };
    }

    let source_chars: Vec<char> = source.chars().collect();
    let verified_chars: Vec<char> = verified.chars().collect();
    let mut i = 0; // cursor into source
    let mut j = 0; // cursor into verified

    while i < source_chars.len() && j < verified_chars.len() {
        if source_chars[i] == verified_chars[j] {
            i += 1;
            j += 1;
        } else if source_chars[i].is_whitespace() {
            i += 1;
        } else if verified_chars[j].is_whitespace() {
            j += 1;
        } else {
            return CompareReport {
                status: CompareStatus::Mismatch,
                match_index: i,
                mismatch_char: Some(MismatchChar::Char(source_chars[i])),
            };
        }
    }

    // Whitespace left over in the verified text is as free as any other
    // whitespace; only leftover content counts against the source.
    while j < verified_chars.len() && verified_chars[j].is_whitespace() {
        j += 1;
    }

    if j >= verified_chars.len() {
        CompareReport {
            status: CompareStatus::Match,
            match_index: i,
            mismatch_char: None,
        }
    } else {
        CompareReport {
            status: CompareStatus::Mismatch,
            match_index: i,
            mismatch_char: Some(MismatchChar::EndOfSource),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_source_reports_empty() {
        let report = compare_source_to_verified("", "anything");
        assert_eq!(report.status, CompareStatus::Empty);
        assert_eq!(report.match_index, 0);
        assert_eq!(report.mismatch_char, None);
    }

    #[test]
    fn identical_text_matches() {
        let report = compare_source_to_verified("abc def", "abc def");
        assert_eq!(report.status, CompareStatus::Match);
        assert_eq!(report.match_index, 7);
    }

    #[test]
    fn whitespace_differences_are_ignored() {
        // Paragraph break in the source, plain space in the verified text.
        let report = compare_source_to_verified("Hello\n\nWorld", "Hello World");
        assert_eq!(report.status, CompareStatus::Match);
        assert_eq!(report.match_index, 12);
        assert_eq!(report.mismatch_char, None);
    }

    #[test]
    fn verified_may_stop_before_the_source_ends() {
        let report = compare_source_to_verified("Hello World and more", "Hello World");
        assert_eq!(report.status, CompareStatus::Match);
        assert_eq!(report.match_index, 11);
    }

    #[test]
    fn content_drift_is_a_mismatch() {
        // "per" vs "peer": diverges at the second 'e' of the source.
        let report =
            compare_source_to_verified("The purely peer-to-peer", "The purely per-to-peer");
        assert_eq!(report.status, CompareStatus::Mismatch);
        assert_eq!(report.match_index, 13);
        assert_eq!(report.mismatch_char, Some(MismatchChar::Char('e')));
    }

    #[test]
    fn verified_text_past_the_source_is_an_end_of_source_mismatch() {
        let report = compare_source_to_verified("The ledger", "The ledger entries");
        assert_eq!(report.status, CompareStatus::Mismatch);
        assert_eq!(report.match_index, 10);
        assert_eq!(report.mismatch_char, Some(MismatchChar::EndOfSource));
    }

    #[test]
    fn trailing_verified_whitespace_still_matches() {
        let report = compare_source_to_verified("The ledger", "The ledger \n");
        assert_eq!(report.status, CompareStatus::Match);
        assert_eq!(report.match_index, 10);
    }

    #[test]
    fn empty_verified_matches_at_zero() {
        let report = compare_source_to_verified("anything", "");
        assert_eq!(report.status, CompareStatus::Match);
        assert_eq!(report.match_index, 0);
    }
}
//*** END FILE: src/alignment/matcher.rs ***//
