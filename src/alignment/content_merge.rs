//*** START FILE: src/alignment/content_merge.rs ***//
use crate::types::lesson_data::{Chunk, ChunkPatch, VocabPatch, VocabularyEntry};

/// Lowercased with whitespace runs collapsed to single spaces. Both sides
/// of a chunk text comparison go through this, so edits that only reflow
/// whitespace still line up with their original chunk.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// One-directional patch of translations onto an existing chunk list. For
/// each existing chunk the incoming list is searched first by normalized
/// `en` equality, then by `order`; a hit with a non-empty `kr` replaces the
/// translation. Incoming `en` text never overwrites existing `en`.
pub fn merge_chunks(existing: &[Chunk], incoming: &[ChunkPatch]) -> Vec<Chunk> {
    existing
        .iter()
        .map(|chunk| {
            let mut updated = chunk.clone();
            if let Some(patch) = find_chunk_patch(chunk, incoming) {
                if let Some(kr) = &patch.kr {
                    if !kr.trim().is_empty() {
                        updated.kr = kr.clone();
                    }
                }
            }
            updated
        })
        .collect()
}

fn find_chunk_patch<'a>(chunk: &Chunk, incoming: &'a [ChunkPatch]) -> Option<&'a ChunkPatch> {
    let normalized_en = normalize_text(&chunk.en);
    incoming
        .iter()
        .find(|patch| {
            patch
                .en
                .as_deref()
                .map(|en| normalize_text(en) == normalized_en)
                .unwrap_or(false)
        })
        .or_else(|| incoming.iter().find(|patch| patch.order == Some(chunk.order)))
}

/// Vocabulary merge keyed on the lowercase-trimmed word. Collisions update
/// the existing entry in place (non-empty incoming fields win); everything
/// else is appended as a new entry with `context_match` defaulting to true.
/// Patches without a word cannot be matched to anything and are skipped.
pub fn merge_vocabulary(
    existing: &[VocabularyEntry],
    incoming: &[VocabPatch],
) -> Vec<VocabularyEntry> {
    let mut merged: Vec<VocabularyEntry> = existing.to_vec();

    for patch in incoming {
        let incoming_word = patch.word.trim();
        if incoming_word.is_empty() {
            continue;
        }
        let key = incoming_word.to_lowercase();

        if let Some(entry) = merged.iter_mut().find(|e| e.word.trim().to_lowercase() == key) {
            if let Some(definition) = &patch.definition {
                if !definition.trim().is_empty() {
                    entry.definition = definition.clone();
                }
            }
            if let Some(lemma) = &patch.lemma {
                if !lemma.trim().is_empty() {
                    entry.lemma = lemma.clone();
                }
            }
            if let Some(context_match) = patch.context_match {
                entry.context_match = context_match;
            }
        } else {
            merged.push(VocabularyEntry {
                word: incoming_word.to_string(),
                lemma: patch.lemma.clone().unwrap_or_default(),
                definition: patch.definition.clone().unwrap_or_default(),
                context_match: patch.context_match.unwrap_or(true),
            });
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chunk(order: u32, en: &str, kr: &str) -> Chunk {
        Chunk { order, en: en.to_string(), kr: kr.to_string() }
    }

    fn vocab(word: &str, lemma: &str, definition: &str) -> VocabularyEntry {
        VocabularyEntry {
            word: word.to_string(),
            lemma: lemma.to_string(),
            definition: definition.to_string(),
            context_match: true,
        }
    }

    #[test]
    fn normalization_collapses_case_and_whitespace() {
        assert_eq!(normalize_text("  A  purely\npeer-to-peer  "), "a purely peer-to-peer");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn chunk_patch_matches_by_normalized_text_before_order() {
        let existing = vec![chunk(1, "Commerce  on the\nInternet", ""), chunk(2, "Second part", "old")];
        let incoming = vec![
            ChunkPatch {
                order: Some(2),
                en: Some("commerce on the internet".to_string()),
                kr: Some("인터넷 상거래".to_string()),
            },
        ];
        let merged = merge_chunks(&existing, &incoming);

        // Text match wins even though the order field points elsewhere.
        assert_eq!(merged[0].kr, "인터넷 상거래");
        assert_eq!(merged[1].kr, "인터넷 상거래");
        assert_eq!(merged[0].en, "Commerce  on the\nInternet");
    }

    #[test]
    fn chunk_patch_falls_back_to_order() {
        let existing = vec![chunk(1, "first", ""), chunk(2, "second", "")];
        let incoming = vec![ChunkPatch { order: Some(2), en: None, kr: Some("둘째".to_string()) }];
        let merged = merge_chunks(&existing, &incoming);
        assert_eq!(merged[0].kr, "");
        assert_eq!(merged[1].kr, "둘째");
    }

    #[test]
    fn empty_incoming_kr_leaves_existing_translation_alone() {
        let existing = vec![chunk(1, "first", "기존 번역")];
        let incoming = vec![ChunkPatch { order: Some(1), en: None, kr: Some("  ".to_string()) }];
        let merged = merge_chunks(&existing, &incoming);
        assert_eq!(merged[0].kr, "기존 번역");
    }

    #[test]
    fn vocabulary_merge_dedups_case_insensitively_and_incoming_wins() {
        let existing = vec![vocab("Coin", "coin", "a")];
        let incoming = vec![VocabPatch {
            word: "coin".to_string(),
            lemma: None,
            definition: Some("b".to_string()),
            context_match: None,
        }];
        let merged = merge_vocabulary(&existing, &incoming);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].word, "Coin");
        assert_eq!(merged[0].definition, "b");
        assert_eq!(merged[0].lemma, "coin");
    }

    #[test]
    fn unmatched_incoming_entries_append_with_context_match_default() {
        let existing = vec![vocab("ledger", "ledger", "원장")];
        let incoming = vec![VocabPatch {
            word: "timestamp".to_string(),
            lemma: Some("timestamp".to_string()),
            definition: Some("타임스탬프".to_string()),
            context_match: None,
        }];
        let merged = merge_vocabulary(&existing, &incoming);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].word, "timestamp");
        assert!(merged[1].context_match);
    }

    #[test]
    fn wordless_patches_are_skipped() {
        let existing = vec![vocab("node", "node", "노드")];
        let incoming = vec![VocabPatch {
            word: "   ".to_string(),
            lemma: None,
            definition: Some("ghost".to_string()),
            context_match: None,
        }];
        assert_eq!(merge_vocabulary(&existing, &incoming), existing);
    }
}
//*** END FILE: src/alignment/content_merge.rs ***//
