//*** START FILE: src/alignment/chunk_editor.rs ***//
use crate::alignment::tokenizer::tokenize;
use crate::types::lesson_data::Chunk;

/// The one renumbering utility every structural mutation goes through:
/// orders become 1..N in array position order. Postcondition of split,
/// merge and delete alike.
pub fn renumber_chunks(mut chunks: Vec<Chunk>) -> Vec<Chunk> {
    for (index, chunk) in chunks.iter_mut().enumerate() {
        chunk.order = (index + 1) as u32;
    }
    chunks
}

/// Splits the chunk at `chunk_index` into two chunks. `word_index` is the
/// 1-based count of words kept in the first half; the separator run at the
/// cut point belongs to neither side and is dropped. The second half starts
/// with an empty `kr`: there is no trustworthy way to split a translation at
/// an English word boundary, so it has to be re-entered by hand.
///
/// Anything out of range (bad chunk index, cut that would leave either side
/// empty) returns an unchanged copy. Boundary clicks can race with edits, so
/// this is a quiet no-op rather than an error.
pub fn split_at_word(chunks: &[Chunk], chunk_index: usize, word_index: usize) -> Vec<Chunk> {
    let target = match chunks.get(chunk_index) {
        Some(chunk) => chunk,
        None => return chunks.to_vec(),
    };

    let tokens = tokenize(&target.en);
    let total_words = tokens.iter().filter(|token| token.is_word()).count();
    if word_index == 0 || word_index >= total_words {
        return chunks.to_vec();
    }

    // Walk the tokens counting only word runs. The word that brings the
    // count up to word_index closes the first half; the separator right
    // after it is the discarded cut point; the rest is the second half.
    let mut first_half = String::new();
    let mut second_half = String::new();
    let mut words_seen = 0usize;
    let mut boundary_passed = false;
    let mut cut_point_dropped = false;

    for token in &tokens {
        if !boundary_passed {
            first_half.push_str(token.text());
            if token.is_word() {
                words_seen += 1;
                if words_seen == word_index {
                    boundary_passed = true;
                }
            }
        } else if !cut_point_dropped && !token.is_word() {
            cut_point_dropped = true;
        } else {
            cut_point_dropped = true;
            second_half.push_str(token.text());
        }
    }

    let mut result: Vec<Chunk> = Vec::with_capacity(chunks.len() + 1);
    for (index, chunk) in chunks.iter().enumerate() {
        if index == chunk_index {
            result.push(Chunk { order: 0, en: first_half.clone(), kr: target.kr.clone() });
            result.push(Chunk { order: 0, en: second_half.clone(), kr: String::new() });
        } else {
            result.push(chunk.clone());
        }
    }
    renumber_chunks(result)
}

/// Merges the selected chunks (0-based array indices) into one. Fewer than
/// two usable indices, duplicates, or an index past the end are quiet
/// no-ops, same policy as `split_at_word`. A selection that is not a
/// contiguous run is rejected outright: joining non-neighbors silently
/// reorders the lesson text, and a caller that wants that has to go through
/// its own confirmation first.
pub fn merge_selected(chunks: &[Chunk], indices: &[usize]) -> Result<Vec<Chunk>, String> {
    let mut selected: Vec<usize> = indices.to_vec();
    selected.sort_unstable();
    selected.dedup();

    if selected.len() < 2
        || selected.len() != indices.len()
        || selected.iter().any(|&index| index >= chunks.len())
    {
        return Ok(chunks.to_vec());
    }

    let contiguous = selected.windows(2).all(|pair| pair[1] == pair[0] + 1);
    if !contiguous {
        return Err(format!(
            "Cannot merge non-adjacent chunks (selected array indices {:?}).",
            selected
        ));
    }

    let merged_en = selected
        .iter()
        .map(|&index| chunks[index].en.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    // Untranslated members would only contribute stray spaces to the joined
    // translation, so they are skipped.
    let merged_kr = selected
        .iter()
        .map(|&index| chunks[index].kr.trim())
        .filter(|kr| !kr.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let first_selected = selected[0];
    let mut result: Vec<Chunk> = Vec::with_capacity(chunks.len() + 1 - selected.len());
    for (index, chunk) in chunks.iter().enumerate() {
        if index == first_selected {
            result.push(Chunk { order: 0, en: merged_en.clone(), kr: merged_kr.clone() });
        } else if selected.contains(&index) {
            continue;
        } else {
            result.push(chunk.clone());
        }
    }
    Ok(renumber_chunks(result))
}

/// Removes one chunk and renumbers the rest. Out of range is a quiet no-op.
pub fn delete_chunk(chunks: &[Chunk], index: usize) -> Vec<Chunk> {
    if index >= chunks.len() {
        return chunks.to_vec();
    }
    let mut result = chunks.to_vec();
    result.remove(index);
    renumber_chunks(result)
}

//*** END FILE: src/alignment/chunk_editor.rs ***//
