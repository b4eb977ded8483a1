//*** START FILE: src/parsing/import_parser.rs ***//
use crate::alignment::chunk_editor::renumber_chunks;
use crate::alignment::content_merge::{merge_chunks, merge_vocabulary};
use crate::types::lesson_data::{Chunk, LessonImport, LessonRecord, VocabularyEntry};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    Create,
    Update,
}

/// Accepts the raw pasted payload: one lesson object or an array of them.
/// Anything that is not valid JSON aborts with a single message and no
/// state is touched.
pub fn parse_import_payload(payload: &str) -> Result<Vec<Value>, String> {
    let parsed: Value = serde_json::from_str(payload)
        .map_err(|e| format!("Import payload is not valid JSON: {}", e))?;
    match parsed {
        Value::Array(items) => Ok(items),
        Value::Object(object) => Ok(vec![Value::Object(object)]),
        other => Err(format!(
            "Import payload must be a lesson object or an array of lesson objects, got {}.",
            json_type_name(&other)
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Shape checks before anything reaches the typed structs. Problems are
/// collected across all items so the caller can show the whole list
/// instead of making the editor fix one field per attempt.
pub fn validate_imports(items: &[Value], mode: ImportMode) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let object = match item.as_object() {
            Some(object) => object,
            None => {
                errors.push(format!(
                    "Item {}: expected a lesson object, got {}.",
                    index + 1,
                    json_type_name(item)
                ));
                continue;
            }
        };

        if let Some(chunks) = object.get("chunks") {
            if !chunks.is_array() {
                errors.push(format!(
                    "Item {}: 'chunks' must be an array, got {}.",
                    index + 1,
                    json_type_name(chunks)
                ));
            }
        }
        if let Some(vocabulary) = object.get("vocabulary") {
            if !vocabulary.is_array() {
                errors.push(format!(
                    "Item {}: 'vocabulary' must be an array, got {}.",
                    index + 1,
                    json_type_name(vocabulary)
                ));
            }
        }
        if mode == ImportMode::Update {
            let has_id = object
                .get("id")
                .and_then(|value| value.as_str())
                .map(|id| !id.trim().is_empty())
                .unwrap_or(false);
            if !has_id {
                errors.push(format!(
                    "Item {}: update mode requires a non-empty string 'id'.",
                    index + 1
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Deserializes validated items into typed imports. Runs after
/// `validate_imports`, so a failure here is a field-level type problem
/// (for example a numeric `kr`), reported per item.
pub fn decode_imports(items: &[Value]) -> Result<Vec<LessonImport>, String> {
    let mut decoded: Vec<LessonImport> = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let import: LessonImport = serde_json::from_value(item.clone())
            .map_err(|e| format!("Item {}: failed to decode lesson fields: {}", index + 1, e))?;
        decoded.push(import);
    }
    Ok(decoded)
}

/// The whole-lesson patch an update-mode import performs. Chunk and
/// vocabulary arrays go through their merge rules; `original_text` is
/// canonical and never replaced; `translation_kr` and `context_desc` are
/// replaced only by non-empty incoming values; incoming quizzes replace
/// wholesale when present and existing ones pass through untouched
/// otherwise.
pub fn apply_import(existing: &LessonRecord, incoming: &LessonImport) -> LessonRecord {
    let mut updated = existing.clone();

    updated.chunks = merge_chunks(&existing.chunks, &incoming.chunks);
    updated.vocabulary = merge_vocabulary(&existing.vocabulary, &incoming.vocabulary);

    if let Some(translation_kr) = &incoming.translation_kr {
        if !translation_kr.trim().is_empty() {
            updated.translation_kr = translation_kr.clone();
        }
    }
    if let Some(context_desc) = &incoming.context_desc {
        if !context_desc.trim().is_empty() {
            updated.context_desc = context_desc.clone();
        }
    }
    if let Some(quizzes) = &incoming.quizzes {
        updated.quizzes = Some(quizzes.clone());
    }

    updated
}

/// Builds a fresh lesson from a create-mode import. Chunks keep their
/// payload order and come out densely renumbered regardless of any `order`
/// fields in the payload; blank chunk rows and wordless vocabulary rows are
/// dropped.
pub fn lesson_from_import(incoming: &LessonImport, fallback_id: &str) -> LessonRecord {
    let chunks: Vec<Chunk> = incoming
        .chunks
        .iter()
        .filter(|patch| patch.en.as_deref().map(|en| !en.trim().is_empty()).unwrap_or(false))
        .map(|patch| Chunk {
            order: 0,
            en: patch.en.clone().unwrap_or_default(),
            kr: patch.kr.clone().unwrap_or_default(),
        })
        .collect();

    let vocabulary: Vec<VocabularyEntry> = incoming
        .vocabulary
        .iter()
        .filter(|patch| !patch.word.trim().is_empty())
        .map(|patch| VocabularyEntry {
            word: patch.word.trim().to_string(),
            lemma: patch.lemma.clone().unwrap_or_default(),
            definition: patch.definition.clone().unwrap_or_default(),
            context_match: patch.context_match.unwrap_or(true),
        })
        .collect();

    LessonRecord {
        id: incoming
            .id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| fallback_id.to_string()),
        original_text: incoming.original_text.clone().unwrap_or_default(),
        translation_kr: incoming.translation_kr.clone().unwrap_or_default(),
        context_desc: incoming.context_desc.clone().unwrap_or_default(),
        chunks: renumber_chunks(chunks),
        vocabulary,
        quizzes: incoming.quizzes.clone(),
    }
}

//*** END FILE: src/parsing/import_parser.rs ***//
