//*** START FILE: src/types/lesson_data.rs ***//
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One phrase-level segment of a lesson's source text with its aligned
/// translation. `order` is 1-based and kept dense by the chunk editor.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Chunk {
    pub order: u32,
    pub en: String,
    #[serde(default)]
    pub kr: String,
}

/// A glossed word or phrase. Identity within a lesson is the
/// lowercase-trimmed `word`; the merge logic updates in place rather than
/// duplicating when an incoming word collides case-insensitively.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VocabularyEntry {
    pub word: String,
    #[serde(default)]
    pub lemma: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub context_match: bool,
}

/// The persisted unit the CLI edits. Quizzes are opaque here and round-trip
/// through load/merge/save untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LessonRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub original_text: String,
    #[serde(default)]
    pub translation_kr: String,
    #[serde(default)]
    pub context_desc: String,
    #[serde(default)]
    pub chunks: Vec<Chunk>,
    #[serde(default)]
    pub vocabulary: Vec<VocabularyEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quizzes: Option<Vec<Value>>,
}

/// Partial chunk override from an import payload. `en` and `order` are only
/// used to locate the existing chunk; they never replace its text.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ChunkPatch {
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub kr: Option<String>,
}

/// Partial vocabulary override from an import payload. Patches without a
/// word cannot be matched to anything and are skipped by the merge.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VocabPatch {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub lemma: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub context_match: Option<bool>,
}

/// One item of the import payload (LLM output or manual paste), after shape
/// validation. Every field is optional so partial re-imports stay cheap.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LessonImport {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default)]
    pub translation_kr: Option<String>,
    #[serde(default)]
    pub context_desc: Option<String>,
    #[serde(default)]
    pub chunks: Vec<ChunkPatch>,
    #[serde(default)]
    pub vocabulary: Vec<VocabPatch>,
    #[serde(default)]
    pub quizzes: Option<Vec<Value>>,
}

/// One element of the splitter seed payload handed to the next
/// lesson-generation pass.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ExportChunk {
    pub original_text: String,
}

/// A piece of externally supplied text being checked against the canonical
/// source in an inspection session. `source_json` carries whatever payload
/// the segment came from so it can be shown next to a mismatch.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VerifiedSegment {
    pub id: String,
    pub text: String,
    pub source_json: Value,
}
//*** END FILE: src/types/lesson_data.rs ***//
