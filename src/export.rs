//*** START FILE: src/export.rs ***//
use crate::types::lesson_data::{Chunk, ExportChunk};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Builds the seed payload for the next lesson-generation pass: one
/// `{ "original_text": ... }` object per chunk, in chunk order.
pub fn build_splitter_export(chunks: &[Chunk]) -> Vec<ExportChunk> {
    chunks
        .iter()
        .map(|chunk| ExportChunk { original_text: chunk.en.clone() })
        .collect()
}

pub fn export_to_json(chunks: &[Chunk]) -> Result<String, String> {
    serde_json::to_string_pretty(&build_splitter_export(chunks))
        .map_err(|e| format!("Failed to serialize splitter export: {}", e))
}

pub fn write_splitter_export(chunks: &[Chunk], file_path: &Path) -> Result<(), Box<dyn Error>> {
    let json = export_to_json(chunks)?;
    fs::write(file_path, json).map_err(|e|
        format!("Failed to write splitter export to {:?}: {}", file_path, e)
    )?;
    Ok(())
}

//*** END FILE: src/export.rs ***//
