//*** START FILE: src/tool_runner.rs ***//
use crate::alignment::chunk_editor::{delete_chunk, merge_selected, split_at_word};
use crate::alignment::highlighter::{highlight_vocabulary, HighlightSegment};
use crate::alignment::matcher::{CompareStatus, MismatchChar};
use crate::alignment::tokenizer::word_tokens;
use crate::config::Config;
use crate::export::write_splitter_export;
use crate::inspection::InspectionSession;
use crate::lesson_io::{load_lesson_file, save_lesson_file};
use crate::parsing::import_parser::{
    apply_import, decode_imports, lesson_from_import, parse_import_payload, validate_imports,
    ImportMode,
};

use serde_json::json;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

// Args structs keep the function signatures clean; main.rs populates them
// from clap.

#[derive(Debug, Clone)]
pub struct InspectArgs {
    pub source_path: PathBuf,
    pub lesson_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SplitArgs {
    pub lesson_path: PathBuf,
    pub chunk_number: usize,
    pub word_index: usize,
}

#[derive(Debug, Clone)]
pub struct MergeArgs {
    pub lesson_path: PathBuf,
    pub chunk_numbers: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct DeleteArgs {
    pub lesson_path: PathBuf,
    pub chunk_number: usize,
}

#[derive(Debug, Clone)]
pub struct ImportArgs {
    pub lesson_path: PathBuf,
    pub input_path: PathBuf,
    pub create: bool,
}

#[derive(Debug, Clone)]
pub struct ExportArgs {
    pub lesson_path: PathBuf,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct HighlightArgs {
    pub lesson_path: PathBuf,
    pub chunk_number: Option<u32>,
}

fn resolve_path(config: Option<&Config>, path: &Path) -> PathBuf {
    match config {
        Some(conf) => conf.resolve(path),
        None => path.to_path_buf(),
    }
}

/// Chunk numbers on the command line are the 1-based `order` values the
/// inspect output shows; internally everything is 0-based array indices.
fn to_array_index(chunk_number: usize) -> Result<usize, Box<dyn Error>> {
    if chunk_number == 0 {
        return Err("Chunk numbers are 1-based.".into());
    }
    Ok(chunk_number - 1)
}

/// Compares a lesson's chunks against the canonical source text and prints
/// the verdict, with a context window around the first divergence when
/// there is one.
pub fn run_inspect(config: Option<&Config>, args: &InspectArgs) -> Result<(), Box<dyn Error>> {
    let source_path = resolve_path(config, &args.source_path);
    let lesson_path = resolve_path(config, &args.lesson_path);

    let source_text = fs::read_to_string(&source_path).map_err(|e|
        format!("Failed to read source text {:?}: {}", source_path, e)
    )?;
    let lesson = load_lesson_file(&lesson_path)?;

    println!(
        "Inspecting lesson '{}' against {:?} ({} chunks).",
        lesson.id,
        source_path,
        lesson.chunks.len()
    );

    let mut session = InspectionSession::new(&source_text);
    for chunk in &lesson.chunks {
        session.add_segment(&chunk.en, json!({ "order": chunk.order, "kr": chunk.kr }));
    }

    let report = session.report();
    match report.status {
        CompareStatus::Empty => println!("Source text is empty; nothing to inspect."),
        CompareStatus::Match => println!(
            "OK: chunks are a faithful subset of the source ({} source chars consumed).",
            report.match_index
        ),
        CompareStatus::Mismatch => {
            match report.mismatch_char {
                Some(MismatchChar::Char(c)) => println!(
                    "MISMATCH at source char {}: source continues with '{}' where the chunks diverge.",
                    report.match_index, c
                ),
                Some(MismatchChar::EndOfSource) => println!(
                    "MISMATCH: chunk text continues past the end of the source ({} source chars consumed).",
                    report.match_index
                ),
                None => {}
            }
            println!("  Source context: ...{}...", source_context(&source_text, report.match_index, 40));
        }
    }
    Ok(())
}

fn source_context(source: &str, char_index: usize, radius: usize) -> String {
    let chars: Vec<char> = source.chars().collect();
    let start = char_index.saturating_sub(radius);
    let end = (char_index + radius).min(chars.len());
    chars[start..end].iter().collect()
}

/// Splits one chunk at a word boundary and saves the lesson. Prints the
/// word list first so the editor can see which gap a word index lands on.
pub fn run_split(config: Option<&Config>, args: &SplitArgs) -> Result<(), Box<dyn Error>> {
    let lesson_path = resolve_path(config, &args.lesson_path);
    let mut lesson = load_lesson_file(&lesson_path)?;
    let chunk_index = to_array_index(args.chunk_number)?;

    if let Some(target) = lesson.chunks.get(chunk_index) {
        println!(
            "Chunk {} words: {:?}",
            args.chunk_number,
            word_tokens(&target.en)
        );
    }

    let chunk_count_before = lesson.chunks.len();
    let updated = split_at_word(&lesson.chunks, chunk_index, args.word_index);
    if updated.len() == chunk_count_before {
        println!(
            "No split performed: chunk {} / word {} is out of range.",
            args.chunk_number, args.word_index
        );
        return Ok(());
    }

    lesson.chunks = updated;
    save_lesson_file(&lesson, &lesson_path)?;
    println!(
        "Split chunk {} after word {}. Lesson now has {} chunks; re-enter the translation for chunk {}.",
        args.chunk_number,
        args.word_index,
        lesson.chunks.len(),
        args.chunk_number + 1
    );
    Ok(())
}

/// Merges adjacent chunks and saves the lesson.
pub fn run_merge(config: Option<&Config>, args: &MergeArgs) -> Result<(), Box<dyn Error>> {
    let lesson_path = resolve_path(config, &args.lesson_path);
    let mut lesson = load_lesson_file(&lesson_path)?;

    let mut indices: Vec<usize> = Vec::with_capacity(args.chunk_numbers.len());
    for &number in &args.chunk_numbers {
        indices.push(to_array_index(number)?);
    }

    let chunk_count_before = lesson.chunks.len();
    let updated = merge_selected(&lesson.chunks, &indices).map_err(|e| format!("Merge rejected: {}", e))?;
    if updated.len() == chunk_count_before {
        println!("No merge performed: need at least two distinct, in-range chunk numbers.");
        return Ok(());
    }

    lesson.chunks = updated;
    save_lesson_file(&lesson, &lesson_path)?;
    println!(
        "Merged chunks {:?}. Lesson now has {} chunks.",
        args.chunk_numbers,
        lesson.chunks.len()
    );
    Ok(())
}

/// Deletes one chunk and saves the lesson.
pub fn run_delete(config: Option<&Config>, args: &DeleteArgs) -> Result<(), Box<dyn Error>> {
    let lesson_path = resolve_path(config, &args.lesson_path);
    let mut lesson = load_lesson_file(&lesson_path)?;
    let chunk_index = to_array_index(args.chunk_number)?;

    let chunk_count_before = lesson.chunks.len();
    let updated = delete_chunk(&lesson.chunks, chunk_index);
    if updated.len() == chunk_count_before {
        println!("No delete performed: chunk {} is out of range.", args.chunk_number);
        return Ok(());
    }

    lesson.chunks = updated;
    save_lesson_file(&lesson, &lesson_path)?;
    println!(
        "Deleted chunk {}. Lesson now has {} chunks.",
        args.chunk_number,
        lesson.chunks.len()
    );
    Ok(())
}

/// Validates an import payload and either creates a lesson file from it or
/// merges it into an existing one. Validation failures list every problem,
/// not just the first.
pub fn run_import(config: Option<&Config>, args: &ImportArgs) -> Result<(), Box<dyn Error>> {
    let lesson_path = resolve_path(config, &args.lesson_path);
    let input_path = resolve_path(config, &args.input_path);

    let payload = fs::read_to_string(&input_path).map_err(|e|
        format!("Failed to read import payload {:?}: {}", input_path, e)
    )?;

    let items = parse_import_payload(&payload)?;
    let mode = if args.create { ImportMode::Create } else { ImportMode::Update };

    if let Err(errors) = validate_imports(&items, mode) {
        eprintln!("Import rejected with {} validation error(s):", errors.len());
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err("Import payload failed validation.".into());
    }

    let imports = decode_imports(&items)?;
    if imports.is_empty() {
        println!("Import payload is empty; nothing to do.");
        return Ok(());
    }
    println!("Validated {} import item(s) from {:?}.", imports.len(), input_path);

    if args.create {
        let fallback_id = lesson_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("lesson")
            .to_string();
        let lesson = lesson_from_import(&imports[0], &fallback_id);
        save_lesson_file(&lesson, &lesson_path)?;
        println!(
            "Created lesson '{}' with {} chunks and {} vocabulary entries at {:?}.",
            lesson.id,
            lesson.chunks.len(),
            lesson.vocabulary.len(),
            lesson_path
        );
        if imports.len() > 1 {
            eprintln!(
                "Note: payload had {} items; only the first was written to {:?}.",
                imports.len(),
                lesson_path
            );
        }
        return Ok(());
    }

    let lesson = load_lesson_file(&lesson_path)?;
    let matching = imports
        .iter()
        .find(|import| import.id.as_deref() == Some(lesson.id.as_str()))
        .or_else(|| if imports.len() == 1 { imports.first() } else { None });

    let incoming = match matching {
        Some(incoming) => incoming,
        None => {
            return Err(format!(
                "No import item carries id '{}' for lesson {:?}.",
                lesson.id, lesson_path
            )
            .into())
        }
    };

    let updated = apply_import(&lesson, incoming);
    save_lesson_file(&updated, &lesson_path)?;
    println!(
        "Merged import into lesson '{}': {} chunks, {} vocabulary entries.",
        updated.id,
        updated.chunks.len(),
        updated.vocabulary.len()
    );
    Ok(())
}

/// Writes the splitter seed payload for the next generation pass.
pub fn run_export(config: Option<&Config>, args: &ExportArgs) -> Result<(), Box<dyn Error>> {
    let lesson_path = resolve_path(config, &args.lesson_path);
    let output_path = resolve_path(config, &args.output_path);

    let lesson = load_lesson_file(&lesson_path)?;
    write_splitter_export(&lesson.chunks, &output_path)?;
    println!(
        "Exported {} chunk(s) from lesson '{}' to {:?}.",
        lesson.chunks.len(),
        lesson.id,
        output_path
    );
    Ok(())
}

/// Prints each chunk with its vocabulary matches bracketed, the same
/// segmentation the reader view renders from.
pub fn run_highlight(config: Option<&Config>, args: &HighlightArgs) -> Result<(), Box<dyn Error>> {
    let lesson_path = resolve_path(config, &args.lesson_path);
    let lesson = load_lesson_file(&lesson_path)?;

    let mut shown = 0usize;
    for chunk in &lesson.chunks {
        if let Some(only) = args.chunk_number {
            if chunk.order != only {
                continue;
            }
        }
        shown += 1;

        print!("Chunk {}: ", chunk.order);
        for segment in highlight_vocabulary(&chunk.en, &lesson.vocabulary) {
            match segment {
                HighlightSegment::Plain(text) => print!("{}", text),
                HighlightSegment::Matched { text, entry } => {
                    print!("[{}|{}]", text, entry.definition)
                }
            }
        }
        println!();
    }

    if shown == 0 {
        match args.chunk_number {
            Some(number) => println!("No chunk with number {} in lesson '{}'.", number, lesson.id),
            None => println!("Lesson '{}' has no chunks.", lesson.id),
        }
    }
    Ok(())
}
//*** END FILE: src/tool_runner.rs ***//
