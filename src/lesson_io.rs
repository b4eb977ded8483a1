//*** START FILE: src/lesson_io.rs ***//
use crate::types::lesson_data::LessonRecord;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Error as IoError, ErrorKind as IoErrorKind};
use std::path::Path;

// On-disk wrapper so the file format can grow a version field later
// without breaking existing lesson files.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LessonFile {
    pub lesson: LessonRecord,
}

/// Saves a lesson record to a pretty-printed JSON file.
pub fn save_lesson_file(lesson: &LessonRecord, file_path: &Path) -> Result<(), Box<dyn Error>> {
    let wrapper = LessonFile { lesson: lesson.clone() };

    let file = File::create(file_path).map_err(|e|
        format!("Failed to create lesson file at {:?}: {}", file_path, e)
    )?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, &wrapper).map_err(|e|
        format!("Failed to serialize lesson to {:?}: {}", file_path, e)
    )?;

    Ok(())
}

/// Loads a lesson record from a JSON file. Bare `LessonRecord` documents
/// (hand-written or produced by older tooling) are accepted as well as the
/// wrapped form `save_lesson_file` writes.
pub fn load_lesson_file(file_path: &Path) -> Result<LessonRecord, Box<dyn Error>> {
    if !file_path.exists() {
        return Err(Box::new(IoError::new(
            IoErrorKind::NotFound,
            format!("Lesson file not found at {:?}", file_path),
        )));
    }

    let file = File::open(file_path).map_err(|e|
        format!("Failed to open lesson file at {:?}: {}", file_path, e)
    )?;
    let reader = BufReader::new(file);

    let value: serde_json::Value = serde_json::from_reader(reader).map_err(|e|
        format!("Failed to parse lesson file {:?}: {}", file_path, e)
    )?;

    let lesson = if value.get("lesson").is_some() {
        let wrapper: LessonFile = serde_json::from_value(value).map_err(|e|
            format!("Failed to deserialize lesson from {:?}: {}", file_path, e)
        )?;
        wrapper.lesson
    } else {
        serde_json::from_value(value).map_err(|e|
            format!("Failed to deserialize lesson from {:?}: {}", file_path, e)
        )?
    };

    Ok(lesson)
}
//*** END FILE: src/lesson_io.rs ***//
