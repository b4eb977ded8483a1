//*** START FILE: src/main.rs ***//
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use lessonforge_cli::config;
use lessonforge_cli::tool_runner::{
    run_delete, run_export, run_highlight, run_import, run_inspect, run_merge, run_split,
    DeleteArgs, ExportArgs, HighlightArgs, ImportArgs, InspectArgs, MergeArgs, SplitArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "lessonforge",
    about = "Lesson content alignment and segmentation tools",
    version
)]
struct Cli {
    /// Tool configuration file; its content_dir anchors relative paths
    #[arg(long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare a lesson's chunks against the canonical source text
    Inspect {
        /// Source text file
        #[arg(long)]
        source: PathBuf,
        /// Lesson JSON file
        #[arg(long)]
        lesson: PathBuf,
    },
    /// Split a chunk in two at a word boundary
    Split {
        #[arg(long)]
        lesson: PathBuf,
        /// Chunk number (1-based, as shown by inspect)
        #[arg(long)]
        chunk: usize,
        /// How many words stay in the first half
        #[arg(long)]
        word: usize,
    },
    /// Merge adjacent chunks into one
    Merge {
        #[arg(long)]
        lesson: PathBuf,
        /// Chunk numbers to merge (1-based), e.g. --chunks 2,3
        #[arg(long, value_delimiter = ',')]
        chunks: Vec<usize>,
    },
    /// Delete a chunk
    Delete {
        #[arg(long)]
        lesson: PathBuf,
        #[arg(long)]
        chunk: usize,
    },
    /// Validate an import payload and merge it into a lesson file
    Import {
        #[arg(long)]
        lesson: PathBuf,
        /// Import payload JSON (LLM output or a manual edit)
        #[arg(long)]
        input: PathBuf,
        /// Create a new lesson file instead of patching an existing one
        #[arg(long)]
        create: bool,
    },
    /// Write the splitter seed payload for the next generation pass
    Export {
        #[arg(long)]
        lesson: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Show the vocabulary highlighting the reader view will render
    Highlight {
        #[arg(long)]
        lesson: PathBuf,
        /// Restrict output to one chunk number
        #[arg(long)]
        chunk: Option<u32>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match config::load_config_from_file(&cli.config) {
        Ok(loaded) => Some(loaded),
        Err(err_msg) => {
            eprintln!("Note: {} Paths will resolve against the working directory.", err_msg);
            None
        }
    };
    let config = config.as_ref();

    let result = match cli.command {
        Command::Inspect { source, lesson } => run_inspect(
            config,
            &InspectArgs { source_path: source, lesson_path: lesson },
        ),
        Command::Split { lesson, chunk, word } => run_split(
            config,
            &SplitArgs { lesson_path: lesson, chunk_number: chunk, word_index: word },
        ),
        Command::Merge { lesson, chunks } => run_merge(
            config,
            &MergeArgs { lesson_path: lesson, chunk_numbers: chunks },
        ),
        Command::Delete { lesson, chunk } => run_delete(
            config,
            &DeleteArgs { lesson_path: lesson, chunk_number: chunk },
        ),
        Command::Import { lesson, input, create } => run_import(
            config,
            &ImportArgs { lesson_path: lesson, input_path: input, create },
        ),
        Command::Export { lesson, out } => run_export(
            config,
            &ExportArgs { lesson_path: lesson, output_path: out },
        ),
        Command::Highlight { lesson, chunk } => run_highlight(
            config,
            &HighlightArgs { lesson_path: lesson, chunk_number: chunk },
        ),
    };

    if let Err(e) = result {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}
//*** END FILE: src/main.rs ***//
