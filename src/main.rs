//! Command-line entry point: writes one LilyPond score per note.
//!
//! ```text
//! sheet-music-maker Bb7 E##4 --clef bass --target-dir scores
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use sheet_music_maker::models::UnknownClef;
use sheet_music_maker::{
    ConfigError, Note, NoteError, ScoreConfig, ScoreError, ScoreFile, ScoreFileWriter,
    StandardClef,
};

#[derive(Debug, Parser)]
#[command(version, about = "Write single-note LilyPond scores")]
struct Args {
    /// Notes in display form (e.g. C3, Bb7, E##4)
    #[arg(required = true)]
    notes: Vec<String>,

    /// Clef token: treble, bass or treble_8
    #[arg(short, long, default_value = "treble")]
    clef: String,

    /// Output directory (overrides the config file)
    #[arg(short, long)]
    target_dir: Option<PathBuf>,

    /// YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the scores to stdout instead of writing files
    #[arg(long)]
    print: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Note(#[from] NoteError),

    #[error(transparent)]
    Clef(#[from] UnknownClef),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = ScoreConfig::load_or_default(args.config.as_deref())?;
    let clef: StandardClef = args.clef.parse()?;
    let notes = args
        .notes
        .iter()
        .map(|s| s.parse::<Note>())
        .collect::<Result<Vec<_>, _>>()?;

    if args.print {
        for note in &notes {
            let score = ScoreFile::render(note, &clef, &config)?;
            println!("% {}", score.file_name());
            print!("{}", score.body());
        }
        return Ok(());
    }

    let writer = ScoreFileWriter::new(config);
    let target_dir = args
        .target_dir
        .unwrap_or_else(|| writer.config().target_dir.clone());
    let paths = writer.write_all(&notes, &clef, &target_dir)?;
    log::info!(
        "{} score(s) for {} clef written to {}",
        paths.len(),
        clef,
        target_dir.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
