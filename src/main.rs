//! codonscope - DNA to protein translator
//!
//! ## Usage
//!
//! ```bash
//! codonscope <sequence_file>                 # interactive viewer
//! codonscope -o - <sequence_file>            # report to stdout
//! codonscope -r 1 -s reverse -o out.txt seq.fa
//! ```
//!
//! ## Viewer keys
//!
//! - `f`: next frame, `s`: switch strand
//! - `Space`: play/pause, `r`: reset, `+`/`-`: speed
//! - `t`: three-letter names
//! - `:q`: Quit

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use codonscope::classify::{classify_sequence_type, extract_header_identifier, SequenceType};
use codonscope::codon::{Frame, Strand};
use codonscope::controller::run_app;
use codonscope::input::{load_path, RawInput};
use codonscope::logging::init_file_logging;
use codonscope::model::{AppState, ViewSettings, MAX_SPEED_MS, MIN_SPEED_MS};
use codonscope::report::Report;
use codonscope::ui::glyphs;

/// Width used to wrap protein lines in reports.
const REPORT_WIDTH: usize = 80;

/// Runs CLI mode: build the report and write it to output.
fn run_cli_mode(input: &RawInput, output: &str, settings: ViewSettings) -> Result<()> {
    let report = Report::build(input, settings.frame, settings.strand);
    let text = report.render(settings.three_letter, REPORT_WIDTH);

    if output == "-" {
        // Write to stdout
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
    } else {
        // Write to file
        let mut file = std::fs::File::create(output)?;
        file.write_all(text.as_bytes())?;
        eprintln!(
            "Wrote report ({} nt, {} aa) to {}",
            report.bases.length,
            report.framed.len(),
            output
        );
    }

    info!(output, "report written");
    Ok(())
}

/// Strand specification for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrandArg {
    /// Read the sequence as given (+)
    Forward,
    /// Read the reverse complement (-)
    Reverse,
}

impl From<StrandArg> for Strand {
    fn from(arg: StrandArg) -> Self {
        match arg {
            StrandArg::Forward => Strand::Forward,
            StrandArg::Reverse => Strand::Reverse,
        }
    }
}

/// codonscope - Translate DNA into protein and inspect codons
///
/// When run without -o/--output, opens an interactive TUI viewer.
/// With -o/--output, runs in CLI mode and writes a report to file (or stdout with "-").
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence file (plain text or FASTA). Use "-" for stdin.
    file: PathBuf,

    /// Output file (enables CLI mode). Use "-" for stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Reading frame offset (0, 1 or 2)
    #[arg(short = 'r', long = "frame", default_value = "0")]
    frame: u8,

    /// Strand to translate
    #[arg(short = 's', long = "strand", value_enum, default_value = "forward")]
    strand: StrandArg,

    /// Show amino acids with three-letter names
    #[arg(short = 't', long = "three-letter")]
    three_letter: bool,

    /// Playback step interval in milliseconds (150-1200)
    #[arg(long = "speed", default_value = "600")]
    speed: u64,

    /// Use Unicode glyphs in the viewer
    #[arg(long = "fancy")]
    fancy: bool,

    /// Write a log file to the temp directory (level from RUST_LOG)
    #[arg(long = "log")]
    log: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let Some(frame) = Frame::new(args.frame) else {
        anyhow::bail!("Reading frame must be 0-2 (got {})", args.frame);
    };

    if !(MIN_SPEED_MS..=MAX_SPEED_MS).contains(&args.speed) {
        anyhow::bail!(
            "Speed must be {}-{} ms (got {})",
            MIN_SPEED_MS,
            MAX_SPEED_MS,
            args.speed
        );
    }

    if args.log {
        let path = init_file_logging()?;
        eprintln!("Logging to {}", path.display());
    }

    let input = load_path(&args.file)?;
    let sequence_type = classify_sequence_type(&input.body());
    if sequence_type == SequenceType::AminoAcid {
        warn!(file = %args.file.display(), "input looks like a protein sequence");
    }

    let settings = ViewSettings {
        frame,
        strand: args.strand.into(),
        three_letter: args.three_letter,
        interval: Duration::from_millis(args.speed),
    };

    // CLI mode: output to file/stdout
    if let Some(output) = args.output {
        return run_cli_mode(&input, &output, settings);
    }

    let title = if args.file.as_os_str() == "-" {
        "stdin".to_string()
    } else {
        args.file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| args.file.display().to_string())
    };
    let state = AppState::new(
        title,
        input.sequence(),
        sequence_type,
        extract_header_identifier(&input.text),
        settings,
    );
    run_app(state, glyphs::select(args.fancy))
}
