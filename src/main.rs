// src/main.rs
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use mi_sections::extractors::{SectionExtractor, SectionTable};
use mi_sections::utils::{self, diagnostics, AppError};

/// Command Line Interface for extracting sections from structured (.mi) files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Structured file to read ("-" reads standard input)
    file: PathBuf,

    /// Only output these sections, in the given order (repeatable)
    #[arg(short, long = "section", value_name = "NAME")]
    sections: Vec<String>,

    /// Output sections as JSON
    #[arg(long)]
    json: bool,

    /// Only list section names
    #[arg(long)]
    names: bool,

    /// Debug logging when RUST_LOG is not set
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct NameListing<'a> {
    file: String,
    sections: Vec<&'a str>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging(if args.verbose { "debug" } else { "warn" });
    tracing::debug!("Starting with args: {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Extraction(e)) => {
            let cwd = std::env::current_dir().ok();
            eprintln!("{}", diagnostics::render(&e, cwd.as_deref()));
            ExitCode::from(1)
        }
        Err(e @ AppError::UnknownSection(_)) => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    // 2. Extract all sections
    let extractor = SectionExtractor::new();
    let table = if args.file == Path::new("-") {
        extractor.extract_reader(io::stdin().lock(), "<stdin>")?
    } else {
        extractor.extract_file(&args.file)?
    };

    // 3. Narrow down to the requested sections
    let table = if args.sections.is_empty() {
        table
    } else {
        table
            .select(args.sections.as_slice())
            .map_err(|name| AppError::UnknownSection(name.to_string()))?
    };

    // 4. Render
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.names {
        if args.json {
            let listing = NameListing {
                file: args.file.display().to_string(),
                sections: table.names().collect(),
            };
            serde_json::to_writer_pretty(&mut out, &listing)?;
            writeln!(out)?;
        } else {
            for name in table.names() {
                writeln!(out, "{}", name)?;
            }
        }
    } else if args.json {
        serde_json::to_writer_pretty(&mut out, &table)?;
        writeln!(out)?;
    } else {
        write_sections(&mut out, &table)?;
    }
    out.flush()?;
    Ok(())
}

/// Writes the table back out in structured-file form.
fn write_sections<W: Write>(out: &mut W, table: &SectionTable) -> io::Result<()> {
    for (name, lines) in table.iter() {
        writeln!(out, "-- {}", name)?;
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "==")?;
    }
    Ok(())
}
