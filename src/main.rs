//! # scinorm
//!
//! Normalizes a corpus of parsed scientific papers (CORD-19 layout) into a single output table,
//! and skips papers already present in it on later runs.
//!
//! ```sh
//! scinorm 0.1.0
//! scientific paper corpus normalization tool.
//!
//! USAGE:
//!     scinorm <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     help         Prints this message or the help of the given subcommand(s)
//!     ingest       Normalize a paper corpus into an output table
//!     normalize    Normalize text lines from a file or stdin
//! ```
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::time::Instant;

use structopt::StructOpt;

use scinorm::error::Error;
use scinorm::normalizer::Normalizer;
use scinorm::pipelines::{CordIngest, Pipeline};
use scinorm::sources::cord::FsSource;

#[macro_use]
extern crate log;

mod cli;

fn ingest(args: cli::Ingest) -> Result<(), Error> {
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let normalizer = Normalizer::new(args.normalizer.config()?);
    let source = FsSource::new(
        args.document_parses.join(&args.pmc_dir),
        args.document_parses.join(&args.pdf_dir),
    );

    let mut p = CordIngest::new(args.metadata, source, args.dst, normalizer)
        .with_chunk_size(args.chunk_size)
        .with_metadata_fallback(args.metadata_fallback);
    if let Some(format) = args.format {
        p = p.with_format(format);
    }

    let start = Instant::now();
    let stats = p.run()?;
    info!("{:#?}", stats);

    println!(
        "{} new records written to {:?} in {:.2}s",
        stats.written,
        p.dst(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn normalize(args: cli::Normalize) -> Result<(), Error> {
    let normalizer = Normalizer::new(args.normalizer.config()?);

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in input.lines() {
        writeln!(out, "{}", normalizer.normalize_str(&line?))?;
    }
    out.flush()?;

    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Scinorm::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Scinorm::Ingest(args) => ingest(args)?,
        cli::Scinorm::Normalize(args) => normalize(args)?,
    };
    Ok(())
}
