//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;

use scinorm::error::Error;
use scinorm::io::OutputFormat;
use scinorm::normalizer::NormalizerConfig;

#[derive(Debug, StructOpt)]
#[structopt(name = "scinorm", about = "scientific paper corpus normalization tool.")]
/// Holds every command that is callable by the `scinorm` command.
pub enum Scinorm {
    #[structopt(about = "Normalize a paper corpus into an output table")]
    Ingest(Ingest),
    #[structopt(about = "Normalize text lines from a file or stdin")]
    Normalize(Normalize),
}

/// Normalizer configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Default,
    Legacy,
    Indexer,
}

impl Preset {
    pub fn config(self) -> NormalizerConfig {
        match self {
            Self::Default => NormalizerConfig::default(),
            Self::Legacy => NormalizerConfig::legacy(),
            Self::Indexer => NormalizerConfig::indexer(),
        }
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "legacy" => Ok(Self::Legacy),
            "indexer" => Ok(Self::Indexer),
            other => Err(Error::Custom(format!(
                "unknown preset {:?} (expected default, legacy or indexer)",
                other
            ))),
        }
    }
}

#[derive(Debug, StructOpt)]
/// Normalizer options, shared by every command.
///
/// The configuration is built from `--config` if provided, or from `--preset` otherwise.
/// Flags are then applied on top of it.
pub struct NormalizerArgs {
    #[structopt(
        long = "preset",
        default_value = "default",
        help = "normalizer preset (default, legacy or indexer)"
    )]
    pub preset: Preset,
    #[structopt(
        long = "config",
        parse(from_os_str),
        help = "JSON normalizer configuration. Overrides --preset."
    )]
    pub config: Option<PathBuf>,
    #[structopt(long = "no-protect-numbers", help = "do not shield numbers")]
    pub no_protect_numbers: bool,
    #[structopt(long = "no-protect-emails", help = "do not shield email addresses")]
    pub no_protect_emails: bool,
    #[structopt(
        long = "keep-thousands-separators",
        help = "keep commas in protected numbers"
    )]
    pub keep_thousands_separators: bool,
    #[structopt(long = "keep-underscores", help = "keep underscores instead of spacing them")]
    pub keep_underscores: bool,
    #[structopt(long = "allow-apostrophe", help = "keep apostrophes")]
    pub allow_apostrophe: bool,
    #[structopt(long = "no-isolate-handles", help = "do not space @ and # around")]
    pub no_isolate_handles: bool,
    #[structopt(long = "split-hyphens", help = "turn hyphens into spaces")]
    pub split_hyphens: bool,
    #[structopt(long = "symbols", help = "designated symbols, replacing the configured ones")]
    pub symbols: Option<String>,
    #[structopt(
        long = "extra-allowed",
        help = "additional allowed characters, added to the configured ones"
    )]
    pub extra_allowed: Option<String>,
}

impl NormalizerArgs {
    pub fn config(&self) -> Result<NormalizerConfig, Error> {
        let mut config = match &self.config {
            Some(path) => NormalizerConfig::from_path(path)?,
            None => self.preset.config(),
        };

        if self.no_protect_numbers {
            config.protect_numbers = false;
        }
        if self.no_protect_emails {
            config.protect_emails = false;
        }
        if self.keep_thousands_separators {
            config.strip_thousands_separators = false;
        }
        if self.keep_underscores {
            config.treat_underscore_as_space = false;
        }
        if self.allow_apostrophe {
            config.allow_apostrophe = true;
        }
        if self.no_isolate_handles {
            config.isolate_handles = false;
        }
        if self.split_hyphens {
            config.split_hyphens = true;
        }
        if let Some(symbols) = &self.symbols {
            config.designated_symbols = symbols.chars().collect();
        }
        if let Some(extra) = &self.extra_allowed {
            config.extra_allowed.extend(extra.chars());
        }

        Ok(config)
    }
}

#[derive(Debug, StructOpt)]
/// Ingest command and parameters.
///
/// ```sh
/// USAGE:
///     scinorm ingest [FLAGS] [OPTIONS] <metadata> <document-parses> <dst>
///
/// ARGS:
///     <metadata>           path to metadata.csv
///     <document-parses>    folder containing the pmc_json and pdf_json folders
///     <dst>                output table, appended to if it exists
/// ```
pub struct Ingest {
    #[structopt(parse(from_os_str), help = "path to metadata.csv")]
    pub metadata: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "folder containing the pmc_json and pdf_json folders"
    )]
    pub document_parses: PathBuf,
    #[structopt(parse(from_os_str), help = "output table, appended to if it exists")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "pmc-dir",
        default_value = "pmc_json",
        help = "PMC parses folder, relative to <document-parses>"
    )]
    pub pmc_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "pdf-dir",
        default_value = "pdf_json",
        help = "PDF parses folder, relative to <document-parses>"
    )]
    pub pdf_dir: PathBuf,
    #[structopt(
        long = "format",
        help = "output format (csv or jsonl). Inferred from <dst> if absent."
    )]
    pub format: Option<OutputFormat>,
    #[structopt(
        help = "number of metadata rows processed between two writes.",
        long = "chunk_size",
        default_value = "500",
        short = "s"
    )]
    pub chunk_size: usize,
    #[structopt(short = "t", long = "threads", help = "number of threads. Default is all cores.")]
    pub threads: Option<usize>,
    #[structopt(
        long = "metadata-fallback",
        help = "take empty title, abstract and journal from metadata.csv"
    )]
    pub metadata_fallback: bool,
    #[structopt(flatten)]
    pub normalizer: NormalizerArgs,
}

#[derive(Debug, StructOpt)]
/// Normalize command and parameters.
pub struct Normalize {
    #[structopt(parse(from_os_str), help = "input file. Reads stdin if absent.")]
    pub input: Option<PathBuf>,
    #[structopt(flatten)]
    pub normalizer: NormalizerArgs,
}
