use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use textprep_core::{NormalizerConfig, Pipeline, PipelineConfig, RunStats};
use textprep_types::MissingPolicy;

/// Clean a labelled Q&A dataset for text classification
///
/// Reads a headerless `class,title,content,answer` file, lowercases the three
/// text fields, strips punctuation and stopwords, and writes `text,class`.
#[derive(Parser, Debug)]
#[command(name = "textprep", version, about, long_about = None)]
struct Cli {
    /// Source file (headerless, four columns)
    source: PathBuf,

    /// Destination file (overwritten)
    dest: PathBuf,

    /// How missing cells are rendered
    #[arg(long, value_enum, default_value_t = MissingArg::Empty)]
    missing: MissingArg,

    /// Keep punctuation in text fields
    #[arg(long)]
    keep_punctuation: bool,

    /// Keep stopwords in text fields
    #[arg(long)]
    keep_stopwords: bool,

    /// Additional stopwords, comma-separated
    #[arg(long, value_delimiter = ',')]
    extra_stopwords: Vec<String>,

    /// Source field delimiter (single ASCII character)
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Only log warnings and skip the run summary
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MissingArg {
    /// Missing cells become empty text
    Empty,
    /// NA markers are missing and become `nan`, matching older tooling
    Compat,
}

impl From<MissingArg> for MissingPolicy {
    fn from(arg: MissingArg) -> Self {
        match arg {
            MissingArg::Empty => MissingPolicy::Empty,
            MissingArg::Compat => MissingPolicy::Compat,
        }
    }
}

impl Cli {
    fn config(&self) -> PipelineConfig {
        PipelineConfig {
            normalizer: NormalizerConfig {
                strip_punctuation: !self.keep_punctuation,
                remove_stopwords: !self.keep_stopwords,
            },
            missing: self.missing.into(),
            delimiter: self.delimiter,
            extra_stopwords: self.extra_stopwords.clone(),
        }
    }

    fn run(&self) -> Result<RunStats> {
        let config = self.config();
        tracing::debug!(?config, "starting");
        let pipeline = Pipeline::new(config);
        pipeline.run(&self.source, &self.dest).with_context(|| {
            format!(
                "failed to clean {} into {}",
                self.source.display(),
                self.dest.display()
            )
        })
    }
}

fn parse_delimiter(s: &str) -> std::result::Result<u8, String> {
    let unescaped = match s {
        "\\t" | "tab" => "\t",
        other => other,
    };
    match unescaped.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got {s:?}")),
    }
}

fn init_tracing(quiet: bool) {
    let default = if quiet {
        "textprep=warn,textprep_core=warn"
    } else {
        "textprep=info,textprep_core=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match cli.run() {
        Ok(stats) => {
            if !cli.quiet {
                println!("cleaned {} rows → {}", stats.rows_written, cli.dest.display());
                println!("{stats}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
