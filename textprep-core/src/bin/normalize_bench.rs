//! Normalization Benchmarking Tool
//!
//! Measures the cleaning pipeline on a real source file (headerless,
//! `class,title,content,answer`). Use it to get throughput numbers on
//! production-sized datasets before a long batch run.
//!
//! ## What It Benchmarks
//!
//! 1. **Tokenize**: Whitespace splitting of every text field
//! 2. **Normalize**: Lowercase, punctuation strip and stopword filtering per field
//! 3. **Clean**: Full per-row cleaning including concatenation (no file output)
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/normalize_bench /path/to/train.csv
//!
//! # Render missing cells as `nan`
//! ./target/release/normalize_bench /path/to/train.csv compat
//! ```
//!
//! ## Example Output
//!
//! ```text
//! --------------------------------
//! Mode        : Normalize
//! Elapsed     : 0.812 s
//! Throughput  : 0.431 GiB/s
//! Tokens      : 61_204_337
//! Tokens/sec  : 75_374_799
//! --------------------------------
//! ```

use std::env;
use std::path::Path;
use std::time::{Duration, Instant};

use textprep_core::analyzer::{TextNormalizer, Tokenizer};
use textprep_core::pipeline::{load_records, Pipeline, PipelineConfig};
use textprep_core::{Column, MissingPolicy, Record};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: normalize_bench <path> [compat]");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let config = match args.get(2).map(String::as_str) {
        Some("compat") => PipelineConfig::compat(),
        _ => PipelineConfig::default(),
    };

    println!("Loading file...");
    let records = load_records(path, config.delimiter, config.missing)?;
    let fields = text_fields(&records, config.missing);
    let text_bytes: usize = fields.iter().map(|f| f.len()).sum();

    println!("Rows:      {}", fmt_count(records.len() as u64));
    println!("Text size: {}\n", fmt_bytes(text_bytes as u64));

    bench_tokenize(&fields, text_bytes);
    bench_normalize(&fields, text_bytes);
    bench_clean(&records, text_bytes, config);

    Ok(())
}

fn text_fields(records: &[Record], policy: MissingPolicy) -> Vec<&str> {
    records
        .iter()
        .flat_map(|r| Column::TEXT.into_iter().map(move |c| r.get(c).as_text(policy)))
        .collect()
}

fn bench_tokenize(fields: &[&str], bytes: usize) {
    let tokenizer = Tokenizer::new();

    println!("=== Tokenize ===");

    warmup(|| {
        let sink: usize = fields.iter().map(|f| tokenizer.count(f)).sum();
        std::hint::black_box(sink);
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let local: usize = fields.iter().map(|f| tokenizer.count(f)).sum();
        tokens = local as u64;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", bytes, elapsed, tokens);
}

fn bench_normalize(fields: &[&str], bytes: usize) {
    let normalizer = TextNormalizer::default();
    let tokenizer = Tokenizer::new();
    let mut out = String::new();

    println!("=== Normalize ===");

    warmup(|| {
        for f in fields {
            normalizer.normalize_into(f, &mut out);
        }
        std::hint::black_box(&out);
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        for f in fields {
            normalizer.normalize_into(f, &mut out);
            local += tokenizer.count(&out) as u64;
        }
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Normalize", bytes, elapsed, tokens);
}

fn bench_clean(records: &[Record], bytes: usize, config: PipelineConfig) {
    let pipeline = Pipeline::new(config);

    println!("=== Clean (in memory) ===");

    warmup(|| {
        std::hint::black_box(pipeline.clean_records(records));
    });

    let elapsed = measure(|| {
        std::hint::black_box(pipeline.clean_records(records));
    });

    print_perf("Clean", bytes, elapsed, 0);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
