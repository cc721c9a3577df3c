//! Rank lines read from stdin against a fuzzy query, best match first.
//!
//! ```text
//! find . -type f | commander doc --scores --limit 10
//! ```

use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use commander::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "commander", version, about = "Rank stdin lines against a fuzzy query")]
struct Args {
    /// Filter text. `f:` restricts it to files, `c:` to commands
    query: String,

    /// Kind of the candidates read from stdin
    #[arg(long, value_enum, default_value_t = CandidateKind::File)]
    kind: CandidateKind,

    /// Print the score in front of each line
    #[arg(long)]
    scores: bool,

    /// Print at most this many lines
    #[arg(long)]
    limit: Option<usize>,

    /// Where word-start markers are read from
    #[arg(long, value_enum, default_value_t = CapitalSource::Original)]
    capitals: CapitalSource,

    /// Skip candidates longer than this many characters
    #[arg(long)]
    max_len: Option<usize>,

    /// Score candidates on all cores
    #[arg(long)]
    parallel: bool,
}

/// Initialize logging to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(true)
        .compact();
    if let Err(e) = builder.try_init() {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

fn main() -> io::Result<()> {
    init_logging();
    let args = Args::parse();

    let candidates = io::stdin()
        .lock()
        .lines()
        .map(|line| line.map(|text| Candidate::new(text, args.kind)))
        .collect::<io::Result<Vec<_>>>()?;

    let engine = RankEngine::builder()
        .query(&args.query)
        .capitals(args.capitals)
        .max_candidate_len(args.max_len)
        .parallel(args.parallel)
        .build();
    let ranked = engine.rank_candidates(&candidates);

    let mut out = BufWriter::new(io::stdout().lock());
    for hit in ranked.iter().take(args.limit.unwrap_or(usize::MAX)) {
        let text = &candidates[hit.index].text;
        if args.scores {
            writeln!(out, "{:.6}\t{}", hit.score, text)?;
        } else {
            writeln!(out, "{}", text)?;
        }
    }
    out.flush()
}
