// Copyright 2014-2016 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The `pgindex` CLI: build a pangenomic column-location index from
//! an MSA, query it, and run the two out-of-core stream adapters
//! (spec §6.5).

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pgindex::adapters;
use pgindex::alphabets::Alphabet;
use pgindex::config::{QueryConfig, Strategy};
use pgindex::index::PanColIndex;
use pgindex::msa::{fasta, Msa};
use pgindex::query::driver;

#[derive(Parser)]
#[command(name = "pgindex", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a pangenomic column-location index from an MSA FASTA.
    Build {
        /// Path to the aligned FASTA (one record per row).
        #[arg(long)]
        msa: PathBuf,
        /// Where to write the serialized index (bincode-encoded).
        #[arg(long)]
        out: PathBuf,
        /// Also write `col.txt`/`bwt.txt` plain-text dumps next to
        /// `out` (spec §6.3; inspection only, not load-bearing).
        #[arg(long)]
        dump_debug: bool,
        /// Reject rows containing a byte outside this alphabet (e.g.
        /// "ACGT"); gaps are always allowed. Omit to skip the check
        /// beyond the reserved `$`/`#` rejection `Msa` always applies.
        #[arg(long)]
        alphabet: Option<String>,
    },
    /// Query a built index for the columns a pattern anchors to.
    Query {
        /// Path to a serialized index (as written by `build`).
        #[arg(long)]
        index: PathBuf,
        /// A single pattern to query.
        #[arg(long, conflicts_with = "patterns_file")]
        pattern: Option<String>,
        /// A file of patterns, one per line.
        #[arg(long, conflicts_with = "pattern")]
        patterns_file: Option<PathBuf>,
        /// `BoundarySearch` algorithm to use.
        #[arg(long, value_enum, default_value_t = Strategy::Binary)]
        search_strategy: Strategy,
    },
    /// Convert an external mapper's `fastmap` output to SAM.
    Fastmap2sam {
        #[arg(long)]
        fasta: PathBuf,
        #[arg(long)]
        fastmap: PathBuf,
    },
    /// Rewrite GFA walk (`W`) lines as path (`P`) lines.
    Walks2paths {
        #[arg(long)]
        gfa: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            msa,
            out,
            dump_debug,
            alphabet,
        } => build(&msa, &out, dump_debug, alphabet.as_deref()),
        Command::Query {
            index,
            pattern,
            patterns_file,
            search_strategy,
        } => query(&index, pattern, patterns_file, search_strategy),
        Command::Fastmap2sam { fasta, fastmap } => fastmap2sam(&fasta, &fastmap),
        Command::Walks2paths { gfa } => walks2paths(&gfa),
    }
}

fn build(msa_path: &PathBuf, out_path: &PathBuf, dump_debug: bool, alphabet: Option<&str>) -> Result<()> {
    let records = fasta::read_records_from_path(msa_path)
        .with_context(|| format!("reading MSA FASTA at {}", msa_path.display()))?;
    let msa = match alphabet {
        Some(sigma) => {
            let alphabet = Alphabet::new(sigma.as_bytes());
            Msa::from_fasta_records_with_alphabet(records, &alphabet)
                .context("validating MSA against --alphabet")?
        }
        None => Msa::from_fasta_records(records).context("validating MSA")?,
    };

    let index = PanColIndex::build(&msa);

    let out_file = File::create(out_path)
        .with_context(|| format!("creating index file at {}", out_path.display()))?;
    bincode::serialize_into(BufWriter::new(out_file), &index).context("serializing index")?;

    if dump_debug {
        dump_debug_artifacts(out_path, &index)?;
    }

    log::info!(
        "built index: {} rows, |T| = {}, {} runs",
        index.n_rows(),
        index.len(),
        index.run_count()
    );
    Ok(())
}

fn dump_debug_artifacts(out_path: &PathBuf, index: &PanColIndex) -> Result<()> {
    let dir = out_path.parent().unwrap_or_else(|| std::path::Path::new("."));

    // col.txt / bwt.txt are plain inspection dumps (spec §6.3).
    let col_path = dir.join("col.txt");
    let mut col_file = BufWriter::new(
        File::create(&col_path).with_context(|| format!("creating {}", col_path.display()))?,
    );
    for &c in index.col_array() {
        writeln!(col_file, "{c}")?;
    }

    let bwt_path = dir.join("bwt.txt");
    let mut bwt_file = BufWriter::new(
        File::create(&bwt_path).with_context(|| format!("creating {}", bwt_path.display()))?,
    );
    for &b in index.bwt() {
        writeln!(bwt_file, "{}", b as char)?;
    }
    Ok(())
}

fn query(
    index_path: &PathBuf,
    pattern: Option<String>,
    patterns_file: Option<PathBuf>,
    search_strategy: Strategy,
) -> Result<()> {
    let index_file = File::open(index_path)
        .with_context(|| format!("opening index at {}", index_path.display()))?;
    let index: PanColIndex = bincode::deserialize_from(BufReader::new(index_file))
        .context("deserializing index")?;
    let config = QueryConfig {
        strategy: search_strategy,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let patterns: Vec<String> = match (pattern, patterns_file) {
        (Some(p), None) => vec![p],
        (None, Some(path)) => {
            let file = File::open(&path)
                .with_context(|| format!("opening patterns file at {}", path.display()))?;
            BufReader::new(file).lines().collect::<io::Result<_>>()?
        }
        _ => anyhow::bail!("exactly one of --pattern or --patterns-file must be given"),
    };

    for pattern in patterns {
        let columns = driver::query(&index, pattern.as_bytes(), &config)
            .with_context(|| format!("querying pattern {pattern:?}"))?;
        let line = columns
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn fastmap2sam(fasta_path: &PathBuf, fastmap_path: &PathBuf) -> Result<()> {
    let records = fasta::read_records_from_path(fasta_path)
        .with_context(|| format!("reading FASTA at {}", fasta_path.display()))?;
    let mapping_file = File::open(fastmap_path)
        .with_context(|| format!("opening fastmap output at {}", fastmap_path.display()))?;
    let stdout = io::stdout();
    adapters::fastmap2sam(&records, BufReader::new(mapping_file), stdout.lock())
        .context("converting fastmap output to SAM")
}

fn walks2paths(gfa_path: &PathBuf) -> Result<()> {
    let gfa_file = File::open(gfa_path)
        .with_context(|| format!("opening GFA at {}", gfa_path.display()))?;
    let stdout = io::stdout();
    adapters::walks2paths(BufReader::new(gfa_file), stdout.lock())
        .context("rewriting GFA walk lines as path lines")
}
