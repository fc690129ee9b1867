// Copyright 2014-2016 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! `fastmap2sam` and `walks2paths`: the two line-oriented stream
//! converters spec §6/§9 places outside the indexing core ("specified
//! only by the formats they consume and emit"). Grounded on
//! `original_source/scripts/fastmap2sam.py` and
//! `original_source/scripts/walks2paths.py` — translated into the
//! idiom of this crate, not transliterated line-for-line.

use std::io::{self, BufRead, Write};

use crate::msa::fasta;

/// Convert an external mapper's `fastmap`-style output into SAM,
/// given the FASTA the reads were mapped against (for the `@SQ`
/// header). Grounded on `fastmap2sam.py`.
pub fn fastmap2sam<R: BufRead, W: Write>(
    fasta_records: &[fasta::Record],
    mapping: R,
    mut out: W,
) -> io::Result<()> {
    for record in fasta_records {
        writeln!(out, "@SQ\tSN:{}\tLN:{}", record.id, record.seq.len())?;
    }

    let mut qname = String::new();
    for line in mapping.lines() {
        let line = line?;
        if line.starts_with("SQ") {
            qname = line
                .split_whitespace()
                .nth(1)
                .unwrap_or_default()
                .to_string();
        } else if line.starts_with("EM") {
            let mut fields = line.split_whitespace();
            fields.next(); // "EM"
            let qstart: i64 = fields.next().unwrap_or("0").parse().unwrap_or(0);
            let qend: i64 = fields.next().unwrap_or("0").parse().unwrap_or(0);
            fields.next(); // number of matches; not used downstream
            let tlen = qend - qstart;

            for rrecord in fields {
                let Some((rname, strand_pos)) = rrecord.split_once(':') else {
                    continue;
                };
                let flag = if strand_pos.starts_with('+') { 0 } else { 16 };
                let pos = &strand_pos[1..];
                writeln!(
                    out,
                    "{qname}\t{flag}\t{rname}\t{pos}\t60\t{tlen}M\t*\t0\t{tlen}\t*\t*\t"
                )?;
            }
        }
    }
    Ok(())
}

fn to_pathnode(walknode: &str) -> Option<String> {
    let (sign, number) = walknode.split_at(1);
    match sign {
        ">" => Some(format!("{number}+")),
        "<" => Some(format!("{number}-")),
        _ => None,
    }
}

/// Rewrite GFA walk (`W`) lines as path (`P`) lines, passing every
/// other line type through unchanged. Grounded on `walks2paths.py`.
pub fn walks2paths<R: BufRead, W: Write>(gfa: R, mut out: W) -> io::Result<()> {
    for line in gfa.lines() {
        let line = line?;
        let Some(record_type) = line.as_bytes().first() else {
            continue;
        };
        match record_type {
            b'H' | b'S' | b'L' => writeln!(out, "{line}")?,
            b'W' => {
                let fields: Vec<&str> = line.split_whitespace().collect();
                if fields.len() < 7 {
                    continue;
                }
                let sample = fields[1];
                let walk = fields[6];
                let nodes = walknodes(walk);
                let path = nodes.join(",");
                writeln!(out, "P\t{sample}\t{path}\t*")?;
            }
            _ => {}
        }
    }
    Ok(())
}

/// Split a GFA walk string (`>1<2>3...`) into its `><`-delimited
/// node tokens and convert each to path notation (`1+`, `2-`, `3+`).
fn walknodes(walk: &str) -> Vec<String> {
    let mut nodes = Vec::new();
    let mut start = None;
    for (i, c) in walk.char_indices() {
        if c == '>' || c == '<' {
            if let Some(s) = start {
                if let Some(node) = to_pathnode(&walk[s..i]) {
                    nodes.push(node);
                }
            }
            start = Some(i);
        }
    }
    if let Some(s) = start {
        if let Some(node) = to_pathnode(&walk[s..]) {
            nodes.push(node);
        }
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fastmap2sam_header_and_record() {
        let records = vec![fasta::Record {
            id: "chr1".to_string(),
            seq: b"ACGTACGT".to_vec(),
        }];
        let mapping = b"SQ\tread1\t8\nEM\t0\t8\t1\tchr1:+100\n".to_vec();
        let mut out = Vec::new();
        fastmap2sam(&records, &mapping[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("@SQ\tSN:chr1\tLN:8"));
        assert!(text.contains("read1\t0\tchr1\t100\t60\t8M\t*\t0\t8\t*\t*\t"));
    }

    #[test]
    fn test_fastmap2sam_reverse_strand_flag() {
        let records = vec![];
        let mapping = b"SQ\tread1\t8\nEM\t0\t8\t1\tchr1:-42\n".to_vec();
        let mut out = Vec::new();
        fastmap2sam(&records, &mapping[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("read1\t16\tchr1\t42\t60"));
    }

    #[test]
    fn test_walks2paths_passes_header_segments_links_through() {
        let gfa = b"H\tVN:Z:1.0\nS\t1\tACGT\nL\t1\t+\t2\t+\t0M\n".to_vec();
        let mut out = Vec::new();
        walks2paths(&gfa[..], &mut out).unwrap();
        assert_eq!(out, gfa);
    }

    #[test]
    fn test_walks2paths_converts_walk_line() {
        let gfa = b"W\tsample1\t0\tchr1\t0\t100\t>1>2<3\n".to_vec();
        let mut out = Vec::new();
        walks2paths(&gfa[..], &mut out).unwrap();
        assert_eq!(out, b"P\tsample1\t1+,2+,3-\t*\n");
    }
}
