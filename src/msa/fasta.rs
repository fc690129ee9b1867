// Copyright 2014-2016 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! A minimal multi-record FASTA reader.
//!
//! FASTA parsing is explicitly an external collaborator of the index
//! (spec §1, §6): this reader exists only so the `pgindex` CLI has
//! something to turn a `.fa` file into rows for [`crate::msa::Msa`]. It
//! carries no algorithmic weight and is intentionally line-oriented,
//! in the same spirit as the `fastmap2sam`/`walks2paths` stream
//! converters.

use std::io::{self, BufRead};
use std::path::Path;
use std::fs::File;
use std::io::BufReader;

/// A single FASTA record: header id (text after `>`, up to first
/// whitespace) and raw sequence bytes (newlines stripped).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub seq: Vec<u8>,
}

/// Parse FASTA records from `reader`, in file order.
pub fn read_records<R: BufRead>(reader: R) -> io::Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut id: Option<String> = None;
    let mut seq: Vec<u8> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if let Some(rest) = line.strip_prefix('>') {
            if let Some(prev_id) = id.take() {
                records.push(Record {
                    id: prev_id,
                    seq: std::mem::take(&mut seq),
                });
            }
            id = Some(rest.split_whitespace().next().unwrap_or("").to_string());
        } else {
            seq.extend(line.trim_end().bytes());
        }
    }
    if let Some(id) = id {
        records.push(Record { id, seq });
    }
    Ok(records)
}

/// Parse FASTA records from a file path.
pub fn read_records_from_path<P: AsRef<Path>>(path: P) -> io::Result<Vec<Record>> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_records() {
        let data = b">row0 comment\nACGT\n>row1\nAA\nCGT\n".to_vec();
        let records = read_records(&data[..]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "row0");
        assert_eq!(records[0].seq, b"ACGT");
        assert_eq!(records[1].id, "row1");
        assert_eq!(records[1].seq, b"AACGT");
    }

    #[test]
    fn test_empty_input() {
        let records = read_records(&b""[..]).unwrap();
        assert!(records.is_empty());
    }
}
