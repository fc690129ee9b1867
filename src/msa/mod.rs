// Copyright 2014-2016 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! `MsaLoader` (spec component A): parse a multiple sequence alignment
//! and yield rows as equal-length byte strings over Σ ∪ `{-}`.

pub mod fasta;

use crate::alphabets::{Alphabet, GAP, SENTINEL, SEPARATOR};
use crate::error::IndexError;

/// A multiple sequence alignment: N rows of equal width W over Σ ∪ `{-}`.
#[derive(Clone, Debug)]
pub struct Msa {
    rows: Vec<Vec<u8>>,
    width: usize,
}

impl Msa {
    /// Build an `Msa` from raw rows, validating the invariants spec.md
    /// §7 requires at construction time:
    ///
    /// - at least one row, and at least one row of nonzero width
    ///   (`EmptyCorpus` otherwise)
    /// - every row has the same width (`InputFormat` otherwise)
    /// - no row contains a non-ASCII byte or a reserved symbol (`$`/`#`)
    ///   (`InputFormat` otherwise)
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Msa, IndexError> {
        if rows.is_empty() {
            return Err(IndexError::EmptyCorpus);
        }
        let width = rows[0].len();
        if rows.iter().all(|row| row.len() == 0) {
            return Err(IndexError::EmptyCorpus);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(IndexError::InputFormat {
                    detail: format!(
                        "row {} has width {}, expected {} (width of row 0)",
                        i,
                        row.len(),
                        width
                    ),
                });
            }
            for &b in row {
                if !b.is_ascii() {
                    return Err(IndexError::InputFormat {
                        detail: format!("row {} contains a non-ASCII byte {:#04x}", i, b),
                    });
                }
                if b == SEPARATOR || b == SENTINEL {
                    return Err(IndexError::InputFormat {
                        detail: format!(
                            "row {} contains the reserved symbol {:?}",
                            i, b as char
                        ),
                    });
                }
            }
        }
        Ok(Msa { rows, width })
    }

    /// Build an `Msa` from parsed FASTA records, in file order.
    pub fn from_fasta_records(records: Vec<fasta::Record>) -> Result<Msa, IndexError> {
        Msa::from_rows(records.into_iter().map(|r| r.seq).collect())
    }

    /// Like [`Msa::from_rows`], with an additional check that every
    /// ungapped byte in every row belongs to `alphabet`: spec §6 notes
    /// "the alphabet is not validated by the core beyond refusing `$`
    /// and `#` inside rows" — this is the opt-in stricter check for
    /// callers that do want Σ enforced (e.g. the CLI's `--alphabet`
    /// flag).
    pub fn from_rows_with_alphabet(
        rows: Vec<Vec<u8>>,
        alphabet: &Alphabet,
    ) -> Result<Msa, IndexError> {
        let msa = Msa::from_rows(rows)?;
        msa.check_alphabet(alphabet)?;
        Ok(msa)
    }

    /// Like [`Msa::from_fasta_records`], with the same alphabet check
    /// as [`Msa::from_rows_with_alphabet`].
    pub fn from_fasta_records_with_alphabet(
        records: Vec<fasta::Record>,
        alphabet: &Alphabet,
    ) -> Result<Msa, IndexError> {
        Msa::from_rows_with_alphabet(records.into_iter().map(|r| r.seq).collect(), alphabet)
    }

    fn check_alphabet(&self, alphabet: &Alphabet) -> Result<(), IndexError> {
        for (i, row) in self.rows.iter().enumerate() {
            if let Some(&b) = row.iter().find(|&&b| b != GAP && !alphabet.is_word([b])) {
                return Err(IndexError::InputFormat {
                    detail: format!(
                        "row {} contains byte {:?}, outside the configured alphabet",
                        i, b as char
                    ),
                });
            }
        }
        Ok(())
    }

    /// Number of rows (N).
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Alignment width (W).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row `i`, as aligned bytes (length W, may contain `-`).
    pub fn row(&self, i: usize) -> &[u8] {
        &self.rows[i]
    }

    /// Ungapped length of row `i` (`len_i` in the data model).
    pub fn ungapped_len(&self, i: usize) -> usize {
        self.rows[i].iter().filter(|&&b| b != GAP).count()
    }

    /// Total ungapped length L = Σ len_i.
    pub fn total_ungapped_len(&self) -> usize {
        (0..self.n_rows()).map(|i| self.ungapped_len(i)).sum()
    }
}
