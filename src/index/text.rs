// Copyright 2014-2016 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! `TextAssembler` (spec component B) and `EPLookup` (spec component C):
//! build T, the row-start table EP, and the column maps from an `Msa`,
//! and provide the position ⇄ (row, offset) conversions the rest of the
//! index is built on.

use serde_derive::{Deserialize, Serialize};

use crate::alphabets::{GAP, SENTINEL, SEPARATOR};
use crate::msa::Msa;

/// The assembled text and the coordinate maps derived alongside it.
///
/// `pos_to_col` is stored as a single flat array rather than the
/// nested `(row, offset) -> column` map the data model describes in
/// the abstract (spec §9 recommends exactly this: "a packed offset
/// table `row_start[i] + in_row_offset -> aligned_col`" in place of
/// hashed pairs). `msa_to_t` (spec's second coordinate map) is not
/// stored separately at all: since `pos_to_col` is strictly increasing
/// within a row, the inverse lookup it requires — aligned column to
/// in-row ungapped offset — is a binary search over the same flat
/// array, so no second O(L) table is needed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Text {
    /// T = U[0]·$·U[1]·$·…·U[N-1]·$·#.
    pub t: Vec<u8>,
    /// Row-start table, length N+1. `ep[N]` is the position of `#`.
    pub ep: Vec<usize>,
    pos_to_col: Vec<u32>,
    row_start: Vec<usize>,
    /// MSA width W. Doubles as the reserved "separator column" value:
    /// the column a row's closing `$` is assigned whenever something
    /// needs a column for it (spec's `create_col.py` sets
    /// `pos_to_col[(i, len_i)] = W` for exactly this; no real aligned
    /// column ever equals W, since columns range over `0..W`).
    width: u32,
}

impl Text {
    /// Run `TextAssembler` over `msa` (spec §4.1).
    pub fn assemble(msa: &Msa) -> Text {
        let n = msa.n_rows();
        let l = msa.total_ungapped_len();
        let mut t = Vec::with_capacity(l + n + 1);
        let mut ep = Vec::with_capacity(n + 1);
        let mut pos_to_col = Vec::with_capacity(l);
        let mut row_start = Vec::with_capacity(n + 1);

        ep.push(0);
        for i in 0..n {
            row_start.push(pos_to_col.len());
            for (col, &b) in msa.row(i).iter().enumerate() {
                if b != GAP {
                    t.push(b);
                    pos_to_col.push(col as u32);
                }
            }
            t.push(SEPARATOR);
            ep.push(t.len());
        }
        row_start.push(pos_to_col.len());
        t.push(SENTINEL);

        debug_assert_eq!(t.len(), l + n + 1);
        debug_assert_eq!(ep[n], l + n);

        Text {
            t,
            ep,
            pos_to_col,
            row_start,
            width: msa.width() as u32,
        }
    }

    /// |T|.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// N, the row count (also used as the sentinel row marker).
    pub fn n_rows(&self) -> usize {
        self.ep.len() - 1
    }

    /// `EPLookup::row_of` (spec §4.3): the row containing T-position
    /// `p`, or `n_rows()` if `p` is the position of `#`. Binary search
    /// over `EP`, which is strictly increasing (every row advances it
    /// by at least 1, for the closing `$`).
    pub fn row_of(&self, p: usize) -> usize {
        // largest u with ep[u] <= p, i.e. one less than the first
        // index where ep[idx] > p.
        self.ep.partition_point(|&start| start <= p) - 1
    }

    /// `EPLookup::in_row_offset` (spec §4.3): the 0-based ungapped
    /// offset of T-position `p` inside its row (or `len_u` if `p` is
    /// the `$` closing row `u`).
    pub fn in_row_offset(&self, p: usize) -> usize {
        let u = self.row_of(p);
        p - self.ep[u]
    }

    /// `pos_to_col`: the aligned column of the character at ungapped
    /// offset `in_row_offset` within `row`.
    pub fn pos_to_col(&self, row: usize, in_row_offset: usize) -> u32 {
        self.pos_to_col[self.row_start[row] + in_row_offset]
    }

    /// MSA width W. Also the reserved separator-column value (see
    /// `Text`'s doc comment).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// `msa_to_T`: the T-position of the character at aligned column
    /// `col` within `row`. `row == n_rows()` is the sentinel key and
    /// yields the position of `#`, matching the `R`-array convention
    /// (spec §3: sentinel row is stored as `N`). `col == width()` is
    /// the separator key and yields the position of the `$` closing
    /// `row`, matching `ColBuilder`'s use of `width()` as the column
    /// for a `$`-predecessor entry.
    pub fn msa_to_t(&self, row: usize, col: u32) -> usize {
        if row == self.n_rows() {
            return self.ep[self.n_rows()];
        }
        if col == self.width {
            return self.ep[row + 1] - 1;
        }
        let start = self.row_start[row];
        let end = self.row_start[row + 1];
        let slice = &self.pos_to_col[start..end];
        let offset = slice
            .binary_search(&col)
            .expect("column has no ungapped occurrence in row");
        self.ep[row] + offset
    }

    /// Ungapped length of `row` (0 for an all-gap row).
    pub fn row_ungapped_len(&self, row: usize) -> usize {
        self.row_start[row + 1] - self.row_start[row]
    }

    /// The true MSA column anchored by T-position 0 — row 0's first
    /// ungapped character — or `None` if row 0 is entirely gaps.
    ///
    /// `ColBuilder` (spec §4.4) writes the reserved sentinel value
    /// `n_rows()+1` for the single SA entry whose predecessor is `#`,
    /// i.e. the entry where `SA[i] == 0`. That entry's *own* suffix is
    /// `T[0..]`, which is a real, potentially pattern-matching suffix
    /// of row 0 — not the sentinel itself. `BoundarySearch`/
    /// `QueryDriver` use this to recover the entry's true column
    /// (spec §9's "open question — terminal sentinel") whenever that
    /// entry turns out to be part of a genuine match interval.
    pub fn sentinel_witness_column(&self) -> Option<u32> {
        if self.row_ungapped_len(0) == 0 {
            None
        } else {
            Some(self.pos_to_col(0, 0))
        }
    }
}
