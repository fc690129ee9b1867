// Copyright 2014-2016 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! `ColBuilder` (spec component D): from the suffix array and the
//! coordinate maps built by `TextAssembler`, derive the BWT and the
//! parallel column/row arrays `C`, `R`.

use serde_derive::{Deserialize, Serialize};

use super::text::Text;

/// The `BWT`, `C` and `R` arrays, all indexed by suffix-array position
/// (spec §3, §4.4).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColArrays {
    pub bwt: Vec<u8>,
    /// MSA column of the first character of each sorted suffix.
    /// `C[i] == n_rows + 1` marks the suffix-array entry whose
    /// predecessor is the sentinel `#` (the reserved terminal value;
    /// spec §3, §9's "Open question — terminal sentinel"). `C[i] ==
    /// width` marks the entry whose predecessor is a row's closing
    /// `$` (the reserved separator value; spec §4.1/§4.4).
    pub c: Vec<u32>,
    /// Row of the first character of each sorted suffix, or `n_rows`
    /// for the sentinel-predecessor entry.
    pub r: Vec<u32>,
}

/// Run `ColBuilder` over `text` and its suffix array `sa` (spec §4.4).
pub fn build(text: &Text, sa: &[usize]) -> ColArrays {
    let n = text.len();
    let n_rows = text.n_rows() as u32;
    let mut bwt = Vec::with_capacity(n);
    let mut c = Vec::with_capacity(n);
    let mut r = Vec::with_capacity(n);

    for &sa_i in sa {
        let p = if sa_i == 0 { n - 1 } else { sa_i - 1 };
        bwt.push(text.t[p]);

        let seqn = text.row_of(p);
        if seqn == text.n_rows() {
            // p is the position of '#' itself: the sentinel predecessor.
            r.push(n_rows);
            c.push(n_rows + 1);
        } else {
            let in_row = text.in_row_offset(p);
            r.push(seqn as u32);
            if in_row == text.row_ungapped_len(seqn) {
                // p is the '$' closing row `seqn`: there is no ungapped
                // character at this offset to look up, so use the
                // reserved separator column (spec's `create_col.py`:
                // `pos_to_col[(i, len_i)] = W`) rather than reading
                // past the row's entries.
                c.push(text.width());
            } else {
                c.push(text.pos_to_col(seqn, in_row));
            }
        }
    }

    ColArrays { bwt, c, r }
}
