// Copyright 2014-2016 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The pangenomic column-location index (`PanColIndex`): the
//! read-only structure `(T, SA, BWT, C, R, RLE, pos_to_col, msa_to_T,
//! EP)` built once from an `Msa` and shared by reference across
//! concurrent queries (spec §3's Lifecycle, §5's Concurrency model).

pub mod col;
pub mod lce;
pub mod rle;
pub mod suffix_array;
pub mod text;

use serde_derive::{Deserialize, Serialize};

use crate::msa::Msa;
use col::ColArrays;
use rle::Rle;
use text::Text;

/// The built index. Immutable after [`PanColIndex::build`]; every
/// field the data model (spec §3) lists is represented, either
/// directly or — for `BWT`, `C`, `R` — inside [`ColArrays`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PanColIndex {
    pub(crate) text: Text,
    /// Kept for fidelity to spec §3's Lifecycle list and for the
    /// `--dump-debug` artifacts (spec §6.3); not read by any query
    /// path, which only ever needs `col` and `rle`.
    sa: Vec<usize>,
    pub(crate) col: ColArrays,
    pub(crate) rle: Rle,
}

impl PanColIndex {
    /// Run the full construction pipeline (spec components B–E) over
    /// `msa`: `TextAssembler` → `SAConstructor` → `ColBuilder` → `RLE`.
    pub fn build(msa: &Msa) -> PanColIndex {
        log::info!(
            "building index: {} rows, width {}",
            msa.n_rows(),
            msa.width()
        );

        let text = Text::assemble(msa);
        log::debug!("assembled T: |T| = {}", text.len());

        let sa = suffix_array::construct(&text.t);
        log::debug!("constructed SA: {} entries", sa.len());

        let col = col::build(&text, &sa);
        log::debug!("built col/row/BWT arrays");

        let rle = rle::encode(&col.c, &col.r);
        log::info!(
            "RLE-encoded col array: {} runs over |T| = {}",
            rle.runs(),
            text.len()
        );

        PanColIndex { text, sa, col, rle }
    }

    /// |T|.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.len() == 0
    }

    /// N, the row count of the source MSA.
    pub fn n_rows(&self) -> usize {
        self.text.n_rows()
    }

    /// T, the concatenated ungapped text.
    pub fn text(&self) -> &[u8] {
        &self.text.t
    }

    /// The Burrows-Wheeler Transform of T.
    pub fn bwt(&self) -> &[u8] {
        &self.col.bwt
    }

    /// Number of runs in the RLE-compressed col array — the quantity
    /// spec §5 calls out as "typically ≪ |T| on pangenomic MSAs,
    /// which is the raison d'être of the RLE-compressed col array".
    pub fn run_count(&self) -> usize {
        self.rle.runs()
    }

    /// The raw suffix array, for the `--dump-debug` artifacts (spec
    /// §6.3) and inspection; not used by the query path.
    pub fn suffix_array(&self) -> &[usize] {
        &self.sa
    }

    /// The SA-order column array C, for the `col.txt` debug dump
    /// (spec §6.3: "`col.txt` lists C one integer per line").
    pub fn col_array(&self) -> &[u32] {
        &self.col.c
    }
}
