// Copyright 2014-2016 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! `RLE` (spec component E): run-length encode the parallel `(C, R)`
//! streams into the boundary-pair form spec §4.5 requires — *not* the
//! textbook `(value, count)` shape. `BoundarySearch`'s predicate needs
//! immediate access to both sides of every run boundary via a fixed
//! `±1` offset, which this layout gives it directly.

use serde_derive::{Deserialize, Serialize};

/// `(C', R')`: length `2 * runs(C)`. Index `2k` is the opening witness
/// of run `k`, index `2k+1` its closing witness — except index `0`
/// and the last index, which are a single witness each for the first
/// and last run (spec §4.5's `C'[0]` and the final terminator).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rle {
    pub c: Vec<u32>,
    pub r: Vec<u32>,
    /// `run_bounds[k]..run_bounds[k+1]` is the half-open range of
    /// original (pre-RLE, SA-order) indices spanned by run `k`.
    /// Length `runs() + 1`. Not part of spec §4.5's encoding proper,
    /// but required by `BoundarySearch` (spec §4.7) to convert a
    /// located RLE index back into the SA-coordinate system the
    /// spec's "open question — return discipline" asks callers to
    /// settle on (spec recommends inclusive SA endpoints).
    pub run_bounds: Vec<usize>,
}

impl Rle {
    /// Number of runs in the encoded column array.
    pub fn runs(&self) -> usize {
        self.c.len() / 2
    }

    /// Length of the encoded arrays (`2 * runs()`).
    pub fn len(&self) -> usize {
        self.c.len()
    }

    pub fn is_empty(&self) -> bool {
        self.c.is_empty()
    }
}

/// Encode `(c, r)` per spec §4.5. Panics if `c` and `r` differ in
/// length or are empty — both are construction-time invariants that
/// can never fail on an index built from a nonempty `Msa`.
pub fn encode(c: &[u32], r: &[u32]) -> Rle {
    assert_eq!(c.len(), r.len(), "C and R must have equal length");
    assert!(!c.is_empty(), "C must be nonempty");

    let mut new_c = vec![c[0]];
    let mut new_r = vec![r[0]];
    let mut run_bounds = vec![0];

    for i in 1..c.len() {
        if c[i] != new_c[new_c.len() - 1] {
            new_c.push(c[i - 1]);
            new_r.push(r[i - 1]);
            new_c.push(c[i]);
            new_r.push(r[i]);
            run_bounds.push(i);
        }
    }

    new_c.push(c[c.len() - 1]);
    new_r.push(r[r.len() - 1]);
    run_bounds.push(c.len());

    Rle {
        c: new_c,
        r: new_r,
        run_bounds,
    }
}
