// Copyright 2014-2016 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! `BoundarySearch` (spec component G): given `occ1` and `|P|`, locate
//! the upper and lower SA-interval endpoints of the suffixes starting
//! with P, by LCE-guided search over the RLE-compressed col array
//! (spec §4.7).
//!
//! The source's `check`/`has_boundary` pair used loosely-typed
//! sentinel strings (`"up"`/`"down"`/`"done"`) for the three-way
//! outcome; spec §9's design notes ask for "a small variant return
//! type with three cases" instead — that's [`Direction`] here.

use crate::config::Strategy;
use crate::index::lce::lce;
use crate::index::rle::Rle;
use crate::index::text::Text;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    /// The boundary lies at a lower RLE index than the one probed.
    Up,
    /// The boundary lies at a higher RLE index than the one probed.
    Down,
    /// The boundary is the index just probed.
    Done,
}

/// T-position a given RLE index witnesses, for LCE purposes.
///
/// One entry in `(C', R')` — the one where `R' == n_rows` — marks the
/// SA index whose predecessor is `#` (spec §4.4's sentinel case,
/// `SA[i] == 0`). Its witness is not some undefined sentinel position:
/// it is, by construction, always exactly T-position 0 (the start of
/// the whole text), so that's what's returned here rather than
/// dereferencing through `msa_to_t` with the bogus `C' == n_rows + 1`
/// column that entry carries (spec §9's "open question — terminal
/// sentinel").
fn witness_pos(rle: &Rle, text: &Text, k: usize, n_rows: u32) -> usize {
    if rle.r[k] == n_rows {
        0
    } else {
        text.msa_to_t(rle.r[k] as usize, rle.c[k])
    }
}

/// The four-branch decision table of spec §4.7, shared verbatim by
/// both `binsearch` and `linsearch` so that Testable Property 8
/// (their agreement) holds by construction rather than by luck.
fn probe(
    rle: &Rle,
    text: &Text,
    occ1: usize,
    m: usize,
    k: usize,
    neighbor: usize,
    upper: bool,
    n_rows: u32,
) -> Direction {
    let pos_here = witness_pos(rle, text, k, n_rows);
    let pos_neigh = witness_pos(rle, text, neighbor, n_rows);
    let (lce_here, sign_here) = lce(&text.t, pos_here, occ1);
    let (lce_neigh, sign_neigh) = lce(&text.t, pos_neigh, occ1);

    if lce_here >= m && lce_neigh < m {
        return Direction::Done;
    }
    if lce_here == lce_neigh && sign_here != sign_neigh {
        return Direction::Done;
    }
    if upper {
        if lce_here == lce_neigh && sign_here {
            return Direction::Down;
        }
        if lce_here >= m || !sign_here {
            return Direction::Up;
        }
    } else {
        if lce_here == lce_neigh && !sign_here {
            return Direction::Up;
        }
        if lce_here >= m || sign_here {
            return Direction::Down;
        }
    }

    log::error!(
        "BoundarySearch predicate fell through every branch at RLE index {k} (upper={upper}); \
         this is an InternalInvariant violation (spec §7)"
    );
    panic!("BoundarySearch: unreachable predicate branch (InternalInvariant)");
}

/// Binary search over `[start, end)` for the RLE index where `probe`
/// returns `Done` (spec's `binsearch`).
fn binsearch(rle: &Rle, text: &Text, occ1: usize, m: usize, upper: bool, n_rows: u32) -> usize {
    let n = rle.len();
    let (mut start, mut end): (usize, usize) = if upper { (1, n) } else { (0, n - 1) };
    let step: isize = if upper { -1 } else { 1 };

    loop {
        if start >= end {
            log::error!("BoundarySearch::binsearch exhausted its interval without a boundary");
            panic!("BoundarySearch: no boundary found (InternalInvariant)");
        }
        let mid = start + (end - start) / 2;
        let neighbor = (mid as isize + step) as usize;
        match probe(rle, text, occ1, m, mid, neighbor, upper, n_rows) {
            Direction::Done => return mid,
            Direction::Up => end = mid,
            Direction::Down => start = mid + 1,
        }
    }
}

/// Linear sweep over `[start, end)` for the RLE index where `probe`
/// returns `Done` (spec's `linsearch`). Exists to pin equivalence with
/// `binsearch` (Testable Property 8); not used by `QueryDriver` by
/// default.
fn linsearch(rle: &Rle, text: &Text, occ1: usize, m: usize, upper: bool, n_rows: u32) -> usize {
    let n = rle.len();
    let (start, end): (usize, usize) = if upper { (1, n) } else { (0, n.saturating_sub(1)) };
    let step: isize = if upper { -1 } else { 1 };

    for k in start..end {
        let neighbor = (k as isize + step) as usize;
        if probe(rle, text, occ1, m, k, neighbor, upper, n_rows) == Direction::Done {
            return k;
        }
    }

    log::error!("BoundarySearch::linsearch swept its interval without a boundary");
    panic!("BoundarySearch: no boundary found (InternalInvariant)");
}

/// Converts a located RLE index into the original SA-coordinate
/// system (spec §4.7's open question on return discipline): "the spec
/// recommends inclusive SA endpoints of the matching suffix
/// interval". Every RLE index `k` belongs to run `k / 2`; the upper
/// endpoint is that run's first SA index, the lower endpoint its
/// last.
fn rle_index_to_sa_bound(rle: &Rle, rle_index: usize, upper: bool) -> usize {
    let run = rle_index / 2;
    if upper {
        rle.run_bounds[run]
    } else {
        rle.run_bounds[run + 1] - 1
    }
}

/// Locate the closed SA-interval `[upper, lower]` of suffixes whose
/// length-`m` prefix equals the pattern witnessed at `occ1` (spec
/// §4.7). `strategy` selects `binsearch` or `linsearch`; both must
/// agree on the same inputs.
pub fn boundaries(
    rle: &Rle,
    text: &Text,
    occ1: usize,
    m: usize,
    strategy: Strategy,
) -> (usize, usize) {
    let n_rows = text.n_rows() as u32;
    let search: fn(&Rle, &Text, usize, usize, bool, u32) -> usize = match strategy {
        Strategy::Binary => binsearch,
        Strategy::Linear => linsearch,
    };
    let upper_rle = search(rle, text, occ1, m, true, n_rows);
    let lower_rle = search(rle, text, occ1, m, false, n_rows);
    (
        rle_index_to_sa_bound(rle, upper_rle, true),
        rle_index_to_sa_bound(rle, lower_rle, false),
    )
}
