// Copyright 2014-2016 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! `QueryDriver` (spec component I): glue components A–H together.
//! Given a built [`PanColIndex`] and a pattern P, obtain `occ1` via
//! `NaiveLocator`, run `BoundarySearch` for the upper and lower
//! endpoints, and emit the column list via `DocListing`.

use crate::alphabets::{SENTINEL, SEPARATOR};
use crate::config::QueryConfig;
use crate::error::QueryError;
use crate::index::PanColIndex;
use crate::query::{boundary, doc_listing, locator};

fn validate_pattern(pattern: &[u8]) -> Result<(), QueryError> {
    if pattern.is_empty() {
        return Err(QueryError::EmptyPattern);
    }
    for &b in pattern {
        if b == SEPARATOR || b == SENTINEL {
            return Err(QueryError::OutOfAlphabet { byte: b });
        }
    }
    Ok(())
}

/// Answer a column-location query for `pattern` against `index`.
///
/// Returns the SA-order, adjacency-deduplicated column list (spec
/// §6's query output contract). An empty vector means no occurrence
/// (spec §7's `NoMatch`/`PatternTooLong` conditions — both are
/// expected outcomes, not errors, and both collapse to the same
/// "no occurrence found" return from `NaiveLocator`).
pub fn query(
    index: &PanColIndex,
    pattern: &[u8],
    config: &QueryConfig,
) -> Result<Vec<u32>, QueryError> {
    validate_pattern(pattern)?;

    let occ1 = match locator::locate(index.text(), pattern) {
        Some(p) => p,
        None => return Ok(Vec::new()),
    };
    let m = pattern.len();

    let (upper, lower) = boundary::boundaries(&index.rle, &index.text, occ1, m, config.strategy);

    let n_rows = index.n_rows() as u32;
    let sentinel = n_rows + 1;
    let mut window: Vec<u32> = index.col.c[upper..=lower].to_vec();

    // Guard against the reserved sentinel column leaking into output
    // (spec §9's "open question — terminal sentinel"): the one SA
    // entry whose predecessor is `#` carries the placeholder value
    // `n_rows + 1` rather than its true column. If that entry is part
    // of the matching interval, its true column is recoverable from
    // T-position 0; in the (unreachable in practice, see
    // `Text::sentinel_witness_column`) case it isn't, drop the entry
    // rather than let the sentinel value escape.
    if let Some(pos) = window.iter().position(|&c| c == sentinel) {
        match index.text.sentinel_witness_column() {
            Some(true_col) => window[pos] = true_col,
            None => {
                window.remove(pos);
            }
        }
    }

    if window.is_empty() {
        return Ok(Vec::new());
    }

    let len = window.len();
    Ok(doc_listing::doc_listing(&window, 0, len))
}

/// Like [`query`], but sorted and globally deduplicated (spec §4.8's
/// "additional sort-and-unique pass"), for callers that want the set
/// of distinct columns rather than the SA-order listing.
pub fn query_unique(
    index: &PanColIndex,
    pattern: &[u8],
    config: &QueryConfig,
) -> Result<Vec<u32>, QueryError> {
    Ok(doc_listing::unique(query(index, pattern, config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msa::Msa;

    #[test]
    fn test_query_scenario_s1() {
        let msa = Msa::from_rows(vec![b"ACGT".to_vec()]).unwrap();
        let index = PanColIndex::build(&msa);
        let cols = query(&index, b"CG", &QueryConfig::default()).unwrap();
        assert_eq!(cols, vec![1]);
    }

    #[test]
    fn test_query_scenario_s2() {
        let msa = Msa::from_rows(vec![b"A-CGT".to_vec(), b"AACGT".to_vec()]).unwrap();
        let index = PanColIndex::build(&msa);
        let cols = query_unique(&index, b"CGT", &QueryConfig::default()).unwrap();
        assert_eq!(cols, vec![2]);
    }

    #[test]
    fn test_query_scenario_s6_no_match() {
        let msa = Msa::from_rows(vec![b"ACGT".to_vec()]).unwrap();
        let index = PanColIndex::build(&msa);
        let cols = query(&index, b"XYZ", &QueryConfig::default()).unwrap();
        assert!(cols.is_empty());
    }

    #[test]
    fn test_query_pattern_too_long_is_empty_not_error() {
        let msa = Msa::from_rows(vec![b"AC".to_vec()]).unwrap();
        let index = PanColIndex::build(&msa);
        let cols = query(&index, b"ACGTACGT", &QueryConfig::default()).unwrap();
        assert!(cols.is_empty());
    }

    #[test]
    fn test_query_empty_pattern_is_error() {
        let msa = Msa::from_rows(vec![b"ACGT".to_vec()]).unwrap();
        let index = PanColIndex::build(&msa);
        assert_eq!(
            query(&index, b"", &QueryConfig::default()).unwrap_err(),
            QueryError::EmptyPattern
        );
    }

    #[test]
    fn test_query_out_of_alphabet_pattern_is_error() {
        let msa = Msa::from_rows(vec![b"ACGT".to_vec()]).unwrap();
        let index = PanColIndex::build(&msa);
        let err = query(&index, b"AC$T", &QueryConfig::default()).unwrap_err();
        assert!(matches!(err, QueryError::OutOfAlphabet { byte: b'$' }));
    }

    #[test]
    fn test_query_binary_and_linear_strategy_agree() {
        let msa = Msa::from_rows(vec![
            b"AC-GTACGT".to_vec(),
            b"ACGGTAC-T".to_vec(),
            b"ACGGT-CGT".to_vec(),
        ])
        .unwrap();
        let index = PanColIndex::build(&msa);
        for pattern in [&b"CGT"[..], b"ACG", b"GTA", b"C"] {
            let binary = query(
                &index,
                pattern,
                &QueryConfig {
                    strategy: crate::config::Strategy::Binary,
                },
            )
            .unwrap();
            let linear = query(
                &index,
                pattern,
                &QueryConfig {
                    strategy: crate::config::Strategy::Linear,
                },
            )
            .unwrap();
            assert_eq!(binary, linear, "mismatch for pattern {:?}", pattern);
        }
    }

    #[test]
    fn test_query_never_emits_sentinel_column() {
        let msa = Msa::from_rows(vec![b"ACGT".to_vec(), b"ACGA".to_vec()]).unwrap();
        let index = PanColIndex::build(&msa);
        let sentinel = index.n_rows() as u32 + 1;
        for pattern in [&b"A"[..], b"C", b"G", b"T", b"AC", b"CG"] {
            let cols = query(&index, pattern, &QueryConfig::default()).unwrap();
            assert!(!cols.contains(&sentinel));
        }
    }
}
