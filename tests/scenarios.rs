// Copyright 2014-2016 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! End-to-end scenarios S1-S6 and the cross-module testable
//! properties (8, 9) run against the public API only, the way `bio`'s
//! top-level `tests/` directory exercises cross-module behavior
//! rather than single-unit internals.

use proptest::prelude::*;

use pgindex::config::{QueryConfig, Strategy};
use pgindex::index::text::Text;
use pgindex::index::PanColIndex;
use pgindex::msa::Msa;
use pgindex::query::doc_listing::doc_listing;
use pgindex::query::driver::{query, query_unique};
use pgindex::query::locator::locate;

#[test]
fn s1_single_row_exact_match() {
    let msa = Msa::from_rows(vec![b"ACGT".to_vec()]).unwrap();
    let index = PanColIndex::build(&msa);
    assert_eq!(index.text(), b"ACGT$#");

    let cols = query(&index, b"CG", &QueryConfig::default()).unwrap();
    assert_eq!(cols, vec![1]);
}

#[test]
fn s2_two_rows_with_gap_converge_on_shared_column() {
    let msa = Msa::from_rows(vec![b"A-CGT".to_vec(), b"AACGT".to_vec()]).unwrap();
    let index = PanColIndex::build(&msa);
    assert_eq!(index.text(), b"ACGT$AACGT$#");

    let cols = query_unique(&index, b"CGT", &QueryConfig::default()).unwrap();
    assert_eq!(cols, vec![2]);
}

#[test]
fn s3_naive_locator_finds_known_occurrence() {
    let t = b"ABBAABBABABABABBABA";
    assert_eq!(locate(t, b"BABA"), Some(7));
}

#[test]
fn s5_doc_listing_literal_array() {
    let c = [4, 4, 5, 5, 5, 5, 7, 8, 8, 4, 4, 8, 8, 8, 8, 8, 8, 1, 1];
    assert_eq!(doc_listing(&c, 3, 15), vec![5, 7, 8, 4, 8]);
}

#[test]
fn s6_no_match_yields_empty_columns() {
    let msa = Msa::from_rows(vec![b"ACGT".to_vec()]).unwrap();
    let index = PanColIndex::build(&msa);
    let cols = query(&index, b"XYZ", &QueryConfig::default()).unwrap();
    assert!(cols.is_empty());
}

#[test]
fn property_6_doc_listing_constant_interval_is_single_element() {
    let c = [9u32; 12];
    assert_eq!(doc_listing(&c, 2, 10), vec![9]);
}

#[test]
fn property_7_returned_columns_contain_witness_for_any_exact_substring() {
    let msa = Msa::from_rows(vec![
        b"AC-GTACGT".to_vec(),
        b"ACGGTAC-T".to_vec(),
        b"ACGGT-CGT".to_vec(),
    ])
    .unwrap();
    let text = Text::assemble(&msa);
    let index = PanColIndex::build(&msa);

    for pattern in [&b"CGT"[..], b"ACG", b"GTA", b"C"] {
        let p = locate(index.text(), pattern).expect("pattern is present in T by construction");
        let row = text.row_of(p);
        let offset = text.in_row_offset(p);
        let expected_col = text.pos_to_col(row, offset);

        let cols = query(&index, pattern, &QueryConfig::default()).unwrap();
        assert!(
            cols.contains(&expected_col),
            "pattern {:?}: columns {:?} missing witness column {}",
            pattern,
            cols,
            expected_col
        );
    }
}

#[test]
fn cli_round_trips_through_binary_and_linear_strategy_on_a_larger_msa() {
    let msa = Msa::from_rows(vec![
        b"ACGTACGTACGT-ACGT".to_vec(),
        b"ACG-ACGTACGTAACGT".to_vec(),
        b"ACGTACG-ACGTAACGT".to_vec(),
        b"ACGTACGTACGTAACG-".to_vec(),
    ])
    .unwrap();
    let index = PanColIndex::build(&msa);

    for pattern in [&b"ACGT"[..], b"CGTA", b"GTAC", b"TACG", b"A", b"ACGTACGT"] {
        let binary = query(
            &index,
            pattern,
            &QueryConfig {
                strategy: Strategy::Binary,
            },
        )
        .unwrap();
        let linear = query(
            &index,
            pattern,
            &QueryConfig {
                strategy: Strategy::Linear,
            },
        )
        .unwrap();
        assert_eq!(binary, linear, "strategies disagree for pattern {:?}", pattern);
    }
}

fn arb_msa_rows() -> impl Strategy<Value = Vec<Vec<u8>>> {
    let row = prop::collection::vec(prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T'), Just(b'-')], 1..12);
    prop::collection::vec(row, 1..5).prop_filter("all rows equal width", |rows| {
        let w = rows[0].len();
        rows.iter().all(|r| r.len() == w) && rows.iter().any(|r| r.iter().any(|&b| b != b'-'))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn property_8_binsearch_and_linsearch_agree_on_random_msas(
        rows in arb_msa_rows(),
    ) {
        let msa = Msa::from_rows(rows.clone()).unwrap();
        let index = PanColIndex::build(&msa);
        let t = index.text().to_vec();

        for start in 0..t.len() {
            let end = (start + 1..=t.len().min(start + 4)).last().unwrap_or(start + 1);
            let pattern = &t[start..end];
            if pattern.iter().any(|&b| b == b'$' || b == b'#') {
                continue;
            }
            let binary = query(&index, pattern, &QueryConfig { strategy: Strategy::Binary }).unwrap();
            let linear = query(&index, pattern, &QueryConfig { strategy: Strategy::Linear }).unwrap();
            prop_assert_eq!(binary, linear);
        }
    }

    #[test]
    fn property_9_lce_symmetry_on_random_msas(rows in arb_msa_rows()) {
        let msa = Msa::from_rows(rows).unwrap();
        let text = Text::assemble(&msa);
        let t = &text.t;

        for i in 0..t.len() {
            for j in 0..t.len() {
                let (k_ij, sign_ij) = pgindex::index::lce::lce(t, i, j);
                let (k_ji, sign_ji) = pgindex::index::lce::lce(t, j, i);
                prop_assert_eq!(k_ij, k_ji);
                if i != j {
                    prop_assert_eq!(sign_ij, !sign_ji);
                }
            }
        }
    }
}
