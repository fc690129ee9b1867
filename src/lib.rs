// Copyright 2014-2016 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! `pgindex`: a pangenomic column-location index.
//!
//! Given a short pattern P and a multiple sequence alignment (MSA) of
//! N aligned sequences, this crate answers *which alignment columns*
//! P anchors to in the underlying ungapped sequences — the
//! read-mapping primitive for a pangenomic index where genomes are
//! rows of an MSA.
//!
//! The pipeline: an [`Msa`](msa::Msa) is assembled into a concatenated
//! text T (`index::text`), whose suffix array and BWT-derived column
//! array are built (`index::suffix_array`, `index::col`) and
//! run-length encoded (`index::rle`) into a
//! [`PanColIndex`](index::PanColIndex). Queries locate one occurrence
//! of P in T (`query::locator`), then binary-search the RLE runs with
//! an LCE oracle (`query::boundary`) to find the matching SA interval,
//! and list its columns (`query::doc_listing`) via
//! [`query::driver::query`].
//!
//! # Example
//!
//! ```rust
//! use pgindex::config::QueryConfig;
//! use pgindex::index::PanColIndex;
//! use pgindex::msa::Msa;
//! use pgindex::query::driver;
//!
//! let msa = Msa::from_rows(vec![b"ACGT".to_vec()]).unwrap();
//! let index = PanColIndex::build(&msa);
//! let columns = driver::query(&index, b"CG", &QueryConfig::default()).unwrap();
//! assert_eq!(columns, vec![1]);
//! ```

pub mod adapters;
pub mod alphabets;
pub mod config;
pub mod error;
pub mod index;
pub mod msa;
pub mod query;
