// Copyright 2014-2016 Johannes Köster, Taylor Cramer.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types for index construction and querying.

use thiserror::Error;

/// Errors raised while constructing a [`crate::index::PanColIndex`].
///
/// These are all fail-fast: construction aborts on the first one
/// encountered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// MSA rows of unequal length, a non-ASCII byte, or a reserved
    /// symbol (`$`/`#`) found inside a row.
    #[error("malformed MSA input: {detail}")]
    InputFormat { detail: String },

    /// The MSA has zero rows, or every row has length zero.
    #[error("MSA is empty: no rows, or all rows have zero ungapped length")]
    EmptyCorpus,
}

/// Errors raised while answering a query against an already-built index.
///
/// `PatternTooLong` and "no occurrence found" are *not* represented here:
/// per the propagation policy, those are expected outcomes and surface as
/// an empty result, not an `Err`. This type covers only malformed query
/// input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The pattern contains a byte outside Σ ∪ {`$`, `#`}.
    #[error("pattern contains a byte outside the index alphabet: {byte:#04x}")]
    OutOfAlphabet { byte: u8 },

    /// The pattern is empty; spec requires `|P| >= 1`.
    #[error("pattern must be non-empty")]
    EmptyPattern,
}
