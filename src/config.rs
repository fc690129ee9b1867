// Copyright 2014-2016 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The one knob spec.md leaves open as an implementation choice
//! (spec §4.7, §9): which algorithm `BoundarySearch` runs,
//! `binsearch` or `linsearch`. Both must agree on every input
//! (Testable Property 8); the knob exists so tests and benchmarks can
//! exercise both, not because production callers need to pick one.

use clap::ValueEnum;
use serde_derive::{Deserialize, Serialize};

/// Selects the `BoundarySearch` algorithm (spec §4.7).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Strategy {
    /// Binary search over the RLE runs (spec's `binsearch`). O(log
    /// runs) probes per endpoint. The default.
    #[default]
    Binary,
    /// Linear sweep over the RLE runs (spec's `linsearch`). O(runs)
    /// probes per endpoint; kept only to pin equivalence with
    /// `Binary` (Testable Property 8).
    Linear,
}

/// Query-time configuration. The index itself (`PanColIndex`) has no
/// tunable construction parameters; everything configurable lives
/// here, at the `QueryDriver` boundary.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryConfig {
    pub strategy: Strategy,
}
