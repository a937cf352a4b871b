//! Diagnostics
//!
//! An optional observer of the locate pipeline. Hosts that want to
//! highlight regions or inspect candidate rankings implement [`Visualizer`];
//! everyone else passes [`NoopVisualizer`] or relies on the `tracing`
//! events the pipeline emits anyway.

use dom_query::Selection;
use tracing::debug;

use crate::classifier::ClassificationVerdict;
use crate::features::dom_path;
use crate::scoring::ScoredCandidate;

/// Receives pipeline decisions as they are made.
///
/// Every method has an empty default, so implementors pick what they need.
pub trait Visualizer {
    /// A region was classified.
    fn on_region(&mut self, _index: usize, _region: &Selection, _verdict: &ClassificationVerdict) {}

    /// Descendants of an over-matched region were ranked, best first.
    fn on_candidates(&mut self, _index: usize, _candidates: &[ScoredCandidate]) {}

    /// The action-button anchor for a region was resolved.
    fn on_anchor(&mut self, _index: usize, _anchor: &Selection) {}
}

/// Ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopVisualizer;

impl Visualizer for NoopVisualizer {}

/// Emits one `debug` event per decision.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingVisualizer {
    /// DOM path depth used in events.
    pub path_depth: usize,
}

impl TracingVisualizer {
    /// Visualizer logging paths of at most `path_depth` ancestors.
    #[must_use]
    pub fn new(path_depth: usize) -> Self {
        Self { path_depth }
    }

    fn path(&self, sel: &Selection) -> String {
        dom_path(sel, self.path_depth).join(" > ")
    }
}

impl Visualizer for TracingVisualizer {
    fn on_region(&mut self, index: usize, region: &Selection, verdict: &ClassificationVerdict) {
        debug!(
            index,
            path = %self.path(region),
            label = %verdict.label,
            score = verdict.score,
            reasons = ?verdict.reasons,
            "region"
        );
    }

    fn on_candidates(&mut self, index: usize, candidates: &[ScoredCandidate]) {
        for (rank, candidate) in candidates.iter().enumerate() {
            debug!(
                index,
                rank,
                element = %candidate.descriptor,
                score = candidate.score,
                text_len = candidate.text_len,
                reasons = ?candidate.reasons,
                "candidate"
            );
        }
    }

    fn on_anchor(&mut self, index: usize, anchor: &Selection) {
        debug!(index, path = %self.path(anchor), "anchor");
    }
}
