//! Result types for locate output.
//!
//! A `LocateResult` is plain owned data: it holds no DOM handles, so it can
//! outlive the parsed document, cross threads and serialize to JSON.

use serde::Serialize;

use crate::classifier::{ClassificationVerdict, RoleLabel};

/// One ranked descendant, as reported for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateSummary {
    /// `tag.class` of the element.
    pub descriptor: String,

    /// Purity score.
    pub score: f64,

    /// Trimmed text length in chars.
    pub text_len: usize,

    /// Bonuses that applied.
    pub reasons: Vec<String>,
}

/// One reply region found on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseRegion {
    /// Position among the regions of this page (document order).
    pub index: usize,

    /// Candidate selector that matched the region.
    pub selector: String,

    /// Root-to-region descriptors joined by `" > "`.
    pub dom_path: String,

    /// Role verdict for the region.
    pub verdict: ClassificationVerdict,

    /// Path of the element where an action button goes.
    pub anchor_path: String,

    /// Text of the region (or of its best candidate) before sanitizing.
    pub raw_text: String,

    /// Copy-ready text.
    pub text: String,

    /// Top-ranked descendants, when the region came from an over-matching
    /// selector. Empty otherwise.
    pub candidates: Vec<CandidateSummary>,
}

impl ResponseRegion {
    /// Whether a copy button should be mounted for this region.
    ///
    /// Assistant regions always qualify; uncertain ones only when
    /// `inject_uncertain` is set.
    #[must_use]
    pub fn should_inject(&self, inject_uncertain: bool) -> bool {
        match self.verdict.label {
            RoleLabel::Ai => true,
            RoleLabel::Uncertain => inject_uncertain && !self.text.is_empty(),
            RoleLabel::User => false,
        }
    }
}

/// Outcome of locating replies on one page snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocateResult {
    /// Host of the matched site profile.
    pub site: String,

    /// Regions in document order, whatever their label.
    pub regions: Vec<ResponseRegion>,

    /// Non-fatal issues met while locating, such as selectors passed over
    /// by the quality gate.
    pub warnings: Vec<String>,
}

impl LocateResult {
    /// Regions labeled as assistant replies.
    pub fn ai_regions(&self) -> impl Iterator<Item = &ResponseRegion> {
        self.regions.iter().filter(|r| r.verdict.is_ai())
    }

    /// Regions that get a copy button.
    pub fn injectable(&self, inject_uncertain: bool) -> impl Iterator<Item = &ResponseRegion> {
        self.regions
            .iter()
            .filter(move |r| r.should_inject(inject_uncertain))
    }

    /// The last assistant reply, the one a "copy latest" action targets.
    #[must_use]
    pub fn latest_reply(&self) -> Option<&ResponseRegion> {
        self.ai_regions().last()
    }
}
