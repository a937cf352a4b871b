//! Locate Pipeline
//!
//! Ties the stages together for one page snapshot:
//!
//! 1. Resolve reply regions through the site's candidate selectors.
//! 2. Narrow regions from over-matching selectors to their purest
//!    descendant.
//! 3. Classify each region, falling back to its content when the DOM is
//!    silent.
//! 4. Sanitize the text and resolve the button anchor.

use dom_query::{Document, Selection};
use tracing::{debug, warn};

use crate::classifier::{classify_text, classify_with_options, RoleLabel};
use crate::diagnostics::{NoopVisualizer, Visualizer};
use crate::dom;
use crate::error::{Error, Result};
use crate::features::dom_path;
use crate::result::{CandidateSummary, LocateResult, ResponseRegion};
use crate::sanitize::sanitize_with_options;
use crate::scoring::{top_candidates, ScoredCandidate};
use crate::selector::resolve::{find_anchor, resolve_regions, ResolvedRegions};
use crate::sites::{SiteProfile, SiteRegistry};
use crate::Options;

/// Locate replies on a page of `host` with default options.
///
/// # Errors
///
/// [`Error::UnsupportedHost`] when no profile matches `host`;
/// [`Error::NoResponseRegion`] when no selector finds a plausible region.
pub fn locate(html: &str, host: &str, registry: &SiteRegistry) -> Result<LocateResult> {
    locate_with_options(html, host, registry, &Options::default())
}

/// Locate replies on a page of `host`.
///
/// # Errors
///
/// See [`locate`].
pub fn locate_with_options(
    html: &str,
    host: &str,
    registry: &SiteRegistry,
    options: &Options,
) -> Result<LocateResult> {
    let Some(profile) = registry.resolve(host) else {
        debug!(host, "no site profile");
        return Err(Error::UnsupportedHost(host.to_string()));
    };
    let doc = dom::parse(html);
    locate_document(&doc, profile, options, &mut NoopVisualizer)
}

/// Locate replies on the page at `page_url`.
///
/// # Errors
///
/// [`Error::InvalidUrl`] for an unparsable URL, otherwise as [`locate`].
pub fn locate_url(
    html: &str,
    page_url: &str,
    registry: &SiteRegistry,
    options: &Options,
) -> Result<LocateResult> {
    let profile = registry.resolve_url(page_url)?;
    let doc = dom::parse(html);
    locate_document(&doc, profile, options, &mut NoopVisualizer)
}

/// Locate replies in an already parsed document, reporting each decision
/// to `visualizer`.
///
/// # Errors
///
/// [`Error::NoResponseRegion`] when no selector finds a plausible region.
pub fn locate_document(
    doc: &Document,
    profile: &SiteProfile,
    options: &Options,
    visualizer: &mut dyn Visualizer,
) -> Result<LocateResult> {
    let root = doc.select("html");
    let Some(resolved) = resolve_regions(&root, profile, options) else {
        warn!(site = %profile.host, "no response region");
        return Err(Error::NoResponseRegion);
    };

    let mut result = LocateResult {
        site: profile.host.clone(),
        regions: Vec::with_capacity(resolved.regions.len()),
        warnings: resolved
            .skipped
            .iter()
            .map(|skip| format!("selector passed over: {skip}"))
            .collect(),
    };

    for (index, region) in resolved.regions.iter().enumerate() {
        let located = locate_region(index, region, &resolved, profile, options, visualizer);
        if located.text.is_empty() {
            result
                .warnings
                .push(format!("region {index}: nothing left after sanitizing"));
        }
        result.regions.push(located);
    }

    debug!(
        site = %result.site,
        selector = %resolved.selector,
        regions = result.regions.len(),
        ai = result.ai_regions().count(),
        "located"
    );
    Ok(result)
}

fn locate_region(
    index: usize,
    region: &Selection,
    resolved: &ResolvedRegions,
    profile: &SiteProfile,
    options: &Options,
    visualizer: &mut dyn Visualizer,
) -> ResponseRegion {
    let mut candidates = Vec::new();
    let mut narrowed = None;
    if resolved.generic {
        let ranked = top_candidates(region, profile, options, options.top_k);
        visualizer.on_candidates(index, &ranked);
        narrowed = ranked.first().map(|best| best.selection.clone());
        candidates = ranked.iter().map(summarize).collect();
    }
    let source = narrowed.clone().unwrap_or_else(|| region.clone());

    let raw_text = dom::block_text(&source).trim().to_string();
    let text = sanitize_with_options(&raw_text, options);

    let mut verdict = classify_with_options(region, profile, options);
    if verdict.label == RoleLabel::Uncertain && options.content_fallback {
        let content = classify_text(&text, profile, options);
        verdict = verdict.combined_with(content, options.uncertain_threshold);
    }
    visualizer.on_region(index, region, &verdict);

    // A narrowed region mounts its button on the best candidate unless the
    // site names its own anchor.
    let anchor = find_anchor(region, profile, options)
        .or(narrowed)
        .unwrap_or_else(|| region.clone());
    visualizer.on_anchor(index, &anchor);

    ResponseRegion {
        index,
        selector: resolved.selector.clone(),
        dom_path: dom_path(region, options.dom_path_depth).join(" > "),
        verdict,
        anchor_path: dom_path(&anchor, options.dom_path_depth).join(" > "),
        raw_text,
        text,
        candidates,
    }
}

fn summarize(candidate: &ScoredCandidate) -> CandidateSummary {
    CandidateSummary {
        descriptor: candidate.descriptor.clone(),
        score: candidate.score,
        text_len: candidate.text_len,
        reasons: candidate.reasons.clone(),
    }
}
