//! Region and Anchor Resolution
//!
//! Walks a profile's candidate selectors in order. The first selector that
//! yields at least one plausible match wins; a plausible match is outside
//! every exclude region and carries at least `min_region_len` chars of text.
//! Selectors that match only empty shells fall through to the next one.

use std::collections::HashSet;

use dom_query::Selection;
use tracing::debug;

use crate::dom;
use crate::selector::exclude::ExcludeIndex;
use crate::selector::utils::closest;
use crate::sites::SiteProfile;
use crate::Options;

/// Regions found by one candidate selector.
#[derive(Debug, Clone)]
pub struct ResolvedRegions<'a> {
    /// The selector that produced the regions.
    pub selector: String,
    /// Whether the selector is flagged as over-matching.
    pub generic: bool,
    /// Plausible matches in document order, outermost only.
    pub regions: Vec<Selection<'a>>,
    /// Selectors tried before this one, with why each was passed over.
    pub skipped: Vec<String>,
}

/// Find the reply regions under `root`.
///
/// Returns `None` when no candidate selector yields a plausible match.
#[must_use]
pub fn resolve_regions<'a>(
    root: &Selection<'a>,
    profile: &SiteProfile,
    options: &Options,
) -> Option<ResolvedRegions<'a>> {
    let excluded = ExcludeIndex::build(root, &profile.exclude_selectors);
    let mut skipped = Vec::new();

    for selector in &profile.candidate_selectors {
        let matched = dom::try_query_all(root, selector);
        let total = matched.nodes().len();
        let plausible: Vec<Selection<'a>> = matched
            .nodes()
            .iter()
            .map(|node| Selection::from(*node))
            .filter(|region| !excluded.is_excluded(region))
            .filter(|region| dom::text_len(region) >= options.min_region_len)
            .collect();

        if plausible.is_empty() {
            debug!(selector = %selector, matched = total, "selector yielded no plausible region");
            skipped.push(format!("{selector}: {total} matched, none plausible"));
            continue;
        }

        let regions = outermost(plausible);
        debug!(selector = %selector, regions = regions.len(), "resolved regions");
        return Some(ResolvedRegions {
            selector: selector.clone(),
            generic: profile.is_generic(selector),
            regions,
            skipped,
        });
    }
    None
}

/// Drop regions nested inside another region of the same list.
fn outermost(regions: Vec<Selection<'_>>) -> Vec<Selection<'_>> {
    let ids: HashSet<_> = regions.iter().filter_map(dom::node_id).collect();
    regions
        .into_iter()
        .filter(|region| {
            !dom::ancestors(region, None)
                .iter()
                .filter_map(dom::node_id)
                .any(|id| ids.contains(&id))
        })
        .collect()
}

/// Element where the action button for `region` is mounted.
///
/// Falls back to the region itself when [`find_anchor`] finds nothing.
#[must_use]
pub fn resolve_anchor<'a>(
    region: &Selection<'a>,
    profile: &SiteProfile,
    options: &Options,
) -> Selection<'a> {
    find_anchor(region, profile, options).unwrap_or_else(|| region.clone())
}

/// Match of the profile's anchor selector that belongs to `region`.
///
/// The selector is tried as a descendant of the region, then as the
/// region's closest ancestor, then inside each of the nearest
/// `avatar_search_depth` ancestors (the action bar is often a sibling of
/// the reply body). The upward search stops at the first ancestor that
/// also holds another turn or more than one anchor match, so a reply still
/// streaming in never borrows an earlier turn's bar.
#[must_use]
pub fn find_anchor<'a>(
    region: &Selection<'a>,
    profile: &SiteProfile,
    options: &Options,
) -> Option<Selection<'a>> {
    let selector = profile.button_anchor_selector.as_deref()?;

    if let Some(found) = first(&dom::try_query_all(region, selector)) {
        return Some(found);
    }
    if let Some(found) = closest(region, selector) {
        return Some(found);
    }
    for ancestor in dom::ancestors(region, Some(options.avatar_search_depth)) {
        if holds_other_turn(&ancestor, region, profile) {
            return None;
        }
        match dom::try_query_all(&ancestor, selector).nodes() {
            [] => {}
            [node] => return Some(Selection::from(*node)),
            _ => return None,
        }
    }
    None
}

/// Whether `scope` contains a candidate-selector match with text that is
/// neither inside `region` nor around it.
fn holds_other_turn(scope: &Selection, region: &Selection, profile: &SiteProfile) -> bool {
    let Some(region_id) = dom::node_id(region) else {
        return false;
    };
    let around: HashSet<_> = dom::ancestors(region, None)
        .iter()
        .filter_map(dom::node_id)
        .collect();

    profile.candidate_selectors.iter().any(|selector| {
        dom::try_query_all(scope, selector).nodes().iter().any(|node| {
            let other = Selection::from(*node);
            let Some(other_id) = dom::node_id(&other) else {
                return false;
            };
            let inside = other_id == region_id
                || dom::ancestors(&other, None)
                    .iter()
                    .filter_map(dom::node_id)
                    .any(|id| id == region_id);
            !inside && !around.contains(&other_id) && dom::text_len(&other) > 0
        })
    })
}

fn first<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().map(|node| Selection::from(*node))
}
