//! Exclude-Region Index
//!
//! Thinking, reasoning and tool-call blocks look like replies to every
//! lexical heuristic, so exclusion is decided structurally and first: an
//! element inside an exclude-selector match is never a candidate, whatever
//! it scores.

use std::collections::HashSet;

use dom_query::{NodeId, Selection};

use crate::dom;

/// Cache of excluded element `NodeId`s for O(1) ancestor lookup.
///
/// Built once per document scan.
#[derive(Debug, Default)]
pub struct ExcludeIndex {
    excluded_ids: HashSet<NodeId>,
}

impl ExcludeIndex {
    /// Index every element under the root of `scope`'s document that matches
    /// one of `selectors`.
    ///
    /// The whole document is indexed, not just `scope`, because the excluding
    /// container may sit above the region being ranked.
    #[must_use]
    pub fn build(scope: &Selection, selectors: &[String]) -> Self {
        let mut excluded_ids = HashSet::new();
        if selectors.is_empty() {
            return Self { excluded_ids };
        }

        let top = dom::ancestors(scope, None)
            .pop()
            .unwrap_or_else(|| scope.clone());
        for selector in selectors {
            if dom::matches(&top, selector) {
                excluded_ids.extend(dom::node_id(&top));
            }
            for node in dom::try_query_all(&top, selector).nodes() {
                excluded_ids.insert(node.id);
            }
        }
        Self { excluded_ids }
    }

    /// Whether the element or one of its ancestors is excluded.
    #[must_use]
    pub fn is_excluded(&self, sel: &Selection) -> bool {
        if self.excluded_ids.is_empty() {
            return false;
        }
        let mut current = sel.nodes().first().copied();
        while let Some(node) = current {
            if self.excluded_ids.contains(&node.id) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Number of excluded roots found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.excluded_ids.len()
    }

    /// Whether nothing in the document is excluded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excluded_ids.is_empty()
    }
}

/// One-off check without building an index.
///
/// Walks the element and its ancestors, testing each exclude selector.
#[must_use]
pub fn is_inside_excluded(sel: &Selection, selectors: &[String]) -> bool {
    if selectors.is_empty() || !dom::is_element(sel) {
        return false;
    }
    std::iter::once(sel.clone())
        .chain(dom::ancestors(sel, None))
        .any(|element| selectors.iter().any(|s| dom::matches(&element, s)))
}
