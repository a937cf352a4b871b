//! Candidate Selector / Scorer
//!
//! When a site selector captures a whole conversation turn (avatar, header,
//! action bar and reply together), the reply body is recovered by ranking
//! every descendant on a purity score: how much it looks like clean prose
//! and how little like UI chrome or a user prompt.
//!
//! | Signal | Bonus |
//! |--------|-------|
//! | Answer vocabulary, no prompt vocabulary | +1.0 |
//! | No button vocabulary | +1.5 |
//! | No prompt vocabulary | +0.5 |
//! | Leaf-like (no block children) | +0.8 |
//! | Length inside the prose band | +0.5 |
//! | Sentence punctuation | +0.3 |
//! | Block/paragraph tag | +0.2 |

use dom_query::Selection;
use tracing::debug;

use crate::dom;
use crate::patterns::{AI_TEXT, BUTTON_TEXT, TERMINAL_PUNCTUATION, USER_TEXT};
use crate::selector::exclude::ExcludeIndex;
use crate::selector::utils::{contains_any, descriptor, is_one_of_tags, trimmed_text};
use crate::sites::SiteProfile;
use crate::Options;

/// Tags that hold a paragraph or block of prose.
const BLOCK_TAGS: &[&str] = &["p", "div", "section", "article", "li", "blockquote"];

/// Characters of a candidate's text checked for a thinking-block header.
const THINKING_HEADER_CHARS: usize = 40;

/// A ranked descendant.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    /// The element.
    pub selection: Selection<'a>,
    /// Purity score; higher is cleaner.
    pub score: f64,
    /// Trimmed text length in chars.
    pub text_len: usize,
    /// Position among the root's descendants (document order).
    pub order: usize,
    /// `tag.class` of the element.
    pub descriptor: String,
    /// Bonuses that applied.
    pub reasons: Vec<String>,
}

/// Rank the descendants of `root` by purity, best first.
///
/// Elements inside an exclude-selector match, elements opening with a
/// thinking header and elements with less than `min_candidate_len` chars of
/// text are not candidates. Equal scores keep document order.
#[must_use]
pub fn rank_candidates<'a>(
    root: &Selection<'a>,
    profile: &SiteProfile,
    options: &Options,
) -> Vec<ScoredCandidate<'a>> {
    let excluded = ExcludeIndex::build(root, &profile.exclude_selectors);
    let mut ranked: Vec<ScoredCandidate<'a>> = Vec::new();

    for (order, element) in dom::descendants(root).into_iter().enumerate() {
        if excluded.is_excluded(&element) {
            continue;
        }
        let text = trimmed_text(&element);
        let text_len = text.chars().count();
        if text_len < options.min_candidate_len || opens_with_thinking_header(&text, profile) {
            continue;
        }
        let (score, reasons) = purity_score(&element, &text, text_len, profile, options);
        ranked.push(ScoredCandidate {
            descriptor: descriptor(&element),
            selection: element,
            score,
            text_len,
            order,
            reasons,
        });
    }

    // stable: ties stay in document order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!(
        candidates = ranked.len(),
        excluded = excluded.len(),
        best = ranked.first().map(|c| c.score),
        "ranked candidates"
    );
    ranked
}

/// The best candidate under `root`, if any.
#[must_use]
pub fn best_candidate<'a>(
    root: &Selection<'a>,
    profile: &SiteProfile,
    options: &Options,
) -> Option<ScoredCandidate<'a>> {
    rank_candidates(root, profile, options).into_iter().next()
}

/// The `k` best candidates under `root`.
#[must_use]
pub fn top_candidates<'a>(
    root: &Selection<'a>,
    profile: &SiteProfile,
    options: &Options,
    k: usize,
) -> Vec<ScoredCandidate<'a>> {
    let mut ranked = rank_candidates(root, profile, options);
    ranked.truncate(k);
    ranked
}

/// Purity score of one element whose trimmed text is `text`.
#[must_use]
pub fn purity_score(
    element: &Selection,
    text: &str,
    text_len: usize,
    profile: &SiteProfile,
    options: &Options,
) -> (f64, Vec<String>) {
    let features = &profile.role_features;
    let has_user = USER_TEXT.is_match(text) || contains_any(text, &features.user_keywords);
    let has_ai = AI_TEXT.is_match(text) || contains_any(text, &features.ai_keywords);
    let has_buttons = BUTTON_TEXT.is_match(text);

    let mut score = 0.0;
    let mut reasons = Vec::new();
    let mut bonus = |points: f64, reason: &str| {
        score += points;
        reasons.push(reason.to_string());
    };

    if has_ai && !has_user {
        bonus(1.0, "ai-vocabulary");
    }
    if !has_buttons {
        bonus(1.5, "no-buttons");
    }
    if !has_user {
        bonus(0.5, "no-user-vocabulary");
    }
    if dom::has_only_inline_children(element) {
        bonus(0.8, "leaf");
    }
    if (options.structural_min_len..=options.prose_max_len).contains(&text_len) {
        bonus(0.5, "prose-length");
    }
    if TERMINAL_PUNCTUATION.is_match(text) {
        bonus(0.3, "punctuation");
    }
    if is_one_of_tags(element, BLOCK_TAGS) {
        bonus(0.2, "block-tag");
    }

    (score, reasons)
}

fn opens_with_thinking_header(text: &str, profile: &SiteProfile) -> bool {
    let keywords = &profile.role_features.thinking_keywords;
    if keywords.is_empty() {
        return false;
    }
    let head: String = text.chars().take(THINKING_HEADER_CHARS).collect();
    contains_any(&head, keywords)
}
