//! Utility functions for selector pattern matching
//!
//! The "safe attribute read" layer: every attribute, class, tag or text read
//! the heuristics perform goes through here and yields an empty string when
//! the value is missing.

use crate::dom;
use dom_query::Selection;

// === DOM Traversal ===

/// Nearest element, starting with `sel` itself, that matches `selector`.
///
/// # Example
///
/// ```rust
/// use ai_reply_extract::selector::utils;
/// use ai_reply_extract::dom;
///
/// let doc = dom::parse(r#"
///     <div class="message">
///         <div class="body"><p id="target">text</p></div>
///     </div>
/// "#);
/// let p = doc.select("#target");
///
/// let message = utils::closest(&p, ".message");
/// assert!(message.is_some());
/// ```
#[must_use]
pub fn closest<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    if dom::matches(sel, selector) {
        return Some(sel.clone());
    }
    dom::ancestors(sel, None)
        .into_iter()
        .find(|ancestor| dom::matches(ancestor, selector))
}

// === String Utilities ===

/// Convert to lowercase
#[inline]
#[must_use]
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Whether `haystack` contains any of the `needles`, ignoring case.
///
/// `haystack` is lowercased once; needles are expected in lowercase
/// already; site-supplied keyword lists are lowered anyway.
#[must_use]
pub fn contains_any(haystack: &str, needles: &[String]) -> bool {
    if haystack.is_empty() {
        return false;
    }
    let lowered = lower(haystack);
    needles
        .iter()
        .filter(|needle| !needle.is_empty())
        .any(|needle| lowered.contains(&lower(needle)))
}

// === Element Attribute Helpers ===

/// Get element ID attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    dom::id(sel).unwrap_or_default()
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Trimmed text content (empty string for an empty selection)
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    dom::text_content(sel).trim().to_string()
}

/// Combine id and class for multi-attribute checks
#[inline]
#[must_use]
pub fn id_class(sel: &Selection) -> String {
    format!("{} {}", id(sel), class(sel)).trim().to_string()
}

/// Short `tag.class1.class2` descriptor used in DOM paths.
///
/// # Example
///
/// ```rust
/// use ai_reply_extract::selector::utils;
/// use ai_reply_extract::dom;
///
/// let doc = dom::parse(r#"<div class="ds-markdown  ds-markdown--block">x</div>"#);
/// let div = doc.select("div");
/// assert_eq!(utils::descriptor(&div), "div.ds-markdown.ds-markdown--block");
/// ```
#[must_use]
pub fn descriptor(sel: &Selection) -> String {
    let mut out = tag(sel);
    for token in class(sel).split_whitespace() {
        out.push('.');
        out.push_str(token);
    }
    out
}

// === Element Type Checks ===

/// Check if element is one of the specified tags
#[inline]
#[must_use]
pub fn is_one_of_tags(sel: &Selection, tags: &[&str]) -> bool {
    let t = tag(sel);
    tags.contains(&t.as_str())
}
