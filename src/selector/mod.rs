//! Selector Infrastructure
//!
//! Predicate rules over elements, the exclude-region index and the
//! site-selector resolution that finds reply regions and button anchors.

use dom_query::Selection;

pub mod exclude;
pub mod resolve;
pub mod utils;

/// Element predicate for tests a CSS selector cannot express, such as
/// vocabulary in attributes or tag families.
pub type Rule = fn(&Selection) -> bool;

/// Descendants of `root` accepted by `rule`, in document order.
///
/// `root` itself is never part of the result.
///
/// ```rust
/// use ai_reply_extract::selector::{self, utils};
/// use ai_reply_extract::dom;
///
/// let doc = dom::parse(r#"<div><img class="avatar"><span>hi</span><img class="avatar"></div>"#);
///
/// fn is_avatar(sel: &dom_query::Selection) -> bool {
///     utils::class(sel).contains("avatar")
/// }
///
/// assert_eq!(selector::query_all(&doc.select("div"), is_avatar).len(), 2);
/// ```
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rule(sel))
        .collect()
}
