//! DOM Read Adapter
//!
//! Read-only operations over a parsed page snapshot using the `dom_query`
//! crate. The core never mutates the host page; every helper here tolerates
//! empty selections and missing attributes.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Inline tags that do not break a text block.
///
/// An element whose children are all of these (or `br`) still reads as a
/// single leaf of prose.
pub const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "br", "cite", "code", "del", "dfn", "em", "i", "ins", "kbd",
    "mark", "q", "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var", "wbr",
];

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .filter(|node| node.is_element())
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Stable identity of the first node in a selection.
#[inline]
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|node| node.id)
}

/// Whether the selection holds at least one element node.
#[inline]
#[must_use]
pub fn is_element(sel: &Selection) -> bool {
    sel.nodes().first().is_some_and(dom_query::NodeRef::is_element)
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Trimmed text length in chars (not bytes).
#[must_use]
pub fn text_len(sel: &Selection) -> usize {
    let text = text_content(sel);
    text.trim().chars().count()
}

/// Text of an element with line breaks at block boundaries and `br`.
///
/// `Selection::text` glues adjacent paragraphs together; line-oriented
/// cleanup needs them apart. Script, style and noscript content is skipped.
#[must_use]
pub fn block_text(sel: &Selection) -> String {
    let mut out = String::new();
    if let Some(node) = sel.nodes().first() {
        push_block_text(node, &mut out);
    }
    out
}

fn push_block_text(node: &dom_query::NodeRef, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            out.push_str(&child.text());
        } else if child.is_element() {
            let tag = child
                .node_name()
                .map(|t| t.to_ascii_lowercase())
                .unwrap_or_default();
            match tag.as_str() {
                "script" | "style" | "noscript" | "template" => {}
                "br" => out.push('\n'),
                t if INLINE_TAGS.contains(&t) => push_block_text(&child, out),
                _ => {
                    out.push('\n');
                    push_block_text(&child, out);
                    out.push('\n');
                }
            }
        }
    }
}

// === Tree Navigation ===

/// Get direct element children
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

/// Element ancestors, nearest first, at most `limit` of them.
///
/// `None` walks up to the root element.
#[must_use]
pub fn ancestors<'a>(sel: &Selection<'a>, limit: Option<usize>) -> Vec<Selection<'a>> {
    let mut out = Vec::new();
    let mut current = sel.nodes().first().and_then(dom_query::NodeRef::parent);
    while let Some(node) = current {
        if limit.is_some_and(|max| out.len() >= max) || !node.is_element() {
            break;
        }
        out.push(Selection::from(node));
        current = node.parent();
    }
    out
}

/// All descendant elements in document order.
#[must_use]
pub fn descendants<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.select("*").nodes().iter().map(|node| Selection::from(*node)).collect()
}

// === Querying ===

/// Query all elements by a CSS selector that may be malformed.
///
/// Configured selectors come from site profiles; a bad one yields an empty
/// selection instead of a panic.
#[must_use]
pub fn try_query_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.try_select(selector)
        .unwrap_or_else(|| Selection::from(Vec::new()))
}

/// Whether the first node of the selection matches a CSS selector.
///
/// Malformed selectors never match.
#[inline]
#[must_use]
pub fn matches(sel: &Selection, selector: &str) -> bool {
    sel.is(selector)
}

/// Whether a selector string parses as CSS.
#[must_use]
pub fn is_valid_selector(selector: &str) -> bool {
    dom_query::Matcher::new(selector).is_ok()
}

// === Element Utilities ===

/// Check if an element only contains inline children (or none).
#[must_use]
pub fn has_only_inline_children(sel: &Selection) -> bool {
    children(sel).iter().all(|child| {
        tag_name(&child).is_some_and(|t| INLINE_TAGS.contains(&t.as_str()))
    })
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_select() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div");

        assert_eq!(id(&div), Some("main".to_string()));
        assert_eq!(class_name(&div), Some("container".to_string()));
    }

    #[test]
    fn test_missing_attributes_return_none() {
        let doc = parse(r#"<div>no attributes</div>"#);
        let div = doc.select("div");

        assert_eq!(id(&div), None);
        assert_eq!(class_name(&div), None);
        assert_eq!(get_attribute(&div, "data-role"), None);
    }

    #[test]
    fn test_operations_on_empty_selection() {
        let doc = parse(r#"<div>content</div>"#);
        let empty = doc.select("span");

        assert_eq!(tag_name(&empty), None);
        assert_eq!(text_len(&empty), 0);
        assert!(ancestors(&empty, None).is_empty());
        assert!(node_id(&empty).is_none());
    }

    #[test]
    fn test_tag_name_is_lowercase() {
        let doc = parse(r#"<ARTICLE><Section>content</Section></ARTICLE>"#);
        assert_eq!(tag_name(&doc.select("article")), Some("article".to_string()));
        assert_eq!(tag_name(&doc.select("section")), Some("section".to_string()));
    }

    #[test]
    fn test_text_len_counts_chars() {
        let doc = parse("<p>  你好，世界  </p>");
        assert_eq!(text_len(&doc.select("p")), 5);
    }

    #[test]
    fn test_ancestors_nearest_first_and_limited() {
        let doc = parse(
            r#"<div id="a"><div id="b"><div id="c"><p id="t">x</p></div></div></div>"#,
        );
        let p = doc.select("#t");

        let all = ancestors(&p, None);
        assert_eq!(id(&all[0]), Some("c".to_string()));
        assert_eq!(id(&all[1]), Some("b".to_string()));
        assert_eq!(id(&all[2]), Some("a".to_string()));
        // body and html follow
        assert_eq!(tag_name(all.last().unwrap_or(&p)), Some("html".to_string()));

        let two = ancestors(&p, Some(2));
        assert_eq!(two.len(), 2);
    }

    #[test]
    fn test_try_query_all_tolerates_bad_selector() {
        let doc = parse(r#"<div class="a">x</div>"#);
        let root = doc.select("html");
        assert_eq!(try_query_all(&root, "div.a").nodes().len(), 1);
        assert!(try_query_all(&root, "div[[").is_empty());
    }

    #[test]
    fn test_matches_and_selector_validation() {
        let doc = parse(r#"<div class="thinking-container">x</div>"#);
        let div = doc.select("div");
        assert!(matches(&div, ".thinking-container"));
        assert!(!matches(&div, ".answer"));
        assert!(is_valid_selector("div.answer > p"));
        assert!(!is_valid_selector("div[["));
    }

    #[test]
    fn test_inline_children_detection() {
        let doc = parse(
            r#"<p id="a">text <b>bold</b><br>more</p><div id="b"><p>block</p></div><p id="c">plain</p>"#,
        );
        assert!(has_only_inline_children(&doc.select("#a")));
        assert!(!has_only_inline_children(&doc.select("#b")));
        assert!(has_only_inline_children(&doc.select("#c")));
    }

    #[test]
    fn test_descendants_in_document_order() {
        let doc = parse(r#"<div id="r"><p id="1">a</p><section><p id="2">b</p></section></div>"#);
        let ids: Vec<String> = descendants(&doc.select("#r"))
            .iter()
            .filter_map(id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_block_text_breaks_between_blocks() {
        let doc = parse(
            r#"<div id="r"><p>first <b>bold</b></p><p>second<br>third</p><script>x()</script></div>"#,
        );
        let text = block_text(&doc.select("#r"));
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines, vec!["first bold", "second", "third"]);
        assert!(!text.contains("x()"));
    }
}
