//! Feature Extractor
//!
//! Computes the [`FeatureBundle`] the role classifier scores: nearby avatar,
//! explicit role markers, ancestor vocabulary and the DOM path. Every search
//! is bounded (see [`Options`]) so deep conversation trees stay cheap; the
//! result is heuristic, not exhaustive.

use dom_query::Selection;
use serde::Serialize;

use crate::dom;
use crate::patterns::{AI_ROLE, AI_TOKEN, AVATAR_CLASS, USER_ROLE, USER_TOKEN};
use crate::selector;
use crate::selector::utils::{attr, class, contains_any, descriptor, id_class, is_one_of_tags, tag};
use crate::sites::SiteProfile;
use crate::Options;

/// Attributes that state message authorship outright.
pub const ROLE_MARKER_ATTRIBUTES: &[&str] = &[
    "data-role",
    "role",
    "data-author",
    "data-type",
    "data-message-author-role",
];

const AVATAR_TAGS: &[&str] = &["img", "svg", "picture"];

/// Which side of the conversation a signal points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleSignal {
    /// Points to the user.
    User,
    /// Points to the assistant.
    Ai,
    /// No signal.
    None,
}

/// Vocabulary flags of one ancestor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AncestorFeature {
    /// Lowercase tag name.
    pub tag: String,
    /// Raw class attribute.
    pub class: String,
    /// Class/id/test-id carries user vocabulary.
    pub has_user_vocabulary: bool,
    /// Class/id/test-id carries assistant vocabulary.
    pub has_ai_vocabulary: bool,
}

/// Signals gathered around one candidate element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureBundle {
    /// `tag.class` descriptors, root to node.
    pub dom_path: Vec<String>,
    /// Result of the bounded upward avatar search.
    pub avatar_signal: RoleSignal,
    /// Lowercased role-marker values, node first.
    pub role_markers: Vec<String>,
    /// Nearest ancestors first.
    pub ancestor_features: Vec<AncestorFeature>,
}

impl FeatureBundle {
    /// DOM path joined with `" > "`.
    #[must_use]
    pub fn dom_path_string(&self) -> String {
        self.dom_path.join(" > ")
    }
}

/// Compute the feature bundle of `node`.
///
/// Never panics: an empty selection yields an empty bundle.
///
/// # Example
///
/// ```rust
/// use ai_reply_extract::features::{extract_features, RoleSignal};
/// use ai_reply_extract::sites::SiteRegistry;
/// use ai_reply_extract::{dom, Options};
///
/// let doc = dom::parse(r#"<div class="turn"><img class="user-avatar"><p id="m">hi</p></div>"#);
/// let registry = SiteRegistry::builtin();
/// let profile = registry.resolve("chat.deepseek.com").unwrap();
///
/// let bundle = extract_features(&doc.select("#m"), profile, &Options::default());
/// assert_eq!(bundle.avatar_signal, RoleSignal::User);
/// ```
#[must_use]
pub fn extract_features(node: &Selection, profile: &SiteProfile, options: &Options) -> FeatureBundle {
    FeatureBundle {
        dom_path: dom_path(node, options.dom_path_depth),
        avatar_signal: nearby_avatar(node, profile, options.avatar_search_depth),
        role_markers: role_markers(node),
        ancestor_features: ancestor_features(node, profile, options.ancestor_feature_depth),
    }
}

/// Root-to-node descriptors with at most `max_ancestors` ancestors.
#[must_use]
pub fn dom_path(node: &Selection, max_ancestors: usize) -> Vec<String> {
    if !dom::is_element(node) {
        return Vec::new();
    }
    let mut path: Vec<String> = dom::ancestors(node, Some(max_ancestors))
        .iter()
        .rev()
        .map(descriptor)
        .collect();
    path.push(descriptor(node));
    path
}

/// Search the node and up to `max_levels` ancestors for avatar-like
/// descendants.
///
/// The nearest level with a one-sided signal wins. A level holding both a
/// user and an assistant avatar spans several turns, so the search stops
/// there without a verdict.
#[must_use]
pub fn nearby_avatar(node: &Selection, profile: &SiteProfile, max_levels: usize) -> RoleSignal {
    if !dom::is_element(node) {
        return RoleSignal::None;
    }
    let mut scopes = vec![node.clone()];
    scopes.extend(dom::ancestors(node, Some(max_levels)));

    for scope in &scopes {
        let mut saw_user = false;
        let mut saw_ai = false;
        for candidate in selector::query_all(scope, is_avatar_like) {
            match avatar_role(&candidate, profile) {
                RoleSignal::User => saw_user = true,
                RoleSignal::Ai => saw_ai = true,
                RoleSignal::None => {}
            }
        }
        match (saw_user, saw_ai) {
            (true, false) => return RoleSignal::User,
            (false, true) => return RoleSignal::Ai,
            (true, true) => return RoleSignal::None,
            (false, false) => {}
        }
    }
    RoleSignal::None
}

fn is_avatar_like(sel: &Selection) -> bool {
    is_one_of_tags(sel, AVATAR_TAGS) || AVATAR_CLASS.is_match(&class(sel))
}

fn avatar_role(sel: &Selection, profile: &SiteProfile) -> RoleSignal {
    let signature = format!(
        "{} {} {} {}",
        class(sel),
        attr(sel, "alt"),
        attr(sel, "src"),
        attr(sel, "aria-label")
    );
    let features = &profile.role_features;
    if USER_TOKEN.is_match(&signature) || contains_any(&signature, &features.user_class_hints) {
        RoleSignal::User
    } else if AI_TOKEN.is_match(&signature)
        || contains_any(&signature, &features.container_class_hints)
        || contains_any(&signature, &features.ai_keywords)
    {
        RoleSignal::Ai
    } else {
        RoleSignal::None
    }
}

/// Role-marker values on the node, its parent and its grandparent.
#[must_use]
pub fn role_markers(node: &Selection) -> Vec<String> {
    if !dom::is_element(node) {
        return Vec::new();
    }
    let mut window = vec![node.clone()];
    window.extend(dom::ancestors(node, Some(2)));

    let mut markers = Vec::new();
    for element in &window {
        for name in ROLE_MARKER_ATTRIBUTES {
            let value = attr(element, name);
            let value = value.trim();
            if !value.is_empty() {
                markers.push(value.to_lowercase());
            }
        }
    }
    markers
}

/// Vocabulary flags of the nearest `max_depth` ancestors.
#[must_use]
pub fn ancestor_features(
    node: &Selection,
    profile: &SiteProfile,
    max_depth: usize,
) -> Vec<AncestorFeature> {
    let features = &profile.role_features;
    dom::ancestors(node, Some(max_depth))
        .iter()
        .map(|ancestor| {
            let signature = format!("{} {}", id_class(ancestor), attr(ancestor, "data-testid"));
            AncestorFeature {
                tag: tag(ancestor),
                class: class(ancestor),
                has_user_vocabulary: USER_ROLE.is_match(&signature)
                    || contains_any(&signature, &features.user_class_hints),
                has_ai_vocabulary: AI_ROLE.is_match(&signature)
                    || contains_any(&signature, &features.container_class_hints),
            }
        })
        .collect()
}
