//! Role Classifier
//!
//! Sums four independent DOM signal tiers into a signed score and maps it to
//! a tri-state label. Positive means assistant, negative means user. Weak or
//! contradictory evidence stays `uncertain`, and callers do not mount an
//! action control on an uncertain element unless told to.
//!
//! | Tier | User | Assistant |
//! |------|------|-----------|
//! | Nearby avatar | −2 | +2 |
//! | Role markers | −2 | +2 |
//! | DOM path vocabulary | −1 | +1 |
//! | Ancestor vocabulary | −1 | +1 |
//!
//! [`classify_text`] is a separate content-vocabulary verdict for regions
//! the DOM tiers cannot decide.

use std::fmt;

use dom_query::Selection;
use serde::Serialize;
use tracing::trace;

use crate::features::{extract_features, FeatureBundle, RoleSignal};
use crate::patterns::{
    AI_ROLE, AI_TEXT, ENDS_WITH_QUESTION, INTERROGATIVE, LIST_LINE, USER_ROLE, USER_TEXT,
};
use crate::selector::utils::contains_any;
use crate::sites::SiteProfile;
use crate::Options;

const AVATAR_WEIGHT: f64 = 2.0;
const MARKER_WEIGHT: f64 = 2.0;
const PATH_WEIGHT: f64 = 1.0;
const ANCESTOR_WEIGHT: f64 = 1.0;

/// Default boundary between a decided and an `uncertain` score.
pub const UNCERTAIN_THRESHOLD: f64 = 0.5;

/// Authorship label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleLabel {
    /// Assistant-authored reply.
    Ai,
    /// User-authored message.
    User,
    /// Not enough evidence either way.
    Uncertain,
}

impl fmt::Display for RoleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ai => "ai",
            Self::User => "user",
            Self::Uncertain => "uncertain",
        })
    }
}

/// Outcome of one classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationVerdict {
    /// Final label.
    pub label: RoleLabel,
    /// Signed score; positive leans assistant.
    pub score: f64,
    /// Tags naming each signal that fired, in tier order.
    pub reasons: Vec<String>,
}

impl ClassificationVerdict {
    fn from_score(score: f64, reasons: Vec<String>, threshold: f64) -> Self {
        Self {
            label: label_with_threshold(score, threshold),
            score,
            reasons,
        }
    }

    /// Whether the label is [`RoleLabel::Ai`].
    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.label == RoleLabel::Ai
    }

    /// Add a content verdict to this DOM verdict and relabel the sum.
    #[must_use]
    pub fn combined_with(mut self, content: ClassificationVerdict, threshold: f64) -> Self {
        self.score += content.score;
        self.reasons.extend(content.reasons);
        self.label = label_with_threshold(self.score, threshold);
        self
    }
}

/// Map a score to a label with the default threshold.
///
/// ```rust
/// use ai_reply_extract::classifier::{label_for_score, RoleLabel};
///
/// assert_eq!(label_for_score(0.5), RoleLabel::Uncertain);
/// assert_eq!(label_for_score(0.50001), RoleLabel::Ai);
/// assert_eq!(label_for_score(-0.50001), RoleLabel::User);
/// ```
#[must_use]
pub fn label_for_score(score: f64) -> RoleLabel {
    label_with_threshold(score, UNCERTAIN_THRESHOLD)
}

/// Map a score to a label: above `threshold` is ai, below `-threshold` is
/// user, anything else (including NaN) is uncertain.
#[must_use]
pub fn label_with_threshold(score: f64, threshold: f64) -> RoleLabel {
    if score > threshold {
        RoleLabel::Ai
    } else if score < -threshold {
        RoleLabel::User
    } else {
        RoleLabel::Uncertain
    }
}

/// Classify an element with default options.
#[must_use]
pub fn classify(node: &Selection, profile: &SiteProfile) -> ClassificationVerdict {
    classify_with_options(node, profile, &Options::default())
}

/// Classify an element.
///
/// A pure function of the element's DOM state and the profile: the same
/// snapshot always yields the same verdict.
#[must_use]
pub fn classify_with_options(
    node: &Selection,
    profile: &SiteProfile,
    options: &Options,
) -> ClassificationVerdict {
    let features = extract_features(node, profile, options);
    let verdict = score_features(&features, options.uncertain_threshold);
    trace!(
        path = %features.dom_path_string(),
        label = %verdict.label,
        score = verdict.score,
        reasons = ?verdict.reasons,
        "classified element"
    );
    verdict
}

/// Score an already extracted feature bundle.
#[must_use]
pub fn score_features(features: &FeatureBundle, threshold: f64) -> ClassificationVerdict {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    match features.avatar_signal {
        RoleSignal::User => {
            score -= AVATAR_WEIGHT;
            reasons.push("avatar:user".to_string());
        }
        RoleSignal::Ai => {
            score += AVATAR_WEIGHT;
            reasons.push("avatar:ai".to_string());
        }
        RoleSignal::None => {}
    }

    if let Some(marker) = features.role_markers.iter().find(|m| USER_ROLE.is_match(m)) {
        score -= MARKER_WEIGHT;
        reasons.push(format!("marker:user({marker})"));
    } else if let Some(marker) = features.role_markers.iter().find(|m| AI_ROLE.is_match(m)) {
        score += MARKER_WEIGHT;
        reasons.push(format!("marker:ai({marker})"));
    }

    let path = features.dom_path_string();
    if USER_ROLE.is_match(&path) {
        score -= PATH_WEIGHT;
        reasons.push("path:user".to_string());
    } else if AI_ROLE.is_match(&path) {
        score += PATH_WEIGHT;
        reasons.push("path:ai".to_string());
    }

    if features.ancestor_features.iter().any(|a| a.has_user_vocabulary) {
        score -= ANCESTOR_WEIGHT;
        reasons.push("ancestor:user".to_string());
    } else if features.ancestor_features.iter().any(|a| a.has_ai_vocabulary) {
        score += ANCESTOR_WEIGHT;
        reasons.push("ancestor:ai".to_string());
    }

    ClassificationVerdict::from_score(score, reasons, threshold)
}

/// Content-vocabulary verdict for a piece of text.
///
/// Short question-shaped text reads as a prompt; answer phrasing, list
/// structure and prose length read as a reply.
///
/// ```rust
/// use ai_reply_extract::classifier::{classify_text, RoleLabel};
/// use ai_reply_extract::sites::SiteRegistry;
/// use ai_reply_extract::Options;
///
/// let registry = SiteRegistry::builtin();
/// let profile = registry.resolve("chat.deepseek.com").unwrap();
/// let verdict = classify_text("怎么办？", profile, &Options::default());
/// assert_eq!(verdict.label, RoleLabel::User);
/// ```
#[must_use]
pub fn classify_text(text: &str, profile: &SiteProfile, options: &Options) -> ClassificationVerdict {
    let text = text.trim();
    let len = text.chars().count();
    let features = &profile.role_features;
    let mut score = 0.0;
    let mut reasons = Vec::new();

    if len == 0 {
        return ClassificationVerdict::from_score(score, reasons, options.uncertain_threshold);
    }

    if len <= options.short_question_len && ENDS_WITH_QUESTION.is_match(text) {
        score -= 1.0;
        reasons.push("text:short-question".to_string());
        if INTERROGATIVE.is_match(text) {
            score -= 0.5;
            reasons.push("text:interrogative".to_string());
        }
    }

    let has_user_vocabulary =
        USER_TEXT.is_match(text) || contains_any(text, &features.user_keywords);
    if has_user_vocabulary {
        score -= 1.0;
        reasons.push("text:user-vocabulary".to_string());
    } else if AI_TEXT.is_match(text) || contains_any(text, &features.ai_keywords) {
        score += 1.0;
        reasons.push("text:ai-vocabulary".to_string());
    }

    let paragraphs = text.split("\n\n").filter(|p| !p.trim().is_empty()).count();
    if LIST_LINE.is_match(text) || paragraphs >= 2 {
        score += 0.5;
        reasons.push("text:structured".to_string());
    }

    if len > options.structural_min_len {
        score += 0.5;
        reasons.push("text:prose-length".to_string());
    }

    ClassificationVerdict::from_score(score, reasons, options.uncertain_threshold)
}
