//! Configuration options for locating and cleaning AI replies.
//!
//! The `Options` struct holds the fixed bounds and thresholds of the
//! heuristics. Defaults match the values the site profiles were tuned with;
//! most callers never change them.

/// Configuration options for classification, ranking and sanitizing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use ai_reply_extract::Options;
///
/// let options = Options {
///     top_k: 8,
///     inject_uncertain: true,
///     ..Options::default()
/// };
/// assert_eq!(options.min_candidate_len, 20);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum trimmed text length (chars) for an element to be ranked.
    ///
    /// Default: `20`
    pub min_candidate_len: usize,

    /// Lower bound of the "prose reply" length band, and the floor used for
    /// structural re-checks.
    ///
    /// Default: `50`
    pub structural_min_len: usize,

    /// Upper bound of the "prose reply" length band.
    ///
    /// Default: `800`
    pub prose_max_len: usize,

    /// Quality gate for candidate selectors: a selector match only counts as
    /// a response region when its trimmed text has at least this many chars.
    ///
    /// Default: `20`
    pub min_region_len: usize,

    /// Number of ranked candidates kept per region for diagnostics and
    /// manual override.
    ///
    /// Default: `5`
    pub top_k: usize,

    /// Scores with an absolute value at or below this are `uncertain`.
    ///
    /// Default: `0.5`
    pub uncertain_threshold: f64,

    /// How many ancestor levels the avatar search climbs.
    ///
    /// Default: `4`
    pub avatar_search_depth: usize,

    /// How many ancestors contribute feature flags.
    ///
    /// Default: `3`
    pub ancestor_feature_depth: usize,

    /// How many ancestors appear in a DOM path.
    ///
    /// Default: `6`
    pub dom_path_depth: usize,

    /// Lines shorter than this (chars) may be recommended questions.
    ///
    /// Default: `60`
    pub short_question_len: usize,

    /// Consult the reply text when the DOM signals are inconclusive.
    ///
    /// Default: `true`
    pub content_fallback: bool,

    /// Mount action controls on regions whose final verdict is `uncertain`.
    ///
    /// Default: `false`
    pub inject_uncertain: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_candidate_len: 20,
            structural_min_len: 50,
            prose_max_len: 800,
            min_region_len: 20,
            top_k: 5,
            uncertain_threshold: 0.5,
            avatar_search_depth: 4,
            ancestor_feature_depth: 3,
            dom_path_depth: 6,
            short_question_len: 60,
            content_fallback: true,
            inject_uncertain: false,
        }
    }
}
