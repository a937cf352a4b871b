//! Site Registry
//!
//! Static per-host configuration: which selectors find reply regions, which
//! regions are thinking/tool-call noise, and which vocabulary tells the two
//! chat roles apart. Profiles are built once and looked up by exact host.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dom;
use crate::error::{Error, Result};

mod builtin;

/// Vocabulary used to tell a user turn from an assistant turn on one site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleFeatures {
    /// Phrases typical of the user's prompt text.
    pub user_keywords: Vec<String>,
    /// Phrases typical of the assistant's answer text.
    pub ai_keywords: Vec<String>,
    /// Headers of reasoning/"thinking" blocks.
    pub thinking_keywords: Vec<String>,
    /// Class fragments of assistant reply containers.
    pub container_class_hints: Vec<String>,
    /// Class fragments of user message containers.
    pub user_class_hints: Vec<String>,
}

/// One supported chat site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Exact host, e.g. `chat.deepseek.com`.
    pub host: String,

    /// Other exact hosts serving the same app.
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Human label.
    pub display_name: String,

    /// Reply selectors, most specific first. The first one yielding a
    /// plausible match wins.
    pub candidate_selectors: Vec<String>,

    /// Selectors from `candidate_selectors` known to capture whole turns.
    /// Regions found through them are narrowed by the candidate scorer.
    #[serde(default)]
    pub generic_selectors: Vec<String>,

    /// Thinking / tool-call regions. Anything inside is never a reply.
    #[serde(default)]
    pub exclude_selectors: Vec<String>,

    /// Role vocabulary.
    #[serde(default)]
    pub role_features: RoleFeatures,

    /// Where the action button goes, relative to a region.
    #[serde(default)]
    pub button_anchor_selector: Option<String>,
}

impl SiteProfile {
    /// Whether `selector` is flagged as over-matching.
    #[must_use]
    pub fn is_generic(&self, selector: &str) -> bool {
        self.generic_selectors.iter().any(|s| s == selector)
    }

    /// Every host this profile answers to.
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.host.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Reject profiles whose selectors do not parse.
    pub fn validate(&self) -> Result<()> {
        if self.candidate_selectors.is_empty() {
            return Err(Error::Config(format!(
                "profile `{}` has no candidate selectors",
                self.host
            )));
        }
        let all = self
            .candidate_selectors
            .iter()
            .chain(&self.generic_selectors)
            .chain(&self.exclude_selectors)
            .chain(self.button_anchor_selector.as_ref());
        for selector in all {
            if !dom::is_valid_selector(selector) {
                return Err(Error::InvalidSelector {
                    selector: selector.clone(),
                    reason: format!("not valid CSS in profile `{}`", self.host),
                });
            }
        }
        Ok(())
    }
}

/// Host → profile mapping, assembled once at startup.
#[derive(Debug, Clone, Default)]
pub struct SiteRegistry {
    profiles: Vec<SiteProfile>,
    by_host: HashMap<String, usize>,
}

impl SiteRegistry {
    /// Registry of the built-in chat sites (ChatGPT, DeepSeek, Kimi, Doubao).
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for profile in builtin::profiles() {
            registry.insert(profile);
        }
        registry
    }

    /// Build a registry from validated profiles.
    pub fn from_profiles(profiles: Vec<SiteProfile>) -> Result<Self> {
        let mut registry = Self::default();
        for profile in profiles {
            profile.validate()?;
            registry.insert(profile);
        }
        Ok(registry)
    }

    /// Build a registry from a JSON array of profiles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ai_reply_extract::sites::SiteRegistry;
    ///
    /// let json = r#"[{
    ///     "host": "chat.example.com",
    ///     "display_name": "Example",
    ///     "candidate_selectors": [".answer"]
    /// }]"#;
    /// let registry = SiteRegistry::from_json(json)?;
    /// assert!(registry.resolve("chat.example.com").is_some());
    /// # Ok::<(), ai_reply_extract::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let profiles: Vec<SiteProfile> =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        Self::from_profiles(profiles)
    }

    /// Built-in registry with JSON profiles layered on top.
    ///
    /// A JSON profile replaces a built-in one with the same host.
    pub fn with_overrides_json(json: &str) -> Result<Self> {
        let overrides = Self::from_json(json)?;
        let mut registry = Self::builtin();
        for profile in overrides.profiles {
            registry.insert(profile);
        }
        Ok(registry)
    }

    /// Exact host lookup.
    ///
    /// Hosts are compared case-insensitively with surrounding whitespace and
    /// a trailing dot ignored; there is no wildcard or suffix matching.
    #[must_use]
    pub fn resolve(&self, host: &str) -> Option<&SiteProfile> {
        let key = normalize_host(host);
        let found = self.by_host.get(&key).and_then(|&i| self.profiles.get(i));
        debug!(host = %key, supported = found.is_some(), "resolved site profile");
        found
    }

    /// Resolve the profile for a full page URL.
    pub fn resolve_url(&self, page_url: &str) -> Result<&SiteProfile> {
        let parsed =
            url::Url::parse(page_url).map_err(|e| Error::InvalidUrl(format!("{page_url}: {e}")))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| Error::InvalidUrl(format!("{page_url}: no host")))?;
        self.resolve(host)
            .ok_or_else(|| Error::UnsupportedHost(host.to_string()))
    }

    /// All registered profiles.
    #[must_use]
    pub fn profiles(&self) -> &[SiteProfile] {
        &self.profiles
    }

    /// Number of registered profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profile is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn insert(&mut self, profile: SiteProfile) {
        let existing = self.by_host.get(&normalize_host(&profile.host)).copied();
        let index = if let Some(i) = existing {
            // drop hosts owned by the profile being replaced
            self.by_host.retain(|_, v| *v != i);
            self.profiles[i] = profile;
            i
        } else {
            self.profiles.push(profile);
            self.profiles.len() - 1
        };
        let hosts: Vec<String> = self.profiles[index].hosts().map(normalize_host).collect();
        for host in hosts {
            self.by_host.insert(host, index);
        }
    }
}

fn normalize_host(host: &str) -> String {
    host.trim().trim_end_matches('.').to_ascii_lowercase()
}
