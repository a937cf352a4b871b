//! # ai-reply-extract
//!
//! Locate AI assistant replies in chat web pages and extract clean,
//! copy-ready text.
//!
//! Given an HTML snapshot of a ChatGPT, DeepSeek, Kimi or Doubao
//! conversation, this library finds the reply regions, decides which of
//! them the assistant wrote, picks where a copy button belongs and strips
//! interface noise (button labels, "AI-generated" disclaimers, suggested
//! follow-up questions) from the text.
//!
//! ## Quick Start
//!
//! ```rust
//! use ai_reply_extract::{locate, SiteRegistry};
//!
//! let html = r#"<html><body>
//!   <div class="ds-markdown ds-markdown--block">
//!     <p>强平是指保证金不足时，交易所强制平掉仓位的机制。</p>
//!   </div>
//! </body></html>"#;
//!
//! let registry = SiteRegistry::builtin();
//! let result = locate(html, "chat.deepseek.com", &registry)?;
//! println!("{}", result.regions[0].text);
//! # Ok::<(), ai_reply_extract::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Site Registry**: per-host selectors, exclude regions and vocabulary
//! - **Role Classification**: weighted DOM signals mapped to ai/user/uncertain
//! - **Candidate Ranking**: purity scoring to narrow over-matching selectors
//! - **Sanitizing**: idempotent removal of UI chrome from copied text
//! - **Export**: clipboard sink trait and timestamped export documents
//!
//! The library emits `tracing` events and never installs a subscriber.

mod error;
mod options;
mod patterns;
mod result;

/// Read-only DOM helpers over `dom_query`.
pub mod dom;

/// Selector rules, exclude regions and region/anchor resolution.
pub mod selector;

/// Per-host site profiles.
pub mod sites;

/// Feature bundles for role classification.
pub mod features;

/// Role classification of elements and text.
pub mod classifier;

/// Purity ranking of candidate elements.
pub mod scoring;

/// Cleanup of reply text.
pub mod sanitize;

/// The locate pipeline.
pub mod locate;

/// Clipboard and file export.
pub mod export;

/// Optional pipeline observers.
pub mod diagnostics;

// Public API - re-exports
pub use classifier::{ClassificationVerdict, RoleLabel};
pub use error::{Error, ExportError, Result};
pub use locate::{locate, locate_document, locate_url, locate_with_options};
pub use options::Options;
pub use result::{CandidateSummary, LocateResult, ResponseRegion};
pub use sanitize::sanitize;
pub use sites::{RoleFeatures, SiteProfile, SiteRegistry};
