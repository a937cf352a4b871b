//! Clipboard and Export
//!
//! The boundary to the host application. The core hands sanitized text to a
//! [`ClipboardSink`]; a failed write comes back as [`Error::Export`] and is
//! never retried here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, ExportError, Result};
use crate::result::{LocateResult, ResponseRegion};

/// Destination for copied text.
pub trait ClipboardSink {
    /// Write `text`, replacing the previous content.
    ///
    /// # Errors
    ///
    /// Whatever the collaborator reports.
    fn write(&mut self, text: &str) -> std::result::Result<(), ExportError>;
}

/// In-memory clipboard for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
    writes: usize,
    reject_with: Option<String>,
}

impl MemoryClipboard {
    /// An empty clipboard that accepts every write.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every write with `reason`.
    #[must_use]
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            reject_with: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Last written text.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of accepted writes.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write(&mut self, text: &str) -> std::result::Result<(), ExportError> {
        if let Some(reason) = &self.reject_with {
            return Err(ExportError::Rejected(reason.clone()));
        }
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Write already sanitized text to `sink`.
///
/// # Errors
///
/// [`ExportError::EmptyText`] for blank text, or the sink's own failure,
/// both wrapped in [`Error::Export`].
pub fn copy_text(text: &str, sink: &mut dyn ClipboardSink) -> Result<()> {
    if text.trim().is_empty() {
        return Err(ExportError::EmptyText.into());
    }
    sink.write(text).map_err(|err| {
        warn!(error = %err, "clipboard write failed");
        Error::Export(err)
    })?;
    debug!(chars = text.chars().count(), "copied");
    Ok(())
}

/// Copy one region's sanitized text.
///
/// # Errors
///
/// See [`copy_text`].
pub fn copy_region(region: &ResponseRegion, sink: &mut dyn ClipboardSink) -> Result<()> {
    copy_text(&region.text, sink)
}

/// Copy the last assistant reply of a page.
///
/// # Errors
///
/// [`Error::NoResponseRegion`] when the page has no assistant reply,
/// otherwise see [`copy_text`].
pub fn copy_latest(result: &LocateResult, sink: &mut dyn ClipboardSink) -> Result<()> {
    let region = result.latest_reply().ok_or(Error::NoResponseRegion)?;
    copy_region(region, sink)
}

/// A reply prepared for saving to a file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDocument {
    /// Host the reply came from.
    pub site: String,
    /// When the snapshot was exported.
    pub captured_at: DateTime<Utc>,
    /// Region index on the page.
    pub region_index: usize,
    /// Sanitized reply text.
    pub text: String,
}

impl ExportDocument {
    /// Export document for `region`, stamped now.
    #[must_use]
    pub fn from_region(site: &str, region: &ResponseRegion) -> Self {
        Self::at(site, region, Utc::now())
    }

    /// Export document for `region` with an explicit timestamp.
    #[must_use]
    pub fn at(site: &str, region: &ResponseRegion, captured_at: DateTime<Utc>) -> Self {
        Self {
            site: site.to_string(),
            captured_at,
            region_index: region.index,
            text: region.text.clone(),
        }
    }

    /// Plain-text rendering: a short header, a blank line, the reply.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        format!(
            "{}\n{}\n\n{}\n",
            self.site,
            self.captured_at.to_rfc3339(),
            self.text
        )
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`ExportError::Serialize`] wrapped in [`Error::Export`].
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| Error::Export(ExportError::Serialize(err.to_string())))
    }

    /// File name such as `chat.deepseek.com-20250101-120000-0.txt`.
    #[must_use]
    pub fn suggested_file_name(&self, extension: &str) -> String {
        let site: String = self
            .site
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();
        format!(
            "{site}-{}-{}.{}",
            self.captured_at.format("%Y%m%d-%H%M%S"),
            self.region_index,
            extension.trim_start_matches('.')
        )
    }
}
