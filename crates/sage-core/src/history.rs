//! Durable chat history types.
//!
//! The backend collaborator owns durable history; these types describe the
//! records it returns so the transcript store can replay them. Records are
//! replayed in the order returned (assumed chronological; never re-sorted
//! client-side).

use crate::entry::{MediaKind, SupplementaryResource, NO_ATTACHMENT_LABEL};
use serde::{Deserialize, Serialize};

/// Whether a history record was produced by the student or the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordOrigin {
    Human,
    Machine,
}

/// One record of a session's durable history.
///
/// Human records carry the attachment metadata the student sent with the
/// message; machine records carry the context references and related files
/// that were stored with the generated reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub origin: RecordOrigin,
    pub content: String,
    pub media_kind: MediaKind,
    pub attachment_label: String,
    /// Source references stored with a machine record.
    #[serde(default)]
    pub context: Vec<String>,
    /// Related material files stored with a machine record.
    #[serde(default)]
    pub related_files: Vec<String>,
}

impl HistoryRecord {
    /// Creates a human record.
    pub fn human(
        content: impl Into<String>,
        media_kind: MediaKind,
        attachment_label: impl Into<String>,
    ) -> Self {
        Self {
            origin: RecordOrigin::Human,
            content: content.into(),
            media_kind,
            attachment_label: attachment_label.into(),
            context: Vec::new(),
            related_files: Vec::new(),
        }
    }

    /// Creates a machine record with its stored supplementary metadata.
    pub fn machine(
        content: impl Into<String>,
        context: Vec<String>,
        related_files: Vec<String>,
    ) -> Self {
        Self {
            origin: RecordOrigin::Machine,
            content: content.into(),
            media_kind: MediaKind::Text,
            attachment_label: NO_ATTACHMENT_LABEL.to_string(),
            context,
            related_files,
        }
    }

    /// The stored metadata as ordered supplementary blocks, context first.
    pub fn supplementary_blocks(&self) -> Vec<SupplementaryResource> {
        self.context
            .iter()
            .cloned()
            .map(SupplementaryResource::ContextRef)
            .chain(
                self.related_files
                    .iter()
                    .cloned()
                    .map(SupplementaryResource::RelatedFile),
            )
            .collect()
    }
}

/// A session's durable history: its records plus the rolling summary the
/// backend maintains alongside them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatHistory {
    pub records: Vec<HistoryRecord>,
    #[serde(default)]
    pub summary: String,
}
