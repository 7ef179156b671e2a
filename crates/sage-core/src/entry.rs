//! Chat transcript entry types.
//!
//! This module contains the types that make up one unit of the transcript:
//! the entry itself, its role, its attachment kind, and the supplementary
//! resource blocks attached to assistant replies.

use crate::history::{HistoryRecord, RecordOrigin};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Label recorded for an entry that carries no file attachment.
pub const NO_ATTACHMENT_LABEL: &str = "text";

/// Represents the origin of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryRole {
    /// Message typed (or dictated) by the student.
    User,
    /// Reply generated by the assistant.
    Bot,
}

/// The kind of media a user entry carries as its attachment.
///
/// Bot entries are always `Text`. The wire spelling is camelCase
/// ("text", "document", ..., "voiceNote").
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MediaKind {
    #[default]
    Text,
    Document,
    Image,
    Video,
    Audio,
    VoiceNote,
}

/// Lifecycle state of an entry's reveal.
///
/// Bot entries generated in the current session start at `Created` and are
/// advanced `Created -> Revealing -> Revealed -> ResourcesFetched` by the
/// reveal engine and the follow-up resource fetch. `ResourcesFetched` is
/// terminal. User entries and history-replayed entries are terminal on
/// creation. Feedback and read-aloud controls are eligible from `Revealed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntryPhase {
    Created,
    Revealing,
    Revealed,
    ResourcesFetched,
}

/// One supplementary resource block attached to a bot entry.
///
/// Context references and related files come back with the generated reply;
/// video and article links are fetched separately once the reveal completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum SupplementaryResource {
    /// A source reference from the generation context (e.g. "notes.pdf, Page: 3").
    ContextRef(String),
    /// A related file stored in the backend's material library.
    RelatedFile(String),
    /// A recommended video link.
    VideoLink(String),
    /// A recommended web article link.
    ArticleLink(String),
}

/// A single entry in the chat transcript.
///
/// Entries are append-only and strictly ordered by arrival; the transcript
/// store never edits one in place except to advance its phase and extend its
/// supplementary blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Whether the student or the assistant produced this entry.
    pub role: EntryRole,
    /// The message body. Non-empty for bot entries once created, even though
    /// it is revealed incrementally.
    pub primary_text: String,
    /// Ordered resource blocks attached to the entry.
    pub supplementary: Vec<SupplementaryResource>,
    /// Attachment type for user entries; `Text` for bot entries.
    pub media_kind: MediaKind,
    /// Display name for an attached file, or the `text` sentinel.
    pub attachment_label: String,
    /// True only for bot entries generated in the current interactive
    /// session; history-replayed entries always display at once.
    pub reveal_mode: bool,
    /// The user text that produced a bot entry (None for user entries).
    pub source_query: Option<String>,
    /// Reveal lifecycle state.
    pub phase: EntryPhase,
    /// Arrival timestamp (ISO 8601 format).
    pub created_at: String,
}

impl ChatEntry {
    /// Creates a user entry for a message being sent now.
    pub fn user(text: impl Into<String>, media_kind: MediaKind, attachment_label: impl Into<String>) -> Self {
        Self {
            role: EntryRole::User,
            primary_text: text.into(),
            supplementary: Vec::new(),
            media_kind,
            attachment_label: attachment_label.into(),
            reveal_mode: false,
            source_query: None,
            phase: EntryPhase::Revealed,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Creates a bot entry for a freshly generated reply.
    ///
    /// # Arguments
    ///
    /// * `text` - The full reply text (revealed incrementally when `reveal_mode`)
    /// * `source_query` - The user text that produced this reply
    /// * `supplementary` - Context references and related files returned with
    ///   the reply
    pub fn bot(
        text: impl Into<String>,
        source_query: impl Into<String>,
        supplementary: Vec<SupplementaryResource>,
    ) -> Self {
        Self {
            role: EntryRole::Bot,
            primary_text: text.into(),
            supplementary,
            media_kind: MediaKind::Text,
            attachment_label: NO_ATTACHMENT_LABEL.to_string(),
            reveal_mode: true,
            source_query: Some(source_query.into()),
            phase: EntryPhase::Created,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Rebuilds an entry from a durable history record.
    ///
    /// Human records become user entries; machine records become bot entries
    /// with their stored supplementary blocks attached immediately and no
    /// reveal animation. Both are terminal on creation.
    pub fn from_history(record: &HistoryRecord) -> Self {
        match record.origin {
            RecordOrigin::Human => Self {
                role: EntryRole::User,
                primary_text: record.content.clone(),
                supplementary: Vec::new(),
                media_kind: record.media_kind,
                attachment_label: record.attachment_label.clone(),
                reveal_mode: false,
                source_query: None,
                phase: EntryPhase::Revealed,
                created_at: chrono::Utc::now().to_rfc3339(),
            },
            RecordOrigin::Machine => Self {
                role: EntryRole::Bot,
                primary_text: record.content.clone(),
                supplementary: record.supplementary_blocks(),
                media_kind: MediaKind::Text,
                attachment_label: NO_ATTACHMENT_LABEL.to_string(),
                reveal_mode: false,
                source_query: None,
                phase: EntryPhase::ResourcesFetched,
                created_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }

    /// Whether feedback and read-aloud controls may render for this entry.
    pub fn controls_eligible(&self) -> bool {
        self.role == EntryRole::Bot && self.phase >= EntryPhase::Revealed
    }
}
