//! Backend gateway trait.
//!
//! Defines the interface to the remote backend collaborator that owns
//! durable history, generation, resource lookup, feedback, notifications,
//! and the two voice endpoints. The client core never talks HTTP directly;
//! it goes through this trait, which decouples it from the wire (and makes
//! every component testable against a mock).

use crate::entry::MediaKind;
use crate::error::Result;
use crate::feedback::FeedbackMark;
use crate::history::ChatHistory;
use crate::notification::Notification;
use crate::personalization::Personalization;
use crate::session::SessionSummary;
use async_trait::async_trait;

/// A file the student attached to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Everything the generation endpoint needs to produce a reply.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub session_id: String,
    pub user_id: String,
    pub text: String,
    pub media_kind: MediaKind,
    pub attachment_label: String,
    pub attachment: Option<AttachmentUpload>,
}

/// A generated reply: the text plus the context references and related
/// files the backend retrieved while answering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateReply {
    pub response_text: String,
    pub context_block: Vec<String>,
    pub related_files: Vec<String>,
}

/// Parameters for the post-reveal recommendation lookup.
#[derive(Debug, Clone)]
pub struct ResourceRequest {
    /// The user text that produced the reply.
    pub query_text: String,
    /// The full revealed reply text.
    pub response_text: String,
    pub session_id: String,
}

/// Recommended external resources for a revealed reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceBundle {
    pub youtube_videos: Vec<String>,
    pub web_articles: Vec<String>,
}

impl ResourceBundle {
    pub fn is_empty(&self) -> bool {
        self.youtube_videos.is_empty() && self.web_articles.is_empty()
    }
}

/// An explicit feedback submission for one bot reply.
#[derive(Debug, Clone)]
pub struct FeedbackSubmission {
    /// The reply text the feedback is about.
    pub text: String,
    pub mark: FeedbackMark,
    pub elaboration: String,
    /// The user question that produced the reply.
    pub user_query: String,
    pub user_id: String,
}

/// An update to a session's personalization record.
#[derive(Debug, Clone)]
pub struct PersonalizationUpdate {
    pub session_id: String,
    pub user_id: String,
    pub personalization: Personalization,
}

/// An abstract gateway to the backend collaborator.
///
/// Every call is independently fallible; no call is retried. Implementations
/// must map a rejected request or non-success status to
/// [`SageError::Network`](crate::SageError::Network).
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// Generates a reply to a user message, with an optional file attachment.
    async fn generate_reply(&self, request: GenerateRequest) -> Result<GenerateReply>;

    /// Loads the durable history for a session, oldest record first.
    async fn load_history(&self, session_id: &str) -> Result<ChatHistory>;

    /// Lists the user's sessions, most recently active first.
    async fn list_sessions(&self, user_id: &str) -> Result<Vec<SessionSummary>>;

    /// Lists every known session id (for collision-checked id generation).
    async fn list_session_ids(&self) -> Result<Vec<String>>;

    /// Creates or updates a session's personalization record.
    async fn save_personalization(&self, update: PersonalizationUpdate) -> Result<()>;

    /// Loads a session's personalization record.
    async fn load_personalization(&self, session_id: &str) -> Result<Personalization>;

    /// Deletes a session and its durable history.
    async fn delete_session(&self, session_id: &str) -> Result<()>;

    /// Looks up recommended videos and articles for a revealed reply.
    async fn fetch_resources(&self, request: ResourceRequest) -> Result<ResourceBundle>;

    /// Submits explicit feedback for a reply.
    async fn submit_feedback(&self, submission: FeedbackSubmission) -> Result<()>;

    /// Lists the user's mentor notifications.
    async fn list_notifications(&self, user_id: &str) -> Result<Vec<Notification>>;

    /// Marks one notification as viewed.
    async fn mark_notification_viewed(&self, notification_id: &str) -> Result<()>;

    /// Transcribes a recorded voice note to text.
    async fn transcribe_audio(&self, file_name: &str, audio: Vec<u8>) -> Result<String>;

    /// Synthesizes speech for a reply text; returns encoded audio bytes.
    async fn synthesize_speech(&self, text: &str) -> Result<Vec<u8>>;
}
