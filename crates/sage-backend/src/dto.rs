//! Wire DTOs for the backend REST API.
//!
//! The backend's JSON uses its own field spellings (`ChatID`, `Chat_title`,
//! camelCase resource keys, typed history messages). These structs mirror
//! the wire exactly and convert to the domain models at the boundary, so
//! nothing above this crate ever sees a wire spelling.

use sage_core::entry::{MediaKind, NO_ATTACHMENT_LABEL};
use sage_core::gateway::{GenerateReply, ResourceBundle};
use sage_core::history::{ChatHistory, HistoryRecord, RecordOrigin};
use sage_core::notification::Notification;
use sage_core::personalization::Personalization;
use sage_core::session::SessionSummary;
use serde::{Deserialize, Serialize};

// ============================================================================
// Generation
// ============================================================================

/// Response body of `POST /run-model`.
#[derive(Debug, Deserialize)]
pub struct RunModelResponse {
    pub response: String,
    #[serde(default)]
    pub context: Vec<String>,
    #[serde(default)]
    pub files: Vec<String>,
    /// Server-side processing time; informational only.
    #[serde(default)]
    pub response_time: Option<String>,
}

impl From<RunModelResponse> for GenerateReply {
    fn from(dto: RunModelResponse) -> Self {
        GenerateReply {
            response_text: dto.response,
            context_block: dto.context,
            related_files: dto.files,
        }
    }
}

// ============================================================================
// History
// ============================================================================

/// One message of `GET /get-chat`, tagged the way the backend serializes its
/// message log ("HumanMessage" / "AIMessage").
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum HistoryMessageDto {
    HumanMessage {
        content: String,
        #[serde(rename = "mediaType")]
        media_type: Option<String>,
        #[serde(rename = "fileName")]
        file_name: Option<String>,
    },
    AIMessage {
        content: String,
        context: Option<Vec<String>>,
        files: Option<Vec<String>>,
    },
}

impl From<HistoryMessageDto> for HistoryRecord {
    fn from(dto: HistoryMessageDto) -> Self {
        match dto {
            HistoryMessageDto::HumanMessage {
                content,
                media_type,
                file_name,
            } => HistoryRecord {
                origin: RecordOrigin::Human,
                content,
                // Unknown or absent media kinds degrade to plain text.
                media_kind: media_type
                    .as_deref()
                    .and_then(|kind| kind.parse().ok())
                    .unwrap_or(MediaKind::Text),
                attachment_label: file_name.unwrap_or_else(|| NO_ATTACHMENT_LABEL.to_string()),
                context: Vec::new(),
                related_files: Vec::new(),
            },
            HistoryMessageDto::AIMessage {
                content,
                context,
                files,
            } => HistoryRecord {
                origin: RecordOrigin::Machine,
                content,
                media_kind: MediaKind::Text,
                attachment_label: NO_ATTACHMENT_LABEL.to_string(),
                context: context.unwrap_or_default(),
                related_files: files.unwrap_or_default(),
            },
        }
    }
}

/// Response body of `GET /get-chat`.
#[derive(Debug, Deserialize)]
pub struct GetChatResponse {
    #[serde(default)]
    pub messages: Vec<HistoryMessageDto>,
    #[serde(default)]
    pub summary: String,
}

impl From<GetChatResponse> for ChatHistory {
    fn from(dto: GetChatResponse) -> Self {
        ChatHistory {
            records: dto.messages.into_iter().map(Into::into).collect(),
            summary: dto.summary,
        }
    }
}

// ============================================================================
// Sessions
// ============================================================================

/// One element of `GET /get-past-chats`.
#[derive(Debug, Deserialize)]
pub struct PastChatDto {
    #[serde(rename = "ChatID")]
    pub chat_id: String,
    #[serde(rename = "Chat_title")]
    pub chat_title: Option<String>,
    #[serde(rename = "Timestamp")]
    pub timestamp: Option<String>,
}

impl From<PastChatDto> for SessionSummary {
    fn from(dto: PastChatDto) -> Self {
        SessionSummary {
            id: dto.chat_id,
            title: dto.chat_title.unwrap_or_default(),
            last_active: dto.timestamp,
        }
    }
}

/// Request body of `POST /delete-chat`.
#[derive(Debug, Serialize)]
pub struct DeleteChatRequest {
    pub chat_id: String,
}

// ============================================================================
// Personalization
// ============================================================================

/// Request body of `POST /update-personalization`.
#[derive(Debug, Serialize)]
pub struct PersonalizationDto {
    #[serde(rename = "ChatID")]
    pub chat_id: String,
    #[serde(rename = "UserID")]
    pub user_id: String,
    pub chat_title: String,
    pub learning_style: String,
    pub communication_format: String,
    pub tone_style: String,
    pub reasoning_framework: String,
}

impl PersonalizationDto {
    pub fn new(chat_id: String, user_id: String, p: &Personalization) -> Self {
        Self {
            chat_id,
            user_id,
            chat_title: p.chat_title.clone(),
            learning_style: p.learning_style.to_string(),
            communication_format: p.communication_format.to_string(),
            tone_style: p.tone_style.to_string(),
            reasoning_framework: p.reasoning_framework.to_string(),
        }
    }
}

/// Response body of `GET /get-personalization`. Every field may be absent or
/// empty for a session the backend has not titled yet; unknown option values
/// degrade to the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct GetPersonalizationResponse {
    #[serde(default)]
    pub chat_title: Option<String>,
    #[serde(default)]
    pub learning_style: Option<String>,
    #[serde(default)]
    pub communication_format: Option<String>,
    #[serde(default)]
    pub tone_style: Option<String>,
    #[serde(default)]
    pub reasoning_framework: Option<String>,
}

impl From<GetPersonalizationResponse> for Personalization {
    fn from(dto: GetPersonalizationResponse) -> Self {
        Personalization {
            chat_title: dto.chat_title.unwrap_or_default(),
            learning_style: parse_or_default(dto.learning_style),
            communication_format: parse_or_default(dto.communication_format),
            tone_style: parse_or_default(dto.tone_style),
            reasoning_framework: parse_or_default(dto.reasoning_framework),
        }
    }
}

fn parse_or_default<T>(value: Option<String>) -> T
where
    T: std::str::FromStr + Default,
{
    value
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

// ============================================================================
// Resources
// ============================================================================

/// Request body of `POST /fetch-resources`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResourcesRequest {
    pub query_text: String,
    pub response_text: String,
    pub session_id: String,
}

/// Response body of `POST /fetch-resources`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResourcesResponse {
    #[serde(default)]
    pub youtube_videos: Vec<String>,
    #[serde(default)]
    pub web_articles: Vec<String>,
}

impl From<FetchResourcesResponse> for ResourceBundle {
    fn from(dto: FetchResourcesResponse) -> Self {
        ResourceBundle {
            youtube_videos: dto.youtube_videos,
            web_articles: dto.web_articles,
        }
    }
}

// ============================================================================
// Feedback
// ============================================================================

/// Request body of `POST /feedback`.
#[derive(Debug, Serialize)]
pub struct FeedbackDto {
    pub text: String,
    /// "up" or "down".
    pub feedback: String,
    #[serde(rename = "feedbackText")]
    pub feedback_text: String,
    #[serde(rename = "userText")]
    pub user_text: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

// ============================================================================
// Notifications
// ============================================================================

/// A notification id as the backend sends it: numeric for database-backed
/// rows, string otherwise. The domain treats ids as opaque strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Num(i64),
    Str(String),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Num(n) => n.to_string(),
            WireId::Str(s) => s,
        }
    }
}

/// One element of `GET /get-notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationDto {
    pub id: WireId,
    pub query: String,
    #[serde(rename = "mentorResponse")]
    pub mentor_response: String,
    #[serde(rename = "mentorId")]
    pub mentor_id: WireId,
    /// 0/1 on the wire.
    #[serde(default)]
    pub viewed: u8,
}

impl From<NotificationDto> for Notification {
    fn from(dto: NotificationDto) -> Self {
        Notification {
            id: dto.id.into(),
            query: dto.query,
            mentor_response: dto.mentor_response,
            mentor_id: dto.mentor_id.into(),
            viewed: dto.viewed != 0,
        }
    }
}

/// Request body of `POST /mark-notification-viewed`.
#[derive(Debug, Serialize)]
pub struct MarkViewedRequest {
    pub id: String,
}

// ============================================================================
// Voice
// ============================================================================

/// Response body of `POST /transcribe-audio`.
#[derive(Debug, Deserialize)]
pub struct TranscriptionResponse {
    pub transcription: String,
}

/// Request body of `POST /text-to-speech`.
#[derive(Debug, Serialize)]
pub struct TextToSpeechRequest {
    pub text: String,
}
