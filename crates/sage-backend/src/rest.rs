//! REST implementation of the backend gateway.
//!
//! Talks to the tutoring backend over HTTP with a shared `reqwest` client.
//! Every method is one request: no retries, no caching; failures map to
//! [`SageError::Network`] and leave the caller to decide what to surface.

use crate::dto::{
    DeleteChatRequest, FeedbackDto, FetchResourcesRequest, FetchResourcesResponse,
    GetChatResponse, GetPersonalizationResponse, MarkViewedRequest, NotificationDto, PastChatDto,
    PersonalizationDto, RunModelResponse, TextToSpeechRequest, TranscriptionResponse,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use sage_core::error::{Result, SageError};
use sage_core::gateway::{
    BackendGateway, FeedbackSubmission, GenerateReply, GenerateRequest, PersonalizationUpdate,
    ResourceBundle, ResourceRequest,
};
use sage_core::history::ChatHistory;
use sage_core::notification::Notification;
use sage_core::personalization::Personalization;
use sage_core::session::SessionSummary;
use serde::de::DeserializeOwned;

/// Gateway to the tutoring backend over its REST API.
#[derive(Clone)]
pub struct RestGateway {
    client: Client,
    base_url: String,
}

impl RestGateway {
    /// Creates a gateway for the backend at `base_url`
    /// (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a gateway with a caller-configured client (timeouts, proxies).
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fails non-success statuses as network errors, carrying whatever
    /// detail the body offers.
    async fn check(path: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response.text().await.unwrap_or_default();
        Err(SageError::network(format!(
            "{path} returned {status}: {detail}"
        )))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| SageError::network(e.to_string()))?;
        Self::decode(path, Self::check(path, response).await?).await
    }

    async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| SageError::network(e.to_string()))?;
        Self::check(path, response).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
        response.json().await.map_err(|e| SageError::Serialization {
            format: "JSON".to_string(),
            message: format!("{path}: {e}"),
        })
    }
}

#[async_trait]
impl BackendGateway for RestGateway {
    async fn generate_reply(&self, request: GenerateRequest) -> Result<GenerateReply> {
        let path = "/run-model";
        let mut form = Form::new()
            .text("ChatID", request.session_id)
            .text("UserID", request.user_id)
            .text("input_text", request.text)
            .text("mediaType", request.media_kind.to_string())
            .text("fileName", request.attachment_label);
        if let Some(attachment) = request.attachment {
            form = form.part(
                "file",
                Part::bytes(attachment.bytes).file_name(attachment.file_name),
            );
        }

        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .map_err(|e| SageError::network(e.to_string()))?;
        let dto: RunModelResponse = Self::decode(path, Self::check(path, response).await?).await?;
        Ok(dto.into())
    }

    async fn load_history(&self, session_id: &str) -> Result<ChatHistory> {
        let dto: GetChatResponse = self
            .get_json("/get-chat", &[("chat_id", session_id)])
            .await?;
        Ok(dto.into())
    }

    async fn list_sessions(&self, user_id: &str) -> Result<Vec<SessionSummary>> {
        let dtos: Vec<PastChatDto> = self
            .get_json("/get-past-chats", &[("userId", user_id)])
            .await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn list_session_ids(&self) -> Result<Vec<String>> {
        self.get_json("/get-chat-ids", &[]).await
    }

    async fn save_personalization(&self, update: PersonalizationUpdate) -> Result<()> {
        let dto = PersonalizationDto::new(
            update.session_id,
            update.user_id,
            &update.personalization,
        );
        self.post_json("/update-personalization", &dto).await?;
        Ok(())
    }

    async fn load_personalization(&self, session_id: &str) -> Result<Personalization> {
        let dto: GetPersonalizationResponse = self
            .get_json("/get-personalization", &[("chat_id", session_id)])
            .await?;
        Ok(dto.into())
    }

    async fn delete_session(&self, session_id: &str) -> Result<()> {
        let body = DeleteChatRequest {
            chat_id: session_id.to_string(),
        };
        self.post_json("/delete-chat", &body).await?;
        Ok(())
    }

    async fn fetch_resources(&self, request: ResourceRequest) -> Result<ResourceBundle> {
        let path = "/fetch-resources";
        let body = FetchResourcesRequest {
            query_text: request.query_text,
            response_text: request.response_text,
            session_id: request.session_id,
        };
        let response = self.post_json(path, &body).await?;
        let dto: FetchResourcesResponse = Self::decode(path, response).await?;
        Ok(dto.into())
    }

    async fn submit_feedback(&self, submission: FeedbackSubmission) -> Result<()> {
        let body = FeedbackDto {
            text: submission.text,
            feedback: submission.mark.to_string(),
            feedback_text: submission.elaboration,
            user_text: submission.user_query,
            user_id: submission.user_id,
        };
        self.post_json("/feedback", &body).await?;
        Ok(())
    }

    async fn list_notifications(&self, user_id: &str) -> Result<Vec<Notification>> {
        let dtos: Vec<NotificationDto> = self
            .get_json("/get-notifications", &[("userId", user_id)])
            .await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn mark_notification_viewed(&self, notification_id: &str) -> Result<()> {
        let body = MarkViewedRequest {
            id: notification_id.to_string(),
        };
        self.post_json("/mark-notification-viewed", &body).await?;
        Ok(())
    }

    async fn transcribe_audio(&self, file_name: &str, audio: Vec<u8>) -> Result<String> {
        let path = "/transcribe-audio";
        let form = Form::new().part("file", Part::bytes(audio).file_name(file_name.to_string()));
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .map_err(|e| SageError::network(e.to_string()))?;
        let dto: TranscriptionResponse =
            Self::decode(path, Self::check(path, response).await?).await?;
        Ok(dto.transcription)
    }

    async fn synthesize_speech(&self, text: &str) -> Result<Vec<u8>> {
        let path = "/text-to-speech";
        let body = TextToSpeechRequest {
            text: text.to_string(),
        };
        let response = self.post_json(path, &body).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SageError::network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
