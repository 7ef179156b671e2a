//! The transcript store.
//!
//! Holds the ordered entry sequence for exactly one active session at a time
//! and mediates every mutation. The backend collaborator owns durable
//! history; on session switch the in-memory sequence is discarded and
//! rebuilt from the history endpoint, never merged. Mutations are always a
//! full-sequence replace or an append, so no partially updated transcript is
//! ever observable.

use sage_core::entry::{ChatEntry, EntryPhase, EntryRole, MediaKind, SupplementaryResource, NO_ATTACHMENT_LABEL};
use sage_core::error::{Result, SageError};
use sage_core::gateway::{
    AttachmentUpload, BackendGateway, GenerateRequest, PersonalizationUpdate, ResourceRequest,
};
use sage_core::history::{HistoryRecord, RecordOrigin};
use sage_core::personalization::Personalization;
use sage_core::session::{generate_session_id, SessionSummary};
use std::sync::Arc;
use tracing::warn;

/// Maintains the entry sequence for the open session and every
/// session-level operation around it.
pub struct TranscriptStore {
    gateway: Arc<dyn BackendGateway>,
    user_id: String,
    active_session: Option<String>,
    entries: Vec<ChatEntry>,
    summary: String,
    /// Every session id the backend knows (collision checking).
    known_ids: Vec<String>,
    /// The user's sessions as listed in the sidebar.
    sessions: Vec<SessionSummary>,
}

impl TranscriptStore {
    /// Creates a store for `user_id` over the given gateway. No session is
    /// open until [`open_session`](Self::open_session) or
    /// [`new_session`](Self::new_session) is called.
    pub fn new(gateway: Arc<dyn BackendGateway>, user_id: impl Into<String>) -> Self {
        Self {
            gateway,
            user_id: user_id.into(),
            active_session: None,
            entries: Vec::new(),
            summary: String::new(),
            known_ids: Vec::new(),
            sessions: Vec::new(),
        }
    }

    /// The entries of the open session, in arrival order.
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// The id of the open session, if any.
    pub fn active_session(&self) -> Option<&str> {
        self.active_session.as_deref()
    }

    /// The rolling summary the backend stores alongside the history.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// The user's sessions as of the last refresh.
    pub fn sessions(&self) -> &[SessionSummary] {
        &self.sessions
    }

    /// Reloads the session list and the known-id set.
    ///
    /// A failed read leaves the previous lists untouched (logged, not
    /// surfaced).
    pub async fn refresh_sessions(&mut self) {
        match self.gateway.list_sessions(&self.user_id).await {
            Ok(sessions) => self.sessions = sessions,
            Err(err) => warn!("failed to refresh session list: {err}"),
        }
        match self.gateway.list_session_ids().await {
            Ok(ids) => self.known_ids = ids,
            Err(err) => warn!("failed to refresh known session ids: {err}"),
        }
    }

    /// Opens a session: loads its durable history and replaces the entry
    /// sequence with the replayed records.
    ///
    /// Human records become user entries, machine records bot entries with
    /// their stored supplementary blocks attached immediately; nothing
    /// replayed ever animates. Records are replayed in the order returned.
    /// On a failed load the previous transcript stays untouched.
    pub async fn open_session(&mut self, session_id: &str) -> Result<()> {
        let history = self.gateway.load_history(session_id).await.map_err(|err| {
            warn!("failed to load history for session {session_id}: {err}");
            err
        })?;

        self.active_session = Some(session_id.to_string());
        self.summary = history.summary;
        self.entries = Self::replay(&history.records);
        Ok(())
    }

    /// Rebuilds entries from history records, wiring each machine record's
    /// source query to the closest preceding human record so feedback can
    /// reference the triggering question.
    fn replay(records: &[HistoryRecord]) -> Vec<ChatEntry> {
        let mut entries = Vec::with_capacity(records.len());
        let mut last_query: Option<String> = None;
        for record in records {
            let mut entry = ChatEntry::from_history(record);
            match record.origin {
                RecordOrigin::Human => last_query = Some(record.content.clone()),
                RecordOrigin::Machine => entry.source_query = last_query.clone(),
            }
            entries.push(entry);
        }
        entries
    }

    /// Whether a submission with this text/attachment combination is valid.
    /// The send control should be inert while this is false.
    pub fn can_submit(text: &str, attachment: Option<&AttachmentUpload>) -> bool {
        !text.trim().is_empty() || attachment.is_some()
    }

    /// Sends a user message and appends the generated reply.
    ///
    /// The user entry is appended optimistically before the network round
    /// trip. On success a bot entry with `reveal_mode` set is appended,
    /// carrying the reply text plus the returned context block and
    /// related-file list as its initial supplementary blocks; its index is
    /// returned. On failure the user entry stays (deliberately: the
    /// student's own input is never silently lost) and the error is
    /// returned for the caller to surface.
    pub async fn submit_user_message(
        &mut self,
        text: &str,
        media_kind: MediaKind,
        attachment: Option<AttachmentUpload>,
    ) -> Result<usize> {
        if !Self::can_submit(text, attachment.as_ref()) {
            return Err(SageError::validation(
                "message requires text or an attachment",
            ));
        }
        let session_id = self
            .active_session
            .clone()
            .ok_or_else(|| SageError::validation("no session is open"))?;

        let attachment_label = attachment
            .as_ref()
            .map(|a| a.file_name.clone())
            .unwrap_or_else(|| NO_ATTACHMENT_LABEL.to_string());

        self.entries
            .push(ChatEntry::user(text, media_kind, attachment_label.clone()));

        let reply = self
            .gateway
            .generate_reply(GenerateRequest {
                session_id,
                user_id: self.user_id.clone(),
                text: text.to_string(),
                media_kind,
                attachment_label,
                attachment,
            })
            .await
            .map_err(|err| {
                warn!("reply generation failed: {err}");
                err
            })?;

        let mut supplementary: Vec<SupplementaryResource> = reply
            .context_block
            .into_iter()
            .map(SupplementaryResource::ContextRef)
            .collect();
        supplementary.extend(
            reply
                .related_files
                .into_iter()
                .map(SupplementaryResource::RelatedFile),
        );

        self.entries
            .push(ChatEntry::bot(reply.response_text, text, supplementary));
        Ok(self.entries.len() - 1)
    }

    /// Starts a new session: generates a collision-free id, clears the
    /// transcript, and registers default personalization for the id.
    ///
    /// The local switch happens before the registration call, so a failed
    /// registration leaves the new session open locally (the error is still
    /// returned); the new id is readable via
    /// [`active_session`](Self::active_session) either way.
    pub async fn new_session(&mut self) -> Result<String> {
        match self.gateway.list_session_ids().await {
            Ok(ids) => self.known_ids = ids,
            Err(err) => warn!("failed to refresh known session ids: {err}"),
        }

        let session_id = generate_session_id(&self.known_ids);
        self.known_ids.push(session_id.clone());
        self.active_session = Some(session_id.clone());
        self.entries = Vec::new();
        self.summary = String::new();

        self.gateway
            .save_personalization(PersonalizationUpdate {
                session_id: session_id.clone(),
                user_id: self.user_id.clone(),
                personalization: Personalization::default(),
            })
            .await
            .map_err(|err| {
                warn!("failed to register personalization for {session_id}: {err}");
                err
            })?;

        Ok(session_id)
    }

    /// Deletes a session from the backend; on success forgets it locally
    /// (and clears the transcript if it was the open session).
    pub async fn delete_session(&mut self, session_id: &str) -> Result<()> {
        self.gateway.delete_session(session_id).await?;

        self.known_ids.retain(|id| id != session_id);
        self.sessions.retain(|session| session.id != session_id);
        if self.active_session.as_deref() == Some(session_id) {
            self.active_session = None;
            self.entries = Vec::new();
            self.summary = String::new();
        }
        Ok(())
    }

    /// Marks a bot entry as revealing (the reveal engine has started on it).
    pub fn begin_reveal(&mut self, index: usize) -> Result<()> {
        let entry = self.bot_entry_mut(index)?;
        entry.phase = EntryPhase::Revealing;
        Ok(())
    }

    /// Finishes a bot entry's reveal: marks it revealed (controls become
    /// eligible), then fetches recommended resources for it and extends its
    /// supplementary blocks.
    ///
    /// Must be driven by the entry's single completion event. If the
    /// resource fetch fails the entry stays at `Revealed` with the blocks it
    /// already has.
    pub async fn complete_reveal(&mut self, index: usize) -> Result<()> {
        let session_id = self.active_session.clone().unwrap_or_default();
        let entry = self.bot_entry_mut(index)?;
        entry.phase = EntryPhase::Revealed;

        let request = ResourceRequest {
            query_text: entry.source_query.clone().unwrap_or_default(),
            response_text: entry.primary_text.clone(),
            session_id,
        };
        let bundle = self.gateway.fetch_resources(request).await.map_err(|err| {
            warn!("resource fetch failed: {err}");
            err
        })?;

        let entry = self.bot_entry_mut(index)?;
        entry.supplementary.extend(
            bundle
                .youtube_videos
                .into_iter()
                .map(SupplementaryResource::VideoLink),
        );
        entry.supplementary.extend(
            bundle
                .web_articles
                .into_iter()
                .map(SupplementaryResource::ArticleLink),
        );
        entry.phase = EntryPhase::ResourcesFetched;
        Ok(())
    }

    /// Synthesizes speech for a revealed bot entry.
    pub async fn read_aloud(&self, index: usize) -> Result<Vec<u8>> {
        let entry = self
            .entries
            .get(index)
            .ok_or_else(|| SageError::not_found("entry", index.to_string()))?;
        if !entry.controls_eligible() {
            return Err(SageError::validation(
                "read-aloud is only available once a reply is fully revealed",
            ));
        }
        self.gateway.synthesize_speech(&entry.primary_text).await
    }

    /// Transcribes a recorded voice note so it can be submitted as text.
    pub async fn transcribe_voice_note(&self, file_name: &str, audio: Vec<u8>) -> Result<String> {
        self.gateway.transcribe_audio(file_name, audio).await
    }

    /// Loads the open session's personalization record.
    pub async fn load_personalization(&self) -> Result<Personalization> {
        let session_id = self
            .active_session
            .as_deref()
            .ok_or_else(|| SageError::validation("no session is open"))?;
        self.gateway.load_personalization(session_id).await
    }

    /// Saves a personalization record for the open session.
    pub async fn save_personalization(&self, personalization: Personalization) -> Result<()> {
        let session_id = self
            .active_session
            .clone()
            .ok_or_else(|| SageError::validation("no session is open"))?;
        self.gateway
            .save_personalization(PersonalizationUpdate {
                session_id,
                user_id: self.user_id.clone(),
                personalization,
            })
            .await
    }

    fn bot_entry_mut(&mut self, index: usize) -> Result<&mut ChatEntry> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or_else(|| SageError::not_found("entry", index.to_string()))?;
        if entry.role != EntryRole::Bot {
            return Err(SageError::validation("not a bot entry"));
        }
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sage_core::entry::MediaKind;
    use sage_core::gateway::{FeedbackSubmission, GenerateReply, ResourceBundle};
    use sage_core::history::ChatHistory;
    use sage_core::notification::Notification;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockState {
        histories: HashMap<String, ChatHistory>,
        session_ids: Vec<String>,
        sessions: Vec<SessionSummary>,
        personalization_saves: Vec<PersonalizationUpdate>,
        deleted: Vec<String>,
        fail_generate: bool,
        fail_history: bool,
        fail_resources: bool,
        fail_delete: bool,
    }

    #[derive(Default)]
    struct MockGateway {
        state: Mutex<MockState>,
    }

    impl MockGateway {
        fn with_state(state: MockState) -> Arc<Self> {
            Arc::new(Self {
                state: Mutex::new(state),
            })
        }
    }

    #[async_trait]
    impl BackendGateway for MockGateway {
        async fn generate_reply(&self, request: GenerateRequest) -> Result<GenerateReply> {
            if self.state.lock().unwrap().fail_generate {
                return Err(SageError::network("generation unavailable"));
            }
            Ok(GenerateReply {
                response_text: format!("echo: {}", request.text),
                context_block: vec!["notes.pdf, Page: 2".to_string()],
                related_files: vec!["diagram.png".to_string()],
            })
        }

        async fn load_history(&self, session_id: &str) -> Result<ChatHistory> {
            let state = self.state.lock().unwrap();
            if state.fail_history {
                return Err(SageError::network("history unavailable"));
            }
            Ok(state.histories.get(session_id).cloned().unwrap_or_default())
        }

        async fn list_sessions(&self, _user_id: &str) -> Result<Vec<SessionSummary>> {
            Ok(self.state.lock().unwrap().sessions.clone())
        }

        async fn list_session_ids(&self) -> Result<Vec<String>> {
            Ok(self.state.lock().unwrap().session_ids.clone())
        }

        async fn save_personalization(&self, update: PersonalizationUpdate) -> Result<()> {
            self.state.lock().unwrap().personalization_saves.push(update);
            Ok(())
        }

        async fn load_personalization(&self, _session_id: &str) -> Result<Personalization> {
            Ok(Personalization::default())
        }

        async fn delete_session(&self, session_id: &str) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            if state.fail_delete {
                return Err(SageError::network("delete unavailable"));
            }
            state.deleted.push(session_id.to_string());
            Ok(())
        }

        async fn fetch_resources(&self, _request: ResourceRequest) -> Result<ResourceBundle> {
            if self.state.lock().unwrap().fail_resources {
                return Err(SageError::network("resources unavailable"));
            }
            Ok(ResourceBundle {
                youtube_videos: vec!["https://youtube.com/watch?v=abc".to_string()],
                web_articles: vec!["https://example.com/article".to_string()],
            })
        }

        async fn submit_feedback(&self, _submission: FeedbackSubmission) -> Result<()> {
            Ok(())
        }

        async fn list_notifications(&self, _user_id: &str) -> Result<Vec<Notification>> {
            Ok(Vec::new())
        }

        async fn mark_notification_viewed(&self, _notification_id: &str) -> Result<()> {
            Ok(())
        }

        async fn transcribe_audio(&self, _file_name: &str, _audio: Vec<u8>) -> Result<String> {
            Ok("transcribed".to_string())
        }

        async fn synthesize_speech(&self, text: &str) -> Result<Vec<u8>> {
            Ok(text.as_bytes().to_vec())
        }
    }

    async fn store_with_open_session(gateway: Arc<MockGateway>) -> TranscriptStore {
        let mut store = TranscriptStore::new(gateway, "user-1");
        store.open_session("abc123defg").await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_submit_appends_user_then_bot() {
        let gateway = MockGateway::with_state(MockState::default());
        let mut store = store_with_open_session(gateway).await;

        let bot_index = store
            .submit_user_message("what is a stack?", MediaKind::Text, None)
            .await
            .unwrap();

        assert_eq!(store.entries().len(), 2);
        assert_eq!(bot_index, 1);
        assert_eq!(store.entries()[0].role, EntryRole::User);
        let bot = &store.entries()[1];
        assert_eq!(bot.role, EntryRole::Bot);
        assert!(bot.reveal_mode);
        assert_eq!(bot.primary_text, "echo: what is a stack?");
        assert_eq!(bot.source_query.as_deref(), Some("what is a stack?"));
        assert_eq!(
            bot.supplementary,
            vec![
                SupplementaryResource::ContextRef("notes.pdf, Page: 2".to_string()),
                SupplementaryResource::RelatedFile("diagram.png".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_generation_keeps_user_entry() {
        let gateway = MockGateway::with_state(MockState {
            fail_generate: true,
            ..Default::default()
        });
        let mut store = store_with_open_session(gateway).await;

        let result = store
            .submit_user_message("hello?", MediaKind::Text, None)
            .await;

        assert!(result.unwrap_err().is_network());
        // The optimistic user entry is not rolled back; no bot entry appears.
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].role, EntryRole::User);
    }

    #[tokio::test]
    async fn test_empty_submission_is_a_validation_gap() {
        let gateway = MockGateway::with_state(MockState::default());
        let mut store = store_with_open_session(gateway).await;

        let result = store.submit_user_message("   ", MediaKind::Text, None).await;

        assert!(result.unwrap_err().is_validation());
        assert!(store.entries().is_empty());
    }

    #[tokio::test]
    async fn test_attachment_alone_is_submittable() {
        let gateway = MockGateway::with_state(MockState::default());
        let mut store = store_with_open_session(gateway).await;

        let attachment = AttachmentUpload {
            file_name: "essay.pdf".to_string(),
            bytes: vec![1, 2, 3],
        };
        store
            .submit_user_message("", MediaKind::Document, Some(attachment))
            .await
            .unwrap();

        assert_eq!(store.entries()[0].attachment_label, "essay.pdf");
        assert_eq!(store.entries()[0].media_kind, MediaKind::Document);
    }

    #[tokio::test]
    async fn test_open_session_replaces_entirely() {
        let mut histories = HashMap::new();
        histories.insert(
            "first00001".to_string(),
            ChatHistory {
                records: vec![HistoryRecord::human("old question", MediaKind::Text, "text")],
                summary: "old".to_string(),
            },
        );
        histories.insert(
            "second0002".to_string(),
            ChatHistory {
                records: vec![
                    HistoryRecord::human("new question", MediaKind::Text, "text"),
                    HistoryRecord::machine("new answer", vec![], vec![]),
                ],
                summary: "new".to_string(),
            },
        );
        let gateway = MockGateway::with_state(MockState {
            histories,
            ..Default::default()
        });
        let mut store = TranscriptStore::new(gateway, "user-1");

        store.open_session("first00001").await.unwrap();
        assert_eq!(store.entries().len(), 1);

        store.open_session("second0002").await.unwrap();
        assert_eq!(store.entries().len(), 2);
        assert!(store
            .entries()
            .iter()
            .all(|entry| entry.primary_text != "old question"));
        assert_eq!(store.summary(), "new");
    }

    #[tokio::test]
    async fn test_empty_history_yields_empty_store() {
        let gateway = MockGateway::with_state(MockState::default());
        let mut store = TranscriptStore::new(gateway, "user-1");

        store.open_session("fresh00001").await.unwrap();

        assert!(store.entries().is_empty());
        assert_eq!(store.active_session(), Some("fresh00001"));
    }

    #[tokio::test]
    async fn test_replay_wires_source_queries() {
        let mut histories = HashMap::new();
        histories.insert(
            "abc123defg".to_string(),
            ChatHistory {
                records: vec![
                    HistoryRecord::human("q1", MediaKind::Text, "text"),
                    HistoryRecord::machine("a1", vec!["ctx".to_string()], vec![]),
                    HistoryRecord::human("q2", MediaKind::Text, "text"),
                    HistoryRecord::machine("a2", vec![], vec![]),
                ],
                summary: String::new(),
            },
        );
        let gateway = MockGateway::with_state(MockState {
            histories,
            ..Default::default()
        });
        let mut store = TranscriptStore::new(gateway, "user-1");
        store.open_session("abc123defg").await.unwrap();

        let entries = store.entries();
        assert!(entries.iter().all(|entry| !entry.reveal_mode));
        assert_eq!(entries[1].source_query.as_deref(), Some("q1"));
        assert_eq!(entries[3].source_query.as_deref(), Some("q2"));
        assert_eq!(
            entries[1].supplementary,
            vec![SupplementaryResource::ContextRef("ctx".to_string())]
        );
        assert_eq!(entries[1].phase, EntryPhase::ResourcesFetched);
    }

    #[tokio::test]
    async fn test_failed_history_load_preserves_transcript() {
        let gateway = MockGateway::with_state(MockState::default());
        let mut store = store_with_open_session(Arc::clone(&gateway)).await;
        store
            .submit_user_message("keep me", MediaKind::Text, None)
            .await
            .unwrap();
        let before = store.entries().len();

        gateway.state.lock().unwrap().fail_history = true;
        let result = store.open_session("other12345").await;

        assert!(result.is_err());
        assert_eq!(store.entries().len(), before);
        assert_eq!(store.active_session(), Some("abc123defg"));
    }

    #[tokio::test]
    async fn test_new_session_avoids_known_ids_and_registers_defaults() {
        let gateway = MockGateway::with_state(MockState {
            session_ids: vec!["taken00001".to_string(), "taken00002".to_string()],
            ..Default::default()
        });
        let mut store = TranscriptStore::new(gateway.clone(), "user-1");
        store.open_session("taken00001").await.unwrap();

        let id = store.new_session().await.unwrap();

        assert_ne!(id, "taken00001");
        assert_ne!(id, "taken00002");
        assert_eq!(id.len(), 10);
        assert!(store.entries().is_empty());
        assert_eq!(store.active_session(), Some(id.as_str()));

        let state = gateway.state.lock().unwrap();
        let registered = state.personalization_saves.last().unwrap();
        assert_eq!(registered.session_id, id);
        assert_eq!(registered.personalization, Personalization::default());
    }

    #[tokio::test]
    async fn test_delete_session_forgets_id() {
        let gateway = MockGateway::with_state(MockState {
            session_ids: vec!["abc123defg".to_string()],
            sessions: vec![SessionSummary {
                id: "abc123defg".to_string(),
                title: "Algebra".to_string(),
                last_active: None,
            }],
            ..Default::default()
        });
        let mut store = TranscriptStore::new(gateway.clone(), "user-1");
        store.refresh_sessions().await;
        store.open_session("abc123defg").await.unwrap();

        store.delete_session("abc123defg").await.unwrap();

        assert!(store.sessions().is_empty());
        assert_eq!(store.active_session(), None);
        assert!(store.entries().is_empty());
        assert_eq!(gateway.state.lock().unwrap().deleted, vec!["abc123defg"]);
    }

    #[tokio::test]
    async fn test_failed_delete_changes_nothing() {
        let gateway = MockGateway::with_state(MockState {
            fail_delete: true,
            sessions: vec![SessionSummary {
                id: "abc123defg".to_string(),
                title: String::new(),
                last_active: None,
            }],
            ..Default::default()
        });
        let mut store = TranscriptStore::new(gateway, "user-1");
        store.refresh_sessions().await;

        assert!(store.delete_session("abc123defg").await.is_err());
        assert_eq!(store.sessions().len(), 1);
    }

    #[tokio::test]
    async fn test_complete_reveal_attaches_resources() {
        let gateway = MockGateway::with_state(MockState::default());
        let mut store = store_with_open_session(gateway).await;
        let index = store
            .submit_user_message("teach me loops", MediaKind::Text, None)
            .await
            .unwrap();

        store.begin_reveal(index).unwrap();
        assert_eq!(store.entries()[index].phase, EntryPhase::Revealing);

        store.complete_reveal(index).await.unwrap();

        let entry = &store.entries()[index];
        assert_eq!(entry.phase, EntryPhase::ResourcesFetched);
        assert!(entry
            .supplementary
            .contains(&SupplementaryResource::VideoLink(
                "https://youtube.com/watch?v=abc".to_string()
            )));
        assert!(entry
            .supplementary
            .contains(&SupplementaryResource::ArticleLink(
                "https://example.com/article".to_string()
            )));
    }

    #[tokio::test]
    async fn test_failed_resource_fetch_leaves_entry_revealed() {
        let gateway = MockGateway::with_state(MockState {
            fail_resources: true,
            ..Default::default()
        });
        let mut store = store_with_open_session(gateway).await;
        let index = store
            .submit_user_message("teach me loops", MediaKind::Text, None)
            .await
            .unwrap();
        let blocks_before = store.entries()[index].supplementary.len();

        store.begin_reveal(index).unwrap();
        assert!(store.complete_reveal(index).await.is_err());

        let entry = &store.entries()[index];
        assert_eq!(entry.phase, EntryPhase::Revealed);
        assert_eq!(entry.supplementary.len(), blocks_before);
        assert!(entry.controls_eligible());
    }

    #[tokio::test]
    async fn test_read_aloud_gated_until_revealed() {
        let gateway = MockGateway::with_state(MockState::default());
        let mut store = store_with_open_session(gateway).await;
        let index = store
            .submit_user_message("say it", MediaKind::Text, None)
            .await
            .unwrap();

        assert!(store.read_aloud(index).await.unwrap_err().is_validation());

        store.begin_reveal(index).unwrap();
        store.complete_reveal(index).await.unwrap();
        let audio = store.read_aloud(index).await.unwrap();
        assert!(!audio.is_empty());
    }
}
