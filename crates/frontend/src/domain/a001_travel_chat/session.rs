//! Chat widget state and its transitions.
//!
//! `transcript` is what the widget displays. `saved` only ever receives
//! complete user/bot pairs and is the source for the text export, so after
//! a failed exchange the two lists differ by the unanswered user message.

use contracts::domain::a001_travel_chat::aggregate::Message;
use contracts::domain::a001_travel_chat::dto::{ChatReply, ChatRequest};
use contracts::domain::a001_travel_chat::error::ChatError;
use contracts::domain::a001_travel_chat::transcript::TranscriptExport;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    transcript: Vec<Message>,
    saved: Vec<Message>,
    loading: bool,
    error: Option<ChatError>,
}

/// An exchange whose request is in flight
#[derive(Debug, Clone, PartialEq)]
pub struct PendingExchange {
    pub request: ChatRequest,
    user_message: Message,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn saved(&self) -> &[Message] {
        &self.saved
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ChatError> {
        self.error.as_ref()
    }

    /// Validates the draft and optimistically appends the user message.
    ///
    /// The returned request carries the transcript including that message.
    /// Returns `Ok(None)` and changes nothing while an exchange is in flight.
    pub fn begin_submit(&mut self, draft: &str) -> Result<Option<PendingExchange>, ChatError> {
        if self.loading {
            return Ok(None);
        }

        let text = draft.trim();
        if text.is_empty() {
            self.error = Some(ChatError::EmptyInput);
            return Err(ChatError::EmptyInput);
        }

        let user_message = Message::user(text);
        self.transcript.push(user_message.clone());
        self.error = None;
        self.loading = true;

        Ok(Some(PendingExchange {
            request: ChatRequest {
                message: text.to_string(),
                history: self.transcript.clone(),
            },
            user_message,
        }))
    }

    pub fn complete(&mut self, pending: PendingExchange, outcome: Result<ChatReply, ChatError>) {
        match outcome {
            Ok(reply) => {
                let bot_message = Message::bot(reply.reply);
                self.transcript.push(bot_message.clone());
                self.saved.push(pending.user_message);
                self.saved.push(bot_message);
            }
            // The optimistic user message stays visible
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }

    pub fn export(&self, now: DateTime<Utc>) -> Result<TranscriptExport, ChatError> {
        TranscriptExport::build(&self.saved, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_travel_chat::api::ChatBackend;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Replays scripted outcomes and records every request
    struct FakeBackend {
        outcome: Result<ChatReply, ChatError>,
        requests: RefCell<Vec<ChatRequest>>,
    }

    impl FakeBackend {
        fn replying(text: &str) -> Self {
            Self {
                outcome: Ok(ChatReply {
                    reply: text.to_string(),
                }),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn failing(detail: &str) -> Self {
            Self {
                outcome: Err(ChatError::transport(detail)),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl ChatBackend for FakeBackend {
        async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
            self.requests.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }

    fn submit(
        session: &mut ChatSession,
        draft: &str,
        backend: &FakeBackend,
    ) -> Result<(), ChatError> {
        let pending = session
            .begin_submit(draft)?
            .expect("no exchange in flight");
        assert!(session.is_loading());
        let outcome = block_on(backend.send(&pending.request));
        session.complete(pending, outcome);
        Ok(())
    }

    #[test]
    fn test_empty_draft_never_calls_backend() {
        let backend = FakeBackend::replying("unused");
        let mut session = ChatSession::new();

        for draft in ["", "   ", "\n\t "] {
            assert_eq!(
                submit(&mut session, draft, &backend),
                Err(ChatError::EmptyInput)
            );
            assert_eq!(session.error(), Some(&ChatError::EmptyInput));
            assert!(!session.is_loading());
        }

        assert_eq!(backend.calls(), 0);
        assert!(session.transcript().is_empty());
        assert!(session.saved().is_empty());
    }

    #[test]
    fn test_successful_exchange() {
        let backend = FakeBackend::replying("명동을 추천합니다");
        let mut session = ChatSession::new();

        submit(&mut session, "서울 맛집 추천해줘", &backend).unwrap();

        let expected = vec![
            Message::user("서울 맛집 추천해줘"),
            Message::bot("명동을 추천합니다"),
        ];
        assert_eq!(session.transcript(), expected.as_slice());
        assert_eq!(session.saved(), expected.as_slice());
        assert!(!session.is_loading());
        assert_eq!(session.error(), None);
        assert_eq!(backend.calls(), 1);
    }

    #[test]
    fn test_request_carries_trimmed_text_and_history() {
        let backend = FakeBackend::replying("네");
        let mut session = ChatSession::new();

        submit(&mut session, "  부산  ", &backend).unwrap();
        submit(&mut session, "거기 맛집은?", &backend).unwrap();

        let requests = backend.requests.borrow();
        assert_eq!(requests[0].message, "부산");
        assert_eq!(requests[0].history, vec![Message::user("부산")]);
        assert_eq!(requests[1].message, "거기 맛집은?");
        assert_eq!(
            requests[1].history,
            vec![
                Message::user("부산"),
                Message::bot("네"),
                Message::user("거기 맛집은?"),
            ]
        );
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let backend = FakeBackend::replying("A");
        let mut session = ChatSession::new();

        let first = session.begin_submit("첫 질문").unwrap().unwrap();
        let before = session.clone();

        assert_eq!(session.begin_submit("두 번째 질문"), Ok(None));
        assert_eq!(session.begin_submit("   "), Ok(None));
        assert_eq!(session, before);
        assert_eq!(session.transcript(), [Message::user("첫 질문")].as_slice());
        assert!(session.is_loading());

        let outcome = block_on(backend.send(&first.request));
        session.complete(first, outcome);

        assert_eq!(backend.calls(), 1);
        assert_eq!(
            session.transcript(),
            [Message::user("첫 질문"), Message::bot("A")].as_slice()
        );
        assert!(!session.is_loading());
    }

    #[test]
    fn test_failed_exchange_keeps_user_message_only() {
        let backend = FakeBackend::failing("HTTP error: 500");
        let mut session = ChatSession::new();

        submit(&mut session, "제주도 여행 추천해줘", &backend).unwrap();

        assert_eq!(
            session.transcript(),
            [Message::user("제주도 여행 추천해줘")].as_slice()
        );
        assert!(session.saved().is_empty());
        assert!(!session.is_loading());
        assert_eq!(
            session.error(),
            Some(&ChatError::transport("HTTP error: 500"))
        );
        assert_eq!(backend.calls(), 1);
    }

    #[test]
    fn test_next_submit_clears_previous_error() {
        let mut session = ChatSession::new();
        submit(&mut session, "첫 질문", &FakeBackend::failing("offline")).unwrap();
        assert!(session.error().is_some());

        submit(&mut session, "두 번째 질문", &FakeBackend::replying("답변")).unwrap();

        assert_eq!(session.error(), None);
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(
            session.saved(),
            [Message::user("두 번째 질문"), Message::bot("답변")].as_slice()
        );
    }

    #[test]
    fn test_export() {
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 9, 30, 0).unwrap();
        let mut session = ChatSession::new();
        assert_eq!(session.export(now), Err(ChatError::NothingToExport));

        submit(&mut session, "Hi", &FakeBackend::replying("Hello")).unwrap();

        let export = session.export(now).unwrap();
        assert_eq!(export.content, "사용자: Hi\n\n봇: Hello");
        assert_eq!(export.filename, "chat_history_2025-05-01T09-30-00.txt");
    }

    #[test]
    fn test_export_skips_unanswered_messages() {
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 9, 30, 0).unwrap();
        let mut session = ChatSession::new();
        submit(&mut session, "Hi", &FakeBackend::failing("offline")).unwrap();

        assert_eq!(session.export(now), Err(ChatError::NothingToExport));
    }
}
