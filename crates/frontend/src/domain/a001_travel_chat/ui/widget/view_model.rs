//! Travel Chat Widget - View Model

use crate::domain::a001_travel_chat::api::{ChatBackend, HttpChatBackend};
use crate::domain::a001_travel_chat::session::ChatSession;
use crate::shared::export::{download_text, notify};
use contracts::domain::a001_travel_chat::aggregate::Message;
use contracts::domain::a001_travel_chat::transcript::EXPORT_MIME_TYPE;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TravelChatVm {
    pub session: RwSignal<ChatSession>,
    pub draft: RwSignal<String>,
}

impl TravelChatVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ChatSession::new()),
            draft: RwSignal::new(String::new()),
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        self.session.with(|s| s.transcript().to_vec())
    }

    pub fn is_loading(&self) -> bool {
        self.session.with(|s| s.is_loading())
    }

    pub fn error_text(&self) -> Option<String> {
        self.session.with(|s| s.error().map(|e| e.to_string()))
    }

    /// Starts one exchange unless one is already in flight
    pub fn submit(&self, backend: &HttpChatBackend) {
        let draft = self.draft.get_untracked();
        let Some(result) = self.session.try_update(|s| s.begin_submit(&draft)) else {
            return;
        };
        let pending = match result {
            Ok(Some(pending)) => pending,
            Ok(None) => {
                log::debug!("Submit ignored, a reply is still pending");
                return;
            }
            Err(e) => {
                log::debug!("Submit rejected: {}", e.detail());
                return;
            }
        };
        self.draft.set(String::new());

        log::debug!(
            "Sending chat message, history length {}",
            pending.request.history.len()
        );

        let session = self.session;
        let backend = backend.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = backend.send(&pending.request).await;
            match &outcome {
                Ok(reply) => log::debug!("Received reply ({} chars)", reply.reply.chars().count()),
                Err(e) => log::error!("Chat request failed: {}", e.detail()),
            }
            session.update(|s| s.complete(pending, outcome));
        });
    }

    pub fn export(&self) {
        let export = self.session.with_untracked(|s| s.export(chrono::Utc::now()));
        let result = match export {
            Ok(export) => {
                log::info!(
                    "Exporting {} messages to {}",
                    self.session.with_untracked(|s| s.saved().len()),
                    export.filename
                );
                download_text(&export.content, &export.filename, EXPORT_MIME_TYPE)
            }
            Err(e) => notify(&e.to_string()),
        };
        if let Err(e) = result {
            log::error!("Export failed: {}", e);
        }
    }
}

