//! Outbound call to the chat endpoint

use async_trait::async_trait;
use contracts::domain::a001_travel_chat::dto::{ChatReply, ChatRequest};
use contracts::domain::a001_travel_chat::error::ChatError;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::shared::config::ChatConfig;

/// Maps a message plus its history to a reply
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;
}

/// `POST <endpoint>` with a JSON body
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    endpoint: String,
    timeout_ms: Option<u32>,
}

impl HttpChatBackend {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            timeout_ms: config.timeout_ms(),
        }
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        let Some(timeout_ms) = self.timeout_ms else {
            return post_chat(&self.endpoint, request).await;
        };

        let call = Box::pin(post_chat(&self.endpoint, request));
        let timer = Box::pin(TimeoutFuture::new(timeout_ms));
        match select(call, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ChatError::transport(format!(
                "Request timed out after {} ms",
                timeout_ms
            ))),
        }
    }
}

async fn post_chat(endpoint: &str, request: &ChatRequest) -> Result<ChatReply, ChatError> {
    let response = Request::post(endpoint)
        .json(request)
        .map_err(|e| ChatError::transport(format!("Failed to encode request: {}", e)))?
        .send()
        .await
        .map_err(|e| ChatError::transport(format!("Request failed: {}", e)))?;

    if !response.ok() {
        return Err(ChatError::transport(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    response
        .json::<ChatReply>()
        .await
        .map_err(|e| ChatError::transport(format!("Failed to parse response: {}", e)))
}
