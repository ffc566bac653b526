//! Chat service client

pub mod error;

use crate::config::ChatConfig;
use crate::types::{ChatReply, ChatRequest};
use async_trait::async_trait;
use error::ChatError;
use reqwest::{Client, ClientBuilder, Method};
use std::time::Duration;

/// Something that can answer a chat message.
///
/// The widget only talks to this trait, so tests and demos can swap the HTTP
/// client for a scripted one. Futures are not `Send` because everything runs
/// on the browser's single thread.
#[async_trait(?Send)]
pub trait ChatService {
    async fn send(&self, message: &str) -> Result<ChatReply, ChatError>;
}

/// HTTP client for the `/chat` endpoint
#[derive(Clone, Debug)]
pub struct ChatClient {
    client: Client,
    base_url: String,
}

impl ChatClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ChatError> {
        Self::builder().base_url(base_url).build()
    }

    pub fn from_config(config: &ChatConfig) -> Result<Self, ChatError> {
        Self::new(config.api_base_url.clone())
    }

    pub fn builder() -> ChatClientBuilder {
        ChatClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Post one message and decode the reply
    pub async fn chat(&self, message: &str) -> Result<ChatReply, ChatError> {
        let url = format!("{}/chat", self.base_url);
        let response = self
            .client
            .request(Method::POST, url)
            .json(&ChatRequest::new(message))
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(ChatError::from_status(status, message));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl ChatService for ChatClient {
    async fn send(&self, message: &str) -> Result<ChatReply, ChatError> {
        self.chat(message).await
    }
}

/// Builder for ChatClient
#[derive(Default)]
pub struct ChatClientBuilder {
    base_url: Option<String>,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ChatClientBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (ignored in the browser)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<ChatClient, ChatError> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ChatError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("helpdesk-chat/0.1.0");
        }

        let client = client_builder.build()?;

        Ok(ChatClient { client, base_url })
    }
}
