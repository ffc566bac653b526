//! Helpdesk chat widget.
//!
//! A Yew component that sends each message to a `POST /chat` endpoint and
//! animates the reply word by word, with confidence badges, explanations and
//! follow-up suggestions.
//!
//! - [`state`]: the reducer holding the transcript and every transition
//! - [`reveal`]: the word-by-word reveal cursor
//! - [`client`]: the [`ChatService`] trait and its HTTP implementation
//! - [`components`]: rendering

pub mod client;
pub mod components;
pub mod config;
pub mod reveal;
pub mod state;
pub mod styles;
pub mod types;

pub use client::error::ChatError;
pub use client::{ChatClient, ChatService};
pub use components::{ChatWidget, ServiceHandle, Viewport, ViewportHandle};
pub use config::ChatConfig;
pub use state::{ChatAction, ChatState};
pub use types::{ChatReply, ChatRequest, Confidence, Transcript, Turn};
