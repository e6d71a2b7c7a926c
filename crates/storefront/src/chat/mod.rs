//! Chatbot gateway.
//!
//! Produces a conversational reply plus follow-up suggestion chips for a
//! user message and recent history. With a credential configured, turns are
//! forwarded to the remote completion endpoint; without one ("basic mode"),
//! or on any remote failure, the deterministic fallback table answers
//! instead. Remote failures never surface to the caller of [`ChatGateway::reply`].
//!
//! The credential is persisted to durable storage and rehydrated at startup;
//! the reply language is in-memory only and must be re-selected each
//! session.

pub mod client;
pub mod error;
pub mod fallback;
pub mod types;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use vitrina_core::Language;

use crate::store::persist::{KeyValueStore, keys};

pub use client::CompletionClient;
pub use error::ChatError;
pub use fallback::{fallback_reply, suggestions_for};
pub use types::{ChatMessage, ChatReply, Role};

/// History turns included in a remote request, newest last.
const HISTORY_WINDOW: usize = 6;

const SYSTEM_PROMPT: &str = "You are an AI shopping assistant for a premium e-commerce platform. You are knowledgeable, helpful, and friendly.

Your capabilities include:
- Virtual try-on guidance and clothing recommendations
- Style advice and fashion trends
- Size recommendations and fitting guidance
- Product search and comparisons
- Order tracking and customer support
- Personalized styling tips

Guidelines:
- Be conversational and enthusiastic about fashion and shopping
- Provide practical, actionable advice
- Keep responses concise but informative (2-3 sentences max for most queries)
- Use emojis appropriately to add personality
- Always try to help the user with their shopping journey

If you don't have specific information about a product or service, be honest but still helpful by suggesting alternatives or general advice.";

const fn language_directive(language: Language) -> &'static str {
    match language {
        Language::En => " Respond in English language.",
        Language::Ru => " Respond in Russian language.",
        Language::Uz => " Respond in Uzbek language.",
    }
}

struct GatewayState {
    client: Option<CompletionClient>,
    language: Language,
}

/// The chatbot gateway.
///
/// Cheaply cloneable via `Arc`. Sends are not mutually excluded: a second
/// message sent while one is in flight simply runs concurrently (the UI
/// disables its input while a request is outstanding).
#[derive(Clone)]
pub struct ChatGateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    storage: Arc<dyn KeyValueStore>,
    model: String,
    state: Mutex<GatewayState>,
}

impl ChatGateway {
    /// Create a gateway in basic mode (no credential).
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, model: String) -> Self {
        Self {
            inner: Arc::new(GatewayInner {
                storage,
                model,
                state: Mutex::new(GatewayState {
                    client: None,
                    language: Language::default(),
                }),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, GatewayState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Rehydrate the persisted credential, if one is stored.
    ///
    /// A storage failure or an unusable stored credential is logged and
    /// leaves the gateway in basic mode.
    pub fn load_persisted(&self) {
        let stored = match self.inner.storage.get(keys::CHAT_CREDENTIAL) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Failed to read persisted chat credential: {e}");
                return;
            }
        };
        if let Some(raw) = stored {
            let credential = SecretString::from(raw);
            match CompletionClient::new(&credential, self.inner.model.clone()) {
                Ok(client) => self.state().client = Some(client),
                Err(e) => tracing::warn!("Stored chat credential is unusable: {e}"),
            }
        }
    }

    /// Set the API credential, persist it, and leave basic mode.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Parse` if the credential cannot be used in an
    /// HTTP header. A persistence failure is logged but not returned; the
    /// credential still applies for this session.
    pub fn set_credential(&self, credential: SecretString) -> Result<(), ChatError> {
        let client = CompletionClient::new(&credential, self.inner.model.clone())?;
        if let Err(e) = self
            .inner
            .storage
            .put(keys::CHAT_CREDENTIAL, credential.expose_secret())
        {
            tracing::warn!("Failed to persist chat credential: {e}");
        }
        self.state().client = Some(client);
        Ok(())
    }

    /// Whether a credential is configured.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.state().client.is_some()
    }

    /// Select the reply language for this session.
    pub fn set_language(&self, language: Language) {
        self.state().language = language;
    }

    /// The currently selected reply language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.state().language
    }

    /// Forward a conversation turn to the remote completion endpoint.
    ///
    /// The request carries the system instruction with a language directive,
    /// the last [`HISTORY_WINDOW`] history turns, and the current user turn.
    /// Suggestions are derived by keyword-matching the model's reply.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::NoCredential` in basic mode; callers are expected
    /// to catch any error and use [`fallback_reply`] instead of surfacing it.
    #[instrument(skip(self, history))]
    pub async fn send_message(
        &self,
        text: &str,
        history: &[ChatMessage],
    ) -> Result<ChatReply, ChatError> {
        let (client, language) = {
            let state = self.state();
            (state.client.clone(), state.language)
        };
        let client = client.ok_or(ChatError::NoCredential)?;

        let mut messages = Vec::with_capacity(HISTORY_WINDOW + 2);
        messages.push(ChatMessage::system(format!(
            "{SYSTEM_PROMPT}{}",
            language_directive(language)
        )));
        let tail = history.len().saturating_sub(HISTORY_WINDOW);
        messages.extend(history.iter().skip(tail).cloned());
        messages.push(ChatMessage::user(text));

        let reply = client.complete(messages).await?;
        let suggestions = suggestions_for(&reply);

        Ok(ChatReply {
            message: reply,
            suggestions,
        })
    }

    /// Produce a reply, falling back to the canned table on any failure.
    ///
    /// This is the route-facing operation: it never errors. The fallback is
    /// keyed on the *user's* text; remote suggestions are keyed on the
    /// *model's* reply.
    pub async fn reply(&self, text: &str, history: &[ChatMessage]) -> ChatReply {
        match self.send_message(text, history).await {
            Ok(reply) => reply,
            Err(ChatError::NoCredential) => fallback_reply(text, self.language()),
            Err(e) => {
                tracing::warn!("Chat completion failed, using fallback: {e}");
                fallback_reply(text, self.language())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::store::persist::MemoryStore;

    use super::*;

    fn gateway() -> ChatGateway {
        ChatGateway::new(
            Arc::new(MemoryStore::new()),
            "gpt-4.1-2025-04-14".to_string(),
        )
    }

    #[tokio::test]
    async fn test_basic_mode_fails_with_no_credential() {
        let gateway = gateway();
        let result = gateway.send_message("hello", &[]).await;
        assert!(matches!(result, Err(ChatError::NoCredential)));
    }

    #[tokio::test]
    async fn test_reply_falls_back_in_basic_mode() {
        let gateway = gateway();
        let reply = gateway.reply("hello", &[]).await;
        assert!(reply.message.starts_with("Hello!"));
        assert_eq!(
            reply.suggestions,
            vec!["Virtual Try-On", "Style Quiz", "Product Search", "Size Guide"]
        );
    }

    #[tokio::test]
    async fn test_reply_uses_selected_language() {
        let gateway = gateway();
        gateway.set_language(Language::Uz);
        let reply = gateway.reply("hello", &[]).await;
        assert!(reply.message.starts_with("Salom!"));
    }

    #[test]
    fn test_credential_persists_and_rehydrates() {
        let storage = Arc::new(MemoryStore::new());
        let first = ChatGateway::new(
            Arc::clone(&storage) as Arc<dyn KeyValueStore>,
            "gpt-4.1-2025-04-14".to_string(),
        );
        assert!(!first.has_credential());
        first
            .set_credential(SecretString::from("sk-test"))
            .expect("set credential");
        assert!(first.has_credential());

        let second = ChatGateway::new(storage, "gpt-4.1-2025-04-14".to_string());
        second.load_persisted();
        assert!(second.has_credential());
    }

    #[test]
    fn test_language_is_not_persisted() {
        let storage = Arc::new(MemoryStore::new());
        let first = ChatGateway::new(
            Arc::clone(&storage) as Arc<dyn KeyValueStore>,
            "gpt-4.1-2025-04-14".to_string(),
        );
        first.set_language(Language::Ru);

        let second = ChatGateway::new(storage, "gpt-4.1-2025-04-14".to_string());
        second.load_persisted();
        assert_eq!(second.language(), Language::En);
    }
}
