//! Chat use case

use crate::domain::Role;
use crate::error::{MindcareError, Result};
use crate::infrastructure::{ResponseGenerator, SessionStore};

/// One completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub session_id: String,
    pub reply: String,
}

/// Records a user turn, asks the generator, records the reply
pub struct ChatService<G> {
    store: SessionStore,
    generator: G,
    language: String,
}

impl<G: ResponseGenerator> ChatService<G> {
    pub fn new(store: SessionStore, generator: G, language: impl Into<String>) -> Self {
        ChatService {
            store,
            generator,
            language: language.into(),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Handle one user message
    pub fn send(&mut self, user_text: &str, emotion: Option<String>) -> Result<ChatTurn> {
        let user_text = user_text.trim();
        if user_text.is_empty() {
            return Err(MindcareError::InvalidInput(
                "message cannot be empty".to_string(),
            ));
        }

        self.store.add_message(Role::User, user_text, emotion);

        let reply = self
            .generator
            .generate(user_text, &self.language)
            .map_err(|e| MindcareError::Responder(format!("{:#}", e)))?;

        self.store.add_message(Role::Assistant, &reply, None);

        Ok(ChatTurn {
            session_id: self.store.current_id().to_string(),
            reply,
        })
    }
}
