use crate::kernel::services::ports::GenerateError;

pub type MessageId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: MessageRole,
    pub content: String,
    /// Assistant entry that reports a failed generation.
    pub is_error: bool,
}

/// Conversation transcript of the generation panel.
///
/// Entries stay in submission order; a resolved generation replaces the
/// assistant entry directly after its user entry, or inserts one there if
/// none exists yet.
#[derive(Debug, Clone)]
pub struct AssistantState {
    messages: Vec<ChatMessage>,
    next_id: MessageId,
    in_flight: usize,
}

const WELCOME: &str = "Hello! I can help you generate code. Try something like:\n\
- \"Create a function to sort an array\"\n\
- \"Write a component for a todo list\"\n\
- \"Generate a class for handling API requests\"";

impl Default for AssistantState {
    fn default() -> Self {
        let mut state = Self {
            messages: Vec::new(),
            next_id: 0,
            in_flight: 0,
        };
        state.push(MessageRole::Assistant, WELCOME.to_string(), false);
        state
    }
}

impl AssistantState {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of generations still awaiting resolution.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn alloc_id(&mut self) -> MessageId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push(&mut self, role: MessageRole, content: String, is_error: bool) -> MessageId {
        let id = self.alloc_id();
        self.messages.push(ChatMessage {
            id,
            role,
            content,
            is_error,
        });
        id
    }

    pub(crate) fn push_prompt(&mut self, prompt: String) -> MessageId {
        self.in_flight += 1;
        self.push(MessageRole::User, prompt, false)
    }

    /// Starts a regeneration for the user entry `id`, returning its
    /// original prompt text. `None` for unknown or non-user ids.
    pub(crate) fn begin_regenerate(&mut self, id: MessageId) -> Option<String> {
        let message = self.messages.iter().find(|m| m.id == id)?;
        if message.role != MessageRole::User {
            return None;
        }
        let prompt = message.content.clone();
        self.in_flight += 1;
        Some(prompt)
    }

    /// Lands a generation outcome after user entry `id`: replaces the
    /// assistant entry immediately following it, or inserts one if absent.
    /// Every other entry keeps its position.
    pub(crate) fn resolve(
        &mut self,
        id: MessageId,
        result: Result<String, GenerateError>,
    ) -> bool {
        let counter_moved = self.in_flight > 0;
        self.in_flight = self.in_flight.saturating_sub(1);

        let Some(index) = self.messages.iter().position(|m| m.id == id) else {
            return counter_moved;
        };

        let (content, is_error) = match result {
            Ok(code) => (code, false),
            Err(err) => (err.to_string(), true),
        };
        let reply = ChatMessage {
            id: self.alloc_id(),
            role: MessageRole::Assistant,
            content,
            is_error,
        };

        match self.messages.get(index + 1) {
            Some(next) if next.role == MessageRole::Assistant => {
                self.messages[index + 1] = reply;
            }
            _ => self.messages.insert(index + 1, reply),
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/assistant.rs"]
mod tests;
