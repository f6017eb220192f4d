//! Headless application core (state/action/effect).

pub mod action;
pub mod assistant;
pub mod effect;
pub mod language;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use assistant::{AssistantState, ChatMessage, MessageId, MessageRole};
pub use effect::Effect;
pub use language::LanguageId;
pub use state::{
    AppState, FileData, PreferencesState, RunState, TerminalState, WorkspaceState, MAX_FONT_SIZE,
    MIN_FONT_SIZE,
};
pub use store::{DispatchResult, Store};
