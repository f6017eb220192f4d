use compact_str::CompactString;
use rustc_hash::FxHashMap;

use crate::kernel::services::ports::ThemeId;

use super::assistant::AssistantState;
use super::language::LanguageId;

pub const MIN_FONT_SIZE: u8 = 8;
pub const MAX_FONT_SIZE: u8 = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileData {
    pub content: String,
    pub language: LanguageId,
}

#[derive(Debug, Clone, Default)]
pub struct WorkspaceState {
    pub files: FxHashMap<CompactString, FileData>,
    /// Name of the selected file. Either `None` or a key present in
    /// `files`; `DeleteFile` clears it in the same dispatch.
    pub current_file: Option<CompactString>,
}

impl WorkspaceState {
    pub fn current(&self) -> Option<(&str, &FileData)> {
        let name = self.current_file.as_deref()?;
        let file = self.files.get(name)?;
        Some((name, file))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferencesState {
    pub theme: ThemeId,
    pub font_size: u8,
    pub word_wrap: bool,
    pub minimap: bool,
}

impl Default for PreferencesState {
    fn default() -> Self {
        Self {
            theme: ThemeId::Dark,
            font_size: 14,
            word_wrap: true,
            minimap: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    pub is_running: bool,
    pub user_input: Option<String>,
    pub waiting_for_input: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TerminalState {
    /// Append-only console history. Unbounded within a session; reset
    /// only by `ClearOutput`.
    pub output: Vec<String>,
    /// Lines the user has submitted, for history recall by shells.
    pub input_history: Vec<String>,
}

pub struct AppState {
    pub workspace: WorkspaceState,
    pub preferences: PreferencesState,
    pub run: RunState,
    pub terminal: TerminalState,
    pub assistant: AssistantState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            workspace: WorkspaceState::default(),
            preferences: PreferencesState::default(),
            run: RunState::default(),
            terminal: TerminalState::default(),
            assistant: AssistantState::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
