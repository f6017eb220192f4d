use compact_str::CompactString;

use super::assistant::MessageId;
use super::language::LanguageId;
use super::services::ports::{GenerateError, ThemeId};

#[derive(Debug, Clone)]
pub enum Action {
    /// Inserts or overwrites (last write wins) and selects the file.
    CreateFile {
        name: CompactString,
        content: String,
        language: LanguageId,
    },
    /// Full-content replace. Silent no-op for unknown names.
    UpdateFileContent {
        name: CompactString,
        content: String,
    },
    DeleteFile {
        name: CompactString,
    },
    SetCurrentFile {
        name: CompactString,
    },
    SetTheme(ThemeId),
    SetFontSize(u8),
    SetWordWrap(bool),
    SetMinimap(bool),
    AppendOutput(String),
    ClearOutput,
    SetRunning(bool),
    SetUserInput(Option<String>),
    SetWaitingForInput(bool),
    /// Starts a run of the selected file via the execution gateway.
    RunCurrentFile,
    /// A line typed into the terminal; resumes a run that is waiting for
    /// stdin.
    SubmitTerminalInput(String),
    RunFinished,
    CancelRun,
    SubmitPrompt(String),
    RegeneratePrompt {
        id: MessageId,
    },
    GenerationResolved {
        id: MessageId,
        result: Result<String, GenerateError>,
    },
}
