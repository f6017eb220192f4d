use super::assistant::MessageId;
use super::language::LanguageId;
use super::services::ports::PreferenceChange;

/// Work the shell must carry out after a dispatch. Remote effects go to
/// `RemoteRuntime`; `SyncSurface` goes to the mounted editing surface.
#[derive(Debug, Clone)]
pub enum Effect {
    ExecuteCode {
        code: String,
        language: LanguageId,
        stdin: Option<String>,
    },
    CancelExecution,
    GenerateCode {
        id: MessageId,
        prompt: String,
    },
    SyncSurface(PreferenceChange),
}
