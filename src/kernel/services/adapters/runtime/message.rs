use crate::kernel::assistant::MessageId;
use crate::kernel::services::ports::GenerateError;
use crate::kernel::Action;

/// Completion reports from the remote runtime. Delivered to the shell
/// thread over a channel and fed back into the store as actions.
#[derive(Debug)]
pub enum AppMessage {
    RunOutput {
        line: String,
    },
    RunFinished,
    GenerationResolved {
        id: MessageId,
        result: Result<String, GenerateError>,
    },
}

impl AppMessage {
    pub fn into_action(self) -> Action {
        match self {
            AppMessage::RunOutput { line } => Action::AppendOutput(line),
            AppMessage::RunFinished => Action::RunFinished,
            AppMessage::GenerationResolved { id, result } => {
                Action::GenerationResolved { id, result }
            }
        }
    }
}
