use super::services::ports::{PreferenceChange, SurfaceHandle};
use super::state::{AppState, FileData, MAX_FONT_SIZE, MIN_FONT_SIZE};
use super::{Action, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn state_only(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
    surface: Option<SurfaceHandle>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            surface: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Called once when the live editing surface mounts. The store only
    /// holds the handle; applying `Effect::SyncSurface` through it stays
    /// with the shell.
    pub fn attach_surface(&mut self, surface: SurfaceHandle) {
        self.surface = Some(surface);
    }

    pub fn surface(&self) -> Option<&SurfaceHandle> {
        self.surface.as_ref()
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::CreateFile {
                name,
                content,
                language,
            } => {
                self.state
                    .workspace
                    .files
                    .insert(name.clone(), FileData { content, language });
                self.state.workspace.current_file = Some(name);
                DispatchResult::state_only(true)
            }
            Action::UpdateFileContent { name, content } => {
                let Some(file) = self.state.workspace.files.get_mut(name.as_str()) else {
                    return DispatchResult::state_only(false);
                };
                let changed = file.content != content;
                file.content = content;
                DispatchResult::state_only(changed)
            }
            Action::DeleteFile { name } => {
                let removed = self.state.workspace.files.remove(name.as_str()).is_some();
                let had_current = self.state.workspace.current_file.is_some();
                // Clears the selection even when the deleted file was not
                // the selected one. Known quirk, kept as-is.
                self.state.workspace.current_file = None;
                DispatchResult::state_only(removed || had_current)
            }
            Action::SetCurrentFile { name } => {
                let changed = self.state.workspace.current_file.as_ref() != Some(&name);
                self.state.workspace.current_file = Some(name);
                DispatchResult::state_only(changed)
            }
            Action::SetTheme(theme) => {
                let changed = self.state.preferences.theme != theme;
                self.state.preferences.theme = theme;
                DispatchResult {
                    effects: vec![Effect::SyncSurface(PreferenceChange::Theme(theme))],
                    state_changed: changed,
                }
            }
            Action::SetFontSize(size) => {
                let size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
                let changed = self.state.preferences.font_size != size;
                self.state.preferences.font_size = size;
                DispatchResult {
                    effects: vec![Effect::SyncSurface(PreferenceChange::FontSize(size))],
                    state_changed: changed,
                }
            }
            Action::SetWordWrap(wrap) => {
                let changed = self.state.preferences.word_wrap != wrap;
                self.state.preferences.word_wrap = wrap;
                DispatchResult {
                    effects: vec![Effect::SyncSurface(PreferenceChange::WordWrap(wrap))],
                    state_changed: changed,
                }
            }
            Action::SetMinimap(show) => {
                let changed = self.state.preferences.minimap != show;
                self.state.preferences.minimap = show;
                DispatchResult {
                    effects: vec![Effect::SyncSurface(PreferenceChange::Minimap(show))],
                    state_changed: changed,
                }
            }
            Action::AppendOutput(line) => {
                self.state.terminal.output.push(line);
                DispatchResult::state_only(true)
            }
            Action::ClearOutput => {
                let changed = !self.state.terminal.output.is_empty();
                self.state.terminal.output.clear();
                DispatchResult::state_only(changed)
            }
            Action::SetRunning(is_running) => {
                let changed = self.state.run.is_running != is_running;
                self.state.run.is_running = is_running;
                DispatchResult::state_only(changed)
            }
            Action::SetUserInput(input) => {
                let changed = self.state.run.user_input != input;
                self.state.run.user_input = input;
                DispatchResult::state_only(changed)
            }
            Action::SetWaitingForInput(waiting) => {
                let changed = self.state.run.waiting_for_input != waiting;
                self.state.run.waiting_for_input = waiting;
                DispatchResult::state_only(changed)
            }
            Action::RunCurrentFile => {
                let (code, language) = {
                    let Some((_, file)) = self.state.workspace.current() else {
                        return DispatchResult::state_only(false);
                    };
                    (file.content.clone(), file.language)
                };

                self.state.terminal.output.clear();
                self.state
                    .terminal
                    .output
                    .push(format!("Executing {} code...", language.as_str()));
                self.state.run.is_running = true;

                DispatchResult {
                    effects: vec![Effect::ExecuteCode {
                        code,
                        language,
                        stdin: None,
                    }],
                    state_changed: true,
                }
            }
            Action::SubmitTerminalInput(line) => {
                self.state.terminal.input_history.push(line.clone());
                self.state.terminal.output.push(format!("> {line}"));

                let mut effects = Vec::new();
                if self.state.run.waiting_for_input {
                    self.state.run.waiting_for_input = false;

                    let resumed = {
                        let current = self.state.workspace.current();
                        current.map(|(_, file)| (file.content.clone(), file.language))
                    };
                    if let Some((code, language)) = resumed {
                        self.state.run.user_input = Some(line.clone());
                        self.state.run.is_running = true;
                        effects.push(Effect::ExecuteCode {
                            code,
                            language,
                            stdin: Some(line),
                        });
                    }
                }

                DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            Action::RunFinished => {
                let changed =
                    self.state.run.is_running || self.state.run.user_input.is_some();
                self.state.run.is_running = false;
                self.state.run.user_input = None;
                DispatchResult::state_only(changed)
            }
            Action::CancelRun => DispatchResult {
                effects: vec![Effect::CancelExecution],
                state_changed: false,
            },
            Action::SubmitPrompt(prompt) => {
                let id = self.state.assistant.push_prompt(prompt.clone());
                DispatchResult {
                    effects: vec![Effect::GenerateCode { id, prompt }],
                    state_changed: true,
                }
            }
            Action::RegeneratePrompt { id } => {
                match self.state.assistant.begin_regenerate(id) {
                    Some(prompt) => DispatchResult {
                        effects: vec![Effect::GenerateCode { id, prompt }],
                        state_changed: true,
                    },
                    None => DispatchResult::state_only(false),
                }
            }
            Action::GenerationResolved { id, result } => {
                let changed = self.state.assistant.resolve(id, result);
                DispatchResult::state_only(changed)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
