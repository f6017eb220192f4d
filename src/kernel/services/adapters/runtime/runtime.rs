use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use super::message::AppMessage;
use crate::kernel::assistant::MessageId;
use crate::kernel::language::LanguageId;
use crate::kernel::services::adapters::{GeminiClient, PistonClient};
use crate::kernel::Effect;

struct RunHandle {
    seq: u64,
    cancel: oneshot::Sender<()>,
}

/// Drives the two remote gateways on its own tokio runtime and reports
/// completions over `tx`. Keeps at most one live execution; generations
/// run unconstrained.
pub struct RemoteRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    piston: Arc<PistonClient>,
    gemini: Arc<GeminiClient>,
    current_run: Arc<Mutex<Option<RunHandle>>>,
    run_seq: AtomicU64,
}

impl RemoteRuntime {
    pub fn new(
        tx: Sender<AppMessage>,
        piston: PistonClient,
        gemini: GeminiClient,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            tx,
            piston: Arc::new(piston),
            gemini: Arc::new(gemini),
            current_run: Arc::new(Mutex::new(None)),
            run_seq: AtomicU64::new(0),
        })
    }

    pub fn tokio_handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }

    /// Carries out a remote effect; non-remote effects are handed back to
    /// the caller.
    pub fn handle_effect(&self, effect: Effect) -> Option<Effect> {
        match effect {
            Effect::ExecuteCode {
                code,
                language,
                stdin,
            } => {
                self.run_code(code, language, stdin);
                None
            }
            Effect::CancelExecution => {
                self.cancel_run();
                None
            }
            Effect::GenerateCode { id, prompt } => {
                self.generate(id, prompt);
                None
            }
            other => Some(other),
        }
    }

    /// Starts a run, cancelling any previous in-flight execution first.
    /// Whatever the outcome, the in-flight handle is cleared and a final
    /// `RunFinished` is reported.
    pub fn run_code(&self, code: String, language: LanguageId, stdin: Option<String>) {
        self.cancel_run();

        let seq = self.run_seq.fetch_add(1, Ordering::Relaxed);
        let (cancel_tx, mut cancel_rx) = oneshot::channel();
        if let Ok(mut slot) = self.current_run.lock() {
            *slot = Some(RunHandle {
                seq,
                cancel: cancel_tx,
            });
        }

        let tx = self.tx.clone();
        let piston = Arc::clone(&self.piston);
        let current_run = Arc::clone(&self.current_run);

        self.runtime.spawn(async move {
            tokio::select! {
                _ = &mut cancel_rx => {
                    let _ = tx.send(AppMessage::RunOutput {
                        line: "Execution cancelled".to_string(),
                    });
                }
                result = piston.execute(&code, language, stdin.as_deref()) => {
                    match result {
                        Ok(report) => {
                            for line in report.output_lines() {
                                let _ = tx.send(AppMessage::RunOutput { line });
                            }
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "execution failed");
                            let _ = tx.send(AppMessage::RunOutput {
                                line: format!("Error: {err}"),
                            });
                        }
                    }
                }
            }

            // Clear the handle only if it is still ours; a newer run may
            // have replaced it already.
            if let Ok(mut slot) = current_run.lock() {
                if slot.as_ref().map(|handle| handle.seq) == Some(seq) {
                    *slot = None;
                }
            }
            let _ = tx.send(AppMessage::RunFinished);
        });
    }

    /// Fires the in-flight run's cancellation handle, if any.
    pub fn cancel_run(&self) {
        let handle = match self.current_run.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        if let Some(handle) = handle {
            let _ = handle.cancel.send(());
        }
    }

    /// Generations are not cancellable; concurrent calls run
    /// independently and resolve in whatever order they finish.
    pub fn generate(&self, id: MessageId, prompt: String) {
        let tx = self.tx.clone();
        let gemini = Arc::clone(&self.gemini);
        self.runtime.spawn(async move {
            let result = gemini.generate(&prompt).await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, "code generation failed");
            }
            let _ = tx.send(AppMessage::GenerationResolved { id, result });
        });
    }
}
