/// What the execution sandbox reported for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl RunReport {
    /// Terminal lines for this report: stdout verbatim as one entry,
    /// stderr as one entry with the `Error: ` prefix. Empty streams
    /// produce no line.
    pub fn output_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(stdout) = self.stdout.as_deref() {
            if !stdout.is_empty() {
                lines.push(stdout.to_string());
            }
        }
        if let Some(stderr) = self.stderr.as_deref() {
            if !stderr.is_empty() {
                lines.push(format!("Error: {stderr}"));
            }
        }
        lines
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The service answered, but the body carried no `run` section.
    #[error("Failed to execute code")]
    MalformedResponse,
}
