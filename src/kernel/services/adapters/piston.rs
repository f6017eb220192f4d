//! Execution gateway: relays source text to the hosted sandbox.

use serde::{Deserialize, Serialize};

use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::{GatewayConfig, RunError, RunReport};

pub struct PistonClient {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct ExecuteRequest<'a> {
    language: &'a str,
    version: &'a str,
    files: Vec<ExecuteFile<'a>>,
    stdin: &'a str,
}

#[derive(Serialize)]
struct ExecuteFile<'a> {
    content: &'a str,
}

#[derive(Deserialize)]
struct ExecuteResponse {
    run: Option<RunSection>,
}

#[derive(Deserialize)]
struct RunSection {
    stdout: Option<String>,
    stderr: Option<String>,
}

impl PistonClient {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.exec_endpoint.clone(),
        }
    }

    /// One best-effort round trip: POST the source plus stdin, relay the
    /// `run` section. A body without one is a service-level failure.
    pub async fn execute(
        &self,
        code: &str,
        language: LanguageId,
        stdin: Option<&str>,
    ) -> Result<RunReport, RunError> {
        let body = ExecuteRequest {
            language: language.runner_id(),
            version: "*",
            files: vec![ExecuteFile { content: code }],
            stdin: stdin.unwrap_or(""),
        };

        tracing::debug!(
            language = language.as_str(),
            endpoint = %self.endpoint,
            "submitting code for execution"
        );

        let response = self.http.post(&self.endpoint).json(&body).send().await?;
        let parsed: ExecuteResponse = response.json().await?;

        let Some(run) = parsed.run else {
            tracing::warn!("execution service returned no run section");
            return Err(RunError::MalformedResponse);
        };

        Ok(RunReport {
            stdout: run.stdout,
            stderr: run.stderr,
        })
    }
}
