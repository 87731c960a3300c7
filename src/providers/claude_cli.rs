use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use tokio::process::Command;

use crate::errors::ProviderError;
use crate::providers::{CompletionClient, CompletionRequest};

/// Completion client that shells out to the claude CLI
/// (`claude --print -p <prompt>`) instead of calling the HTTP API
#[derive(Debug)]
pub struct ClaudeCli {
    /// Binary to invoke
    binary: String,
    /// Subprocess timeout in seconds
    timeout_secs: u64,
}

impl ClaudeCli {
    /// Create a client using the `claude` binary from PATH
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            binary: "claude".to_string(),
            timeout_secs,
        }
    }

    /// Create a client with a custom binary path
    pub fn with_binary(binary: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            binary: binary.into(),
            timeout_secs,
        }
    }

    /// The CLI takes a single prompt string, so the system message is folded
    /// in ahead of the user content
    fn flatten_prompt(request: &CompletionRequest) -> String {
        let mut parts = Vec::new();

        if let Some(system) = request.system_prompt() {
            parts.push(system.to_string());
        }

        for message in request.chat_messages() {
            parts.push(message.content.clone());
        }

        parts.join("\n\n")
    }
}

#[async_trait]
impl CompletionClient for ClaudeCli {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let prompt = Self::flatten_prompt(&request);
        debug!("Invoking {} with a {} char prompt", self.binary, prompt.len());

        let child = Command::new(&self.binary)
            .arg("--print")
            .arg("-p")
            .arg(&prompt)
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(Duration::from_secs(self.timeout_secs), child)
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout_secs))?
            .map_err(|e| ProviderError::ConnectionError(format!("failed to run {}: {}", self.binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProviderError::RequestFailed(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
