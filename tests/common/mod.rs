//! Shared test helpers: a scripted challenge channel standing in for the UI.
#![allow(dead_code)]

use std::collections::VecDeque;
use stock_ledger::guard::ChallengeChannel;

/// Route crate logs through the test harness; safe to call from every test.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Queue-driven [`ChallengeChannel`]: each credential request consumes the
/// next scripted response (`None` means the user cancelled), each
/// confirmation consumes the next yes/no. An exhausted queue answers with
/// cancel / no, which keeps a mis-scripted test on the rejection path
/// instead of panicking.
#[derive(Default)]
pub struct ScriptedChannel {
    credentials: VecDeque<Option<String>>,
    confirmations: VecDeque<bool>,
    pub prompts_seen: Vec<String>,
}

impl ScriptedChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credential(mut self, response: &str) -> Self {
        self.credentials.push_back(Some(response.to_string()));
        self
    }

    pub fn cancel_credential(mut self) -> Self {
        self.credentials.push_back(None);
        self
    }

    pub fn confirmation(mut self, yes: bool) -> Self {
        self.confirmations.push_back(yes);
        self
    }
}

impl ChallengeChannel for ScriptedChannel {
    fn request_credential(&mut self, prompt: &str, _allow_cancel: bool) -> Option<String> {
        self.prompts_seen.push(prompt.to_string());
        self.credentials.pop_front().flatten()
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts_seen.push(prompt.to_string());
        self.confirmations.pop_front().unwrap_or(false)
    }
}
