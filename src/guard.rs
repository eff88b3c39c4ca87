//! Password guard for destructive and irreversible operations
use super::error::GuardRejection;
use tracing::{info, warn};

/// The challenge UI, kept abstract so the guard can be driven by a modal in
/// production and by a scripted channel in tests. `request_credential`
/// returns `None` on cancel, which is distinct from `Some("")`.
pub trait ChallengeChannel {
    fn request_credential(&mut self, prompt: &str, allow_cancel: bool) -> Option<String>;
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Gates mutating operations behind a two-phase challenge: credential first,
/// then (for deletes and resets) a yes/no confirmation of the irreversible
/// effect. Matching is strict string equality against the stored credential.
#[derive(Debug, Default)]
pub struct AccessGuard {
    credential: Option<String>,
}

impl AccessGuard {
    pub fn new(credential: Option<String>) -> Self {
        Self { credential }
    }

    pub fn is_enrolled(&self) -> bool {
        self.credential.is_some()
    }

    /// First-run enrollment: present a credential-setting challenge with no
    /// cancel option. A non-empty response becomes the credential and is
    /// returned so the caller can persist it. An empty response leaves the
    /// credential unset; guarded operations then stay rejected until one is
    /// set, because nothing ever matches an unset credential.
    pub fn enroll(&mut self, channel: &mut dyn ChallengeChannel) -> Option<&str> {
        match channel.request_credential("Set Your New Password", false) {
            Some(secret) if !secret.is_empty() => {
                info!("credential enrolled");
                self.credential = Some(secret);
                self.credential.as_deref()
            }
            _ => {
                warn!("credential not set; guarded operations remain rejected");
                None
            }
        }
    }

    /// Credential phase only. Used by the update flow, whose actual commit is
    /// re-validated through the normal submit path rather than a second
    /// password check.
    pub fn authorize(
        &self,
        intent: &str,
        channel: &mut dyn ChallengeChannel,
    ) -> Result<(), GuardRejection> {
        match channel.request_credential(intent, true) {
            None => Err(GuardRejection::Cancelled),
            Some(entered) if entered.is_empty() => Err(GuardRejection::RejectedEmpty),
            Some(entered) if Some(entered.as_str()) != self.credential.as_deref() => {
                Err(GuardRejection::RejectedMismatch)
            }
            Some(_) => Ok(()),
        }
    }

    /// Full two-phase challenge: credential, then a confirmation describing
    /// the irreversible effect.
    pub fn authorize_destructive(
        &self,
        intent: &str,
        effect: &str,
        channel: &mut dyn ChallengeChannel,
    ) -> Result<(), GuardRejection> {
        self.authorize(intent, channel)?;
        if channel.confirm(effect) {
            Ok(())
        } else {
            Err(GuardRejection::CancelledAtConfirmation)
        }
    }
}
