//! Notifier adapters for the password-setup notice.

use std::sync::Mutex;

use backoffice_identity::PasswordNoticeSender;

/// Dev adapter: writes the notice to the structured log instead of
/// delivering it. The token is logged on purpose so a developer can
/// complete the flow locally.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordNoticeSender for LogNotifier {
    fn send_password_setup(&self, email: &str, token: &str) -> anyhow::Result<()> {
        tracing::info!(email = %email, token = %token, "password setup notice");
        Ok(())
    }
}

/// Test adapter: records every notice for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(email, token)` pairs in send order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// The token from the most recent notice, if any.
    pub fn last_token(&self) -> Option<String> {
        self.sent().last().map(|(_, token)| token.clone())
    }
}

impl PasswordNoticeSender for RecordingNotifier {
    fn send_password_setup(&self, email: &str, token: &str) -> anyhow::Result<()> {
        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((email.to_string(), token.to_string()));
        Ok(())
    }
}
