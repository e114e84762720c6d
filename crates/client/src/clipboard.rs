//! Clipboard collaborator for receipt and referral-code copy actions.

use std::sync::{Mutex, PoisonError};

use cards2cash_events::{Notification, Notifier};

use crate::error::ClipboardError;

pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard. Can be built in a failing mode to mimic a browser
/// that denies clipboard access.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    deny_reason: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(None),
            deny_reason: Some(reason.into()),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(reason) = &self.deny_reason {
            return Err(ClipboardError::Unavailable(reason.clone()));
        }
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
        Ok(())
    }
}

/// Copy `text` and tell the user how it went.
///
/// `label` names what was copied, e.g. `"Referral code"`. Returns whether
/// the copy succeeded.
pub fn copy_with_notice(
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
    label: &str,
    text: &str,
) -> bool {
    match clipboard.copy(text) {
        Ok(()) => {
            notifier.notify(Notification::success(
                "Copied",
                format!("{label} copied to clipboard"),
            ));
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, label, "Clipboard copy failed");
            notifier.notify(Notification::error(
                "Copy failed",
                format!("Could not copy {}", label.to_lowercase()),
            ));
            false
        }
    }
}
