//! Events flowing from the backend worker to the UI thread, and the single
//! notification surface both controllers report through.

use shared::domain::SmsSettings;

#[derive(Debug, Clone)]
pub enum UiEvent {
    SmsSent,
    SmsSendFailed { detail: String },
    /// Fresh settings value; the form model is replaced wholesale.
    SettingsLoaded(SmsSettings),
    /// Save acknowledged. Always emitted before the follow-up
    /// `SettingsLoaded`, so the success notification precedes the reload.
    SettingsSaved,
    SettingsSaveFailed { detail: String },
    /// Status-line text with no notification semantics.
    Info(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// One mechanism for both outcomes: a result-kind tag plus message-catalog
/// keys, with the forwarded server diagnostic on errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub header_key: &'static str,
    pub body_key: &'static str,
    pub detail: Option<String>,
}

impl Notification {
    pub fn success(header_key: &'static str, body_key: &'static str) -> Self {
        Self {
            kind: NotificationKind::Success,
            header_key,
            body_key,
            detail: None,
        }
    }

    pub fn error(
        header_key: &'static str,
        body_key: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind: NotificationKind::Error,
            header_key,
            body_key,
            detail: Some(detail.into()),
        }
    }
}
