//! Send form controller: one mutable message record and a send action.

use crossbeam_channel::Sender;
use shared::domain::SmsMessage;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{Notification, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

pub struct SendController {
    pub sms: SmsMessage,
    /// Raw comma separated recipients field, split on dispatch.
    pub recipients_input: String,
    notification: Option<Notification>,
}

impl Default for SendController {
    fn default() -> Self {
        Self::new()
    }
}

impl SendController {
    /// Starts with an empty record; nothing is loaded from the server.
    pub fn new() -> Self {
        Self {
            sms: SmsMessage::default(),
            recipients_input: String::new(),
            notification: None,
        }
    }

    /// Sends the current record as-is with empty path parameters. No
    /// client-side validation of recipients or message body.
    pub fn send_sms(&mut self, cmd_tx: &Sender<BackendCommand>, status: &mut String) {
        self.sms.recipients = parse_recipients(&self.recipients_input);
        dispatch_backend_command(
            cmd_tx,
            BackendCommand::SendSms {
                sms: self.sms.clone(),
            },
            status,
        );
    }

    pub fn handle_event(&mut self, event: &UiEvent) {
        match event {
            UiEvent::SmsSent => {
                self.notification = Some(Notification::success("sms.header.success", "sms.sent"));
            }
            UiEvent::SmsSendFailed { detail } => {
                self.notification = Some(Notification::error(
                    "sms.header.error",
                    "server.error",
                    detail.clone(),
                ));
            }
            _ => {}
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}

/// Splits the free-form field without filtering; empty segments travel to
/// the server unchanged, since the record is sent as-is.
fn parse_recipients(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(|part| part.trim().to_string()).collect()
}
