//! Backend commands queued from UI to the gateway worker.

use shared::domain::{SmsMessage, SmsSettings};

pub enum BackendCommand {
    SendSms { sms: SmsMessage },
    LoadSettings,
    SaveSettings { settings: SmsSettings },
}
