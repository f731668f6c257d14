use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outgoing SMS form record. Created empty when the send view activates and
/// dropped on navigation away; the data of record lives server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsMessage {
    pub recipients: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
    ];

    /// Wire/key form of the unit, matching the serialized representation.
    pub fn key(self) -> &'static str {
        match self {
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }
}

/// Delivery-log settings record owned by the remote settings store. The
/// toggle fields are boolean-as-string ("true"/"false"), matching the
/// server's settings representation; `extras` round-trips any additional
/// server-defined properties unchanged. The client replaces this record
/// wholesale on every load and after every successful save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SmsSettings {
    pub log_incoming_sms: String,
    pub log_outgoing_sms: String,
    pub log_delivery_status: String,
    pub log_purge_enable: String,
    pub log_purge_time_unit: TimeUnit,
    pub log_purge_time_value: String,
    #[serde(flatten)]
    pub extras: BTreeMap<String, serde_json::Value>,
}

impl Default for SmsSettings {
    fn default() -> Self {
        Self {
            log_incoming_sms: "false".to_string(),
            log_outgoing_sms: "false".to_string(),
            log_delivery_status: "false".to_string(),
            log_purge_enable: "false".to_string(),
            log_purge_time_unit: TimeUnit::Days,
            log_purge_time_value: String::new(),
            extras: BTreeMap::new(),
        }
    }
}

impl SmsSettings {
    /// String value of the named property, if the record carries one. Own
    /// fields are addressed by their wire names, server-defined extras by
    /// their map keys; non-string extras yield `None`.
    pub fn property(&self, prop: &str) -> Option<&str> {
        match prop {
            "logIncomingSms" => Some(&self.log_incoming_sms),
            "logOutgoingSms" => Some(&self.log_outgoing_sms),
            "logDeliveryStatus" => Some(&self.log_delivery_status),
            "logPurgeEnable" => Some(&self.log_purge_enable),
            "logPurgeTimeUnit" => Some(self.log_purge_time_unit.key()),
            "logPurgeTimeValue" => Some(&self.log_purge_time_value),
            _ => self.extras.get(prop).and_then(|value| value.as_str()),
        }
    }

    /// True iff the record has the named property and its string value is
    /// all digits. Display-layer validity check only; the server stays
    /// authoritative.
    pub fn is_numeric(&self, prop: &str) -> bool {
        self.property(prop)
            .map(|value| !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or(false)
    }

    /// Gate for the purge-interval form controls: enabled only when
    /// `logPurgeEnable` is exactly the string "true" (case-sensitive).
    pub fn purge_time_controls_disabled(&self) -> bool {
        self.log_purge_enable != "true"
    }
}
