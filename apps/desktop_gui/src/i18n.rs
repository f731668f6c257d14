//! Locale message catalog. Notification headers/bodies, form labels, and
//! the time-unit display names all resolve through [`translate`].

/// Looks up a message key in the current locale catalog. Unknown keys render
/// as the key itself so a missing entry is visible instead of silent.
pub fn translate(key: &str) -> &str {
    match key {
        "sms.route.send" => "Send SMS",
        "sms.route.settings" => "Settings",

        "sms.header.success" => "Success",
        "sms.header.error" => "Error",
        "sms.sent" => "The SMS has been sent.",
        "sms.settings.saved" => "SMS settings saved.",
        "server.error" => "The server responded with an error.",

        "sms.send.recipients" => "Recipients",
        "sms.send.recipients.hint" => "Comma separated phone numbers",
        "sms.send.message" => "Message",
        "sms.send.button" => "Send",

        "sms.settings.log.incoming" => "Log incoming SMS",
        "sms.settings.log.outgoing" => "Log outgoing SMS",
        "sms.settings.log.delivery" => "Log delivery status",
        "sms.settings.log.purge" => "Purge old log records",
        "sms.settings.log.purge.every" => "Purge every",
        "sms.settings.validation.numeric" => "Enter a whole number",
        "sms.settings.submit" => "Save settings",

        "sms.settings.log.units.hours" => "Hours",
        "sms.settings.log.units.days" => "Days",
        "sms.settings.log.units.weeks" => "Weeks",
        "sms.settings.log.units.months" => "Months",
        "sms.settings.log.units.years" => "Years",

        other => other,
    }
}
