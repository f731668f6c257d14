//! Settings form controller: cached settings record, unit-label mapping,
//! submit action, and the two display-state query helpers.

use crossbeam_channel::Sender;
use shared::domain::{SmsSettings, TimeUnit};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{Notification, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::i18n::translate;

pub struct SettingsController {
    pub settings: SmsSettings,
    /// Fixed unit-to-label mapping, computed once at construction from the
    /// locale catalog.
    time_multipliers: Vec<(TimeUnit, String)>,
    notification: Option<Notification>,
}

impl SettingsController {
    /// Takes the current record from the gateway's cached accessor.
    pub fn new(current: SmsSettings) -> Self {
        let time_multipliers = TimeUnit::ALL
            .iter()
            .map(|unit| {
                let key = format!("sms.settings.log.units.{}", unit.key());
                (*unit, translate(&key).to_string())
            })
            .collect();
        Self {
            settings: current,
            time_multipliers,
            notification: None,
        }
    }

    pub fn time_multipliers(&self) -> &[(TimeUnit, String)] {
        &self.time_multipliers
    }

    pub fn time_multiplier(&self, unit: TimeUnit) -> &str {
        self.time_multipliers
            .iter()
            .find(|(candidate, _)| *candidate == unit)
            .map(|(_, label)| label.as_str())
            .unwrap_or(unit.key())
    }

    /// Sends the current settings record with empty path parameters. On
    /// success the worker acknowledges first and then pushes the reloaded
    /// record, so the notification lands before the form changes.
    pub fn submit(&mut self, cmd_tx: &Sender<BackendCommand>, status: &mut String) {
        dispatch_backend_command(
            cmd_tx,
            BackendCommand::SaveSettings {
                settings: self.settings.clone(),
            },
            status,
        );
    }

    pub fn handle_event(&mut self, event: &UiEvent) {
        match event {
            UiEvent::SettingsSaved => {
                self.notification = Some(Notification::success(
                    "sms.header.success",
                    "sms.settings.saved",
                ));
            }
            UiEvent::SettingsLoaded(settings) => {
                // Wholesale replacement, discarding any unsaved edits.
                self.settings = settings.clone();
            }
            UiEvent::SettingsSaveFailed { detail } => {
                self.notification = Some(Notification::error(
                    "sms.header.error",
                    "server.error",
                    detail.clone(),
                ));
            }
            _ => {}
        }
    }

    /// Validation-state display only; see [`SmsSettings::is_numeric`].
    pub fn is_numeric(&self, prop: &str) -> bool {
        self.settings.is_numeric(prop)
    }

    pub fn purge_time_controls_disabled(&self) -> bool {
        self.settings.purge_time_controls_disabled()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::NotificationKind;

    fn edited_settings() -> SmsSettings {
        SmsSettings {
            log_purge_enable: "true".to_string(),
            log_purge_time_unit: TimeUnit::Months,
            log_purge_time_value: "6".to_string(),
            ..SmsSettings::default()
        }
    }

    #[test]
    fn unit_labels_are_built_once_from_the_catalog() {
        let controller = SettingsController::new(SmsSettings::default());
        assert_eq!(controller.time_multipliers().len(), TimeUnit::ALL.len());
        assert_eq!(controller.time_multiplier(TimeUnit::Hours), "Hours");
        assert_eq!(controller.time_multiplier(TimeUnit::Years), "Years");
    }

    #[test]
    fn query_helpers_delegate_to_the_record() {
        let mut controller = SettingsController::new(edited_settings());
        assert!(controller.is_numeric("logPurgeTimeValue"));
        assert!(!controller.is_numeric("missingProperty"));
        assert!(!controller.purge_time_controls_disabled());

        controller.settings.log_purge_enable = "True".to_string();
        assert!(controller.purge_time_controls_disabled());
    }

    #[test]
    fn save_acknowledgement_precedes_the_reload() {
        let mut controller = SettingsController::new(edited_settings());

        controller.handle_event(&UiEvent::SettingsSaved);
        let notification = controller.notification().expect("notification").clone();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.header_key, "sms.header.success");
        assert_eq!(notification.body_key, "sms.settings.saved");
        // The form still shows the submitted edits at notification time.
        assert_eq!(controller.settings, edited_settings());

        let mut reloaded = SmsSettings::default();
        reloaded.log_purge_time_value = "12".to_string();
        controller.handle_event(&UiEvent::SettingsLoaded(reloaded.clone()));
        assert_eq!(controller.settings, reloaded);
        // Reload does not disturb the already-raised notification.
        assert_eq!(controller.notification(), Some(&notification));
    }

    #[test]
    fn reload_overwrites_unsaved_edits_wholesale() {
        let mut controller = SettingsController::new(SmsSettings::default());
        controller.settings.log_incoming_sms = "true".to_string();
        controller.settings.log_purge_time_value = "99".to_string();

        controller.handle_event(&UiEvent::SettingsLoaded(SmsSettings::default()));
        assert_eq!(controller.settings, SmsSettings::default());
    }

    #[test]
    fn failed_save_raises_the_generic_error_notification() {
        let mut controller = SettingsController::new(edited_settings());
        controller.handle_event(&UiEvent::SettingsSaveFailed {
            detail: "503: unavailable".to_string(),
        });

        let notification = controller.notification().expect("notification");
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.header_key, "sms.header.error");
        assert_eq!(notification.body_key, "server.error");
        assert_eq!(notification.detail.as_deref(), Some("503: unavailable"));
    }

    #[test]
    fn submit_queues_the_current_record() {
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(4);
        let mut status = String::new();
        let mut controller = SettingsController::new(edited_settings());

        controller.submit(&cmd_tx, &mut status);

        let BackendCommand::SaveSettings { settings } =
            cmd_rx.try_recv().expect("command queued")
        else {
            panic!("expected a save command");
        };
        assert_eq!(settings, edited_settings());
    }
}
