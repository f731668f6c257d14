//! App shell: nav strip, per-route controller lifetime, notification
//! banner, and the send/settings form views.

use std::sync::Arc;
use std::time::Duration;

use client_core::SmsGateway;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{Notification, NotificationKind, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::send::SendController;
use crate::controller::settings::SettingsController;
use crate::i18n::translate;
use crate::routes::Route;

/// Controller for the active route. Dropped on navigation away, so each
/// visit starts from the contract's initial state.
enum ActiveView {
    Send(SendController),
    Settings(SettingsController),
}

pub struct SmsConsoleApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    gateway: Arc<dyn SmsGateway>,
    route: Route,
    view: ActiveView,
    status: String,
}

impl SmsConsoleApp {
    pub fn new(
        gateway: Arc<dyn SmsGateway>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        initial_route: Route,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            gateway,
            route: Route::Send,
            view: ActiveView::Send(SendController::new()),
            status: "Starting".to_string(),
        };
        app.activate_route(initial_route);
        app
    }

    /// Drops the outgoing controller and constructs the incoming one. The
    /// settings controller reads the gateway's cached accessor synchronously;
    /// a background refresh is queued on top of it.
    fn activate_route(&mut self, route: Route) {
        self.route = route;
        self.view = match route {
            Route::Send => ActiveView::Send(SendController::new()),
            Route::Settings => {
                let controller = SettingsController::new(self.gateway.settings());
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::LoadSettings,
                    &mut self.status,
                );
                ActiveView::Settings(controller)
            }
        };
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            if let UiEvent::Info(message) = &event {
                self.status = message.clone();
            }
            match &mut self.view {
                ActiveView::Send(controller) => controller.handle_event(&event),
                ActiveView::Settings(controller) => controller.handle_event(&event),
            }
        }
    }

    fn show_send_form(&mut self, ui: &mut egui::Ui) {
        let Self {
            view,
            cmd_tx,
            status,
            ..
        } = self;
        let ActiveView::Send(controller) = view else {
            return;
        };

        if let Some(notification) = controller.notification().cloned() {
            if notification_banner(ui, &notification) {
                controller.dismiss_notification();
            }
            ui.add_space(6.0);
        }

        ui.label(egui::RichText::new(translate("sms.send.recipients")).strong());
        ui.add(
            egui::TextEdit::singleline(&mut controller.recipients_input)
                .hint_text(translate("sms.send.recipients.hint"))
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);
        ui.label(egui::RichText::new(translate("sms.send.message")).strong());
        ui.add(
            egui::TextEdit::multiline(&mut controller.sms.message)
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);
        if ui.button(translate("sms.send.button")).clicked() {
            controller.send_sms(cmd_tx, status);
        }
    }

    fn show_settings_form(&mut self, ui: &mut egui::Ui) {
        let Self {
            view,
            cmd_tx,
            status,
            ..
        } = self;
        let ActiveView::Settings(controller) = view else {
            return;
        };

        if let Some(notification) = controller.notification().cloned() {
            if notification_banner(ui, &notification) {
                controller.dismiss_notification();
            }
            ui.add_space(6.0);
        }

        bool_string_checkbox(
            ui,
            &mut controller.settings.log_incoming_sms,
            translate("sms.settings.log.incoming"),
        );
        bool_string_checkbox(
            ui,
            &mut controller.settings.log_outgoing_sms,
            translate("sms.settings.log.outgoing"),
        );
        bool_string_checkbox(
            ui,
            &mut controller.settings.log_delivery_status,
            translate("sms.settings.log.delivery"),
        );

        ui.separator();
        bool_string_checkbox(
            ui,
            &mut controller.settings.log_purge_enable,
            translate("sms.settings.log.purge"),
        );

        let purge_disabled = controller.purge_time_controls_disabled();
        let multipliers = controller.time_multipliers().to_vec();
        let selected_label = controller
            .time_multiplier(controller.settings.log_purge_time_unit)
            .to_string();
        ui.add_enabled_ui(!purge_disabled, |ui| {
            ui.horizontal(|ui| {
                ui.label(translate("sms.settings.log.purge.every"));
                ui.add(
                    egui::TextEdit::singleline(&mut controller.settings.log_purge_time_value)
                        .desired_width(60.0),
                );
                egui::ComboBox::from_id_source("purge_time_unit")
                    .selected_text(selected_label)
                    .show_ui(ui, |ui| {
                        for (unit, label) in &multipliers {
                            ui.selectable_value(
                                &mut controller.settings.log_purge_time_unit,
                                *unit,
                                label,
                            );
                        }
                    });
            });
            if !controller.is_numeric("logPurgeTimeValue") {
                ui.label(
                    egui::RichText::new(translate("sms.settings.validation.numeric"))
                        .color(egui::Color32::LIGHT_RED)
                        .small(),
                );
            }
        });

        ui.add_space(8.0);
        if ui.button(translate("sms.settings.submit")).clicked() {
            controller.submit(cmd_tx, status);
        }
    }
}

impl eframe::App for SmsConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut nav_target = None;
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("SMS");
                ui.separator();
                for route in Route::ALL {
                    let selected = self.route == route;
                    if ui
                        .selectable_label(selected, translate(route.label_key()))
                        .clicked()
                        && !selected
                    {
                        nav_target = Some(route);
                    }
                }
            });
        });
        if let Some(route) = nav_target {
            self.activate_route(route);
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.route {
            Route::Send => self.show_send_form(ui),
            Route::Settings => self.show_settings_form(ui),
        });

        // The worker pushes events over a channel, so keep polling.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

/// Renders the notification banner; returns true when dismissed.
fn notification_banner(ui: &mut egui::Ui, notification: &Notification) -> bool {
    let (fill, stroke) = match notification.kind {
        NotificationKind::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
        ),
        NotificationKind::Success => (
            egui::Color32::from_rgb(47, 92, 57),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(88, 153, 102)),
        ),
    };

    let mut dismissed = false;
    egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(10.0, 8.0))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{}: {}",
                        translate(notification.header_key),
                        translate(notification.body_key)
                    ))
                    .color(egui::Color32::WHITE)
                    .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });
            if let Some(detail) = &notification.detail {
                ui.label(
                    egui::RichText::new(detail)
                        .color(egui::Color32::WHITE)
                        .weak()
                        .small(),
                );
            }
        });
    dismissed
}

/// Binds a checkbox to a boolean-as-string settings field.
fn bool_string_checkbox(ui: &mut egui::Ui, value: &mut String, label: &str) {
    let mut checked = value == "true";
    if ui.checkbox(&mut checked, label).changed() {
        *value = if checked { "true" } else { "false" }.to_string();
    }
}
