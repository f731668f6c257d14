//! Runtime bridge: a dedicated thread owns a tokio runtime and loops on the
//! UI command queue, driving the gateway and replying with [`UiEvent`]s.

use std::{sync::Arc, thread};

use client_core::SmsGateway;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    gateway: Arc<dyn SmsGateway>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || run_worker(gateway, cmd_rx, ui_tx));
}

fn run_worker(
    gateway: Arc<dyn SmsGateway>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "Backend worker startup failure: {err}"
            )));
            tracing::error!("failed to build backend runtime: {err}");
            return;
        }
    };

    runtime.block_on(async move {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::SendSms { sms } => match gateway.send_sms(&sms).await {
                    Ok(()) => {
                        let _ = ui_tx.try_send(UiEvent::SmsSent);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "sms send failed");
                        let _ = ui_tx.try_send(UiEvent::SmsSendFailed {
                            detail: err.detail(),
                        });
                    }
                },
                BackendCommand::LoadSettings => match gateway.refresh_settings().await {
                    Ok(settings) => {
                        let _ = ui_tx.try_send(UiEvent::SettingsLoaded(settings));
                    }
                    Err(err) => {
                        // Best-effort refresh: the cached accessor already
                        // answered the view, so this only hits the status line.
                        tracing::warn!(error = %err, "settings refresh failed");
                        let _ = ui_tx.try_send(UiEvent::Info(format!(
                            "Settings refresh failed: {err}"
                        )));
                    }
                },
                BackendCommand::SaveSettings { settings } => {
                    match gateway.save_settings(&settings).await {
                        Ok(()) => {
                            // The acknowledgement must reach the UI before the
                            // reload replaces the form model.
                            let _ = ui_tx.try_send(UiEvent::SettingsSaved);
                            match gateway.refresh_settings().await {
                                Ok(latest) => {
                                    let _ = ui_tx.try_send(UiEvent::SettingsLoaded(latest));
                                }
                                Err(err) => {
                                    tracing::warn!(error = %err, "post-save settings reload failed");
                                    let _ = ui_tx.try_send(UiEvent::Info(format!(
                                        "Settings reload failed: {err}"
                                    )));
                                }
                            }
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "settings save failed");
                            let _ = ui_tx.try_send(UiEvent::SettingsSaveFailed {
                                detail: err.detail(),
                            });
                        }
                    }
                }
            }
        }
    });
}
