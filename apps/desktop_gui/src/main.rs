mod backend_bridge;
mod controller;
mod i18n;
mod routes;
mod ui;

use std::sync::Arc;

use clap::Parser;
use client_core::{HttpSmsGateway, SmsGateway};
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::routes::Route;
use crate::ui::SmsConsoleApp;

#[derive(Parser, Debug)]
struct Args {
    /// SMS gateway base URL. `SMS_SERVER_URL` overrides when set.
    #[arg(long, default_value = "http://127.0.0.1:8443")]
    server_url: String,
    /// Startup route path. Unmatched paths fall back to /send.
    #[arg(long, default_value = "/send")]
    route: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let server_url =
        std::env::var("SMS_SERVER_URL").unwrap_or_else(|_| args.server_url.clone());
    let gateway: Arc<dyn SmsGateway> = match HttpSmsGateway::new(&server_url) {
        Ok(gateway) => Arc::new(gateway),
        Err(err) => {
            tracing::error!(url = %server_url, error = %err, "invalid gateway url");
            std::process::exit(2);
        }
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(Arc::clone(&gateway), cmd_rx, ui_tx);

    let initial_route = Route::parse(&args.route);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SMS Console")
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([560.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "SMS Console",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SmsConsoleApp::new(
                gateway,
                cmd_tx,
                ui_rx,
                initial_route,
            )))
        }),
    )
}
