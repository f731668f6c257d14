use super::*;
use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use shared::domain::TimeUnit;
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex as AsyncMutex},
    time::timeout,
};

#[derive(Clone)]
struct GatewayState {
    sent: Arc<AsyncMutex<Option<oneshot::Sender<SmsMessage>>>>,
    saved: Arc<AsyncMutex<Option<oneshot::Sender<SmsSettings>>>>,
    settings_body: SmsSettings,
    fail_send: Option<(StatusCode, ApiError)>,
    fail_save_with_text: bool,
}

impl GatewayState {
    fn ok(settings_body: SmsSettings) -> Self {
        Self {
            sent: Arc::new(AsyncMutex::new(None)),
            saved: Arc::new(AsyncMutex::new(None)),
            settings_body,
            fail_send: None,
            fail_save_with_text: false,
        }
    }

    async fn capture_send(&self) -> oneshot::Receiver<SmsMessage> {
        let (tx, rx) = oneshot::channel();
        *self.sent.lock().await = Some(tx);
        rx
    }

    async fn capture_save(&self) -> oneshot::Receiver<SmsSettings> {
        let (tx, rx) = oneshot::channel();
        *self.saved.lock().await = Some(tx);
        rx
    }
}

async fn handle_send(
    State(state): State<GatewayState>,
    Json(payload): Json<SmsMessage>,
) -> axum::response::Response {
    if let Some(tx) = state.sent.lock().await.take() {
        let _ = tx.send(payload);
    }
    match &state.fail_send {
        Some((status, body)) => (*status, Json(body.clone())).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

async fn handle_get_settings(State(state): State<GatewayState>) -> Json<SmsSettings> {
    Json(state.settings_body.clone())
}

async fn handle_save_settings(
    State(state): State<GatewayState>,
    Json(payload): Json<SmsSettings>,
) -> axum::response::Response {
    if let Some(tx) = state.saved.lock().await.take() {
        let _ = tx.send(payload);
    }
    if state.fail_save_with_text {
        (StatusCode::INTERNAL_SERVER_ERROR, "gateway exploded").into_response()
    } else {
        StatusCode::OK.into_response()
    }
}

async fn spawn_gateway(state: GatewayState) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = Router::new()
        .route("/send", post(handle_send))
        .route("/settings", get(handle_get_settings).post(handle_save_settings))
        .with_state(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn sample_settings() -> SmsSettings {
    let mut settings = SmsSettings {
        log_incoming_sms: "true".to_string(),
        log_outgoing_sms: "true".to_string(),
        log_delivery_status: "false".to_string(),
        log_purge_enable: "true".to_string(),
        log_purge_time_unit: TimeUnit::Weeks,
        log_purge_time_value: "2".to_string(),
        ..SmsSettings::default()
    };
    settings
        .extras
        .insert("defaultConfig".to_string(), serde_json::json!("plivo"));
    settings
}

#[tokio::test(flavor = "multi_thread")]
async fn send_sms_posts_record_verbatim() {
    let state = GatewayState::ok(SmsSettings::default());
    let captured = state.capture_send().await;
    let url = spawn_gateway(state).await;

    let gateway = HttpSmsGateway::new(&url).expect("gateway");
    let sms = SmsMessage {
        recipients: vec!["+15551230001".to_string(), "+15551230002".to_string()],
        message: "checkup reminder".to_string(),
    };
    gateway.send_sms(&sms).await.expect("send");

    let posted = timeout(Duration::from_secs(5), captured)
        .await
        .expect("capture timeout")
        .expect("capture");
    assert_eq!(posted, sms);
}

#[tokio::test(flavor = "multi_thread")]
async fn send_sms_sends_empty_record_as_is() {
    let state = GatewayState::ok(SmsSettings::default());
    let captured = state.capture_send().await;
    let url = spawn_gateway(state).await;

    let gateway = HttpSmsGateway::new(&url).expect("gateway");
    gateway.send_sms(&SmsMessage::default()).await.expect("send");

    let posted = timeout(Duration::from_secs(5), captured)
        .await
        .expect("capture timeout")
        .expect("capture");
    assert!(posted.recipients.is_empty());
    assert!(posted.message.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn send_sms_surfaces_server_error_with_trace_detail() {
    let mut state = GatewayState::ok(SmsSettings::default());
    state.fail_send = Some((
        StatusCode::INTERNAL_SERVER_ERROR,
        ApiError::new(ErrorCode::Internal, "provider rejected the message")
            .with_trace("java.lang.RuntimeException: boom"),
    ));
    let url = spawn_gateway(state).await;

    let gateway = HttpSmsGateway::new(&url).expect("gateway");
    let err = gateway
        .send_sms(&SmsMessage::default())
        .await
        .expect_err("must fail");

    match &err {
        GatewayError::Server { status, error } => {
            assert_eq!(*status, 500);
            assert_eq!(error.message, "provider rejected the message");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
    let detail = err.detail();
    assert!(detail.contains("provider rejected the message"));
    assert!(detail.contains("java.lang.RuntimeException: boom"));
}

#[test]
fn settings_accessor_yields_default_before_first_refresh() {
    let gateway = HttpSmsGateway::new("http://127.0.0.1:9").expect("gateway");
    assert_eq!(gateway.settings(), SmsSettings::default());
}

#[tokio::test(flavor = "multi_thread")]
async fn refresh_settings_replaces_cache_wholesale() {
    let url = spawn_gateway(GatewayState::ok(sample_settings())).await;

    let gateway = HttpSmsGateway::new(&url).expect("gateway");
    assert_eq!(gateway.settings(), SmsSettings::default());

    let fetched = gateway.refresh_settings().await.expect("refresh");
    assert_eq!(fetched, sample_settings());
    assert_eq!(gateway.settings(), fetched);
    assert_eq!(gateway.settings().property("defaultConfig"), Some("plivo"));
}

#[tokio::test(flavor = "multi_thread")]
async fn save_settings_posts_record_and_decodes_plain_text_failure() {
    let mut state = GatewayState::ok(SmsSettings::default());
    state.fail_save_with_text = true;
    let captured = state.capture_save().await;
    let url = spawn_gateway(state).await;

    let gateway = HttpSmsGateway::new(&url).expect("gateway");
    let err = gateway
        .save_settings(&sample_settings())
        .await
        .expect_err("must fail");

    let posted = timeout(Duration::from_secs(5), captured)
        .await
        .expect("capture timeout")
        .expect("capture");
    assert_eq!(posted, sample_settings());

    match err {
        GatewayError::Server { status, error } => {
            assert_eq!(status, 500);
            assert!(error.message.contains("gateway exploded"));
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}
