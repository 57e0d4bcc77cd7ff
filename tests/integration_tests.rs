use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use concierge::config::AppConfig;
use concierge::handlers;
use concierge::models::{BookingEvent, BookingStatus};
use concierge::services::seed;
use concierge::state::AppState;

// ── Helpers ──

fn test_config() -> AppConfig {
    AppConfig {
        port: 3000,
        submit_delay: Duration::ZERO,
        seed_demo_data: false,
        event_buffer: 16,
    }
}

fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(test_config()))
}

fn seeded_state() -> Arc<AppState> {
    let state = test_state();
    {
        let mut store = state.store();
        let mut chat = state.chat();
        seed::seed(&mut store, &mut chat).unwrap();
    }
    state
}

fn test_app(state: Arc<AppState>) -> Router {
    handlers::router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(res: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn ada_form() -> serde_json::Value {
    serde_json::json!({
        "guest_name": "Ada",
        "phone": "+1-555",
        "pickup_location": "Lobby",
        "date": "2025-01-01",
        "time": "09:00",
        "booking_type": "hourly",
        "duration": "4"
    })
}

async fn create(state: &Arc<AppState>, form: serde_json::Value) -> serde_json::Value {
    let res = test_app(state.clone())
        .oneshot(post_json("/api/bookings", form))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    json_body(res).await
}

// ── Booking creation ──

#[tokio::test]
async fn test_health() {
    let res = test_app(test_state()).oneshot(get("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_create_hourly_booking() {
    let state = test_state();
    let json = create(&state, ada_form()).await;

    assert_eq!(json["booking_type"], "hourly");
    assert_eq!(json["duration"], "4");
    assert_eq!(json["status"], "confirmed");
    assert_eq!(json["passengers"], 1);
    assert!(json.get("dropoff_location").is_none());
    assert!(json["reference"].as_str().unwrap().starts_with("BKG-"));
    assert_eq!(state.store().len(), 1);
}

#[tokio::test]
async fn test_create_multi_stop_filters_blank_stops() {
    let state = test_state();
    let mut form = ada_form();
    form["booking_type"] = "multi-stop".into();
    form["stops"] = serde_json::json!(["A", "", "  ", "B"]);

    let json = create(&state, form).await;
    assert_eq!(json["stops"], serde_json::json!(["A", "B"]));
}

#[tokio::test]
async fn test_create_missing_fields_rejected() {
    let state = test_state();
    let res = test_app(state.clone())
        .oneshot(post_json(
            "/api/bookings",
            serde_json::json!({"guest_name": "Ada", "date": "2025-01-01"}),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(res).await;
    assert_eq!(
        json["missing"],
        serde_json::json!(["phone", "pickup_location", "time"])
    );
    assert!(state.store().is_empty());
}

#[tokio::test]
async fn test_create_invalid_vehicle_rejected() {
    let state = test_state();
    let mut form = ada_form();
    form["vehicle_class"] = "hovercraft".into();

    let res = test_app(state.clone())
        .oneshot(post_json("/api/bookings", form))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(res).await;
    assert_eq!(json["invalid"], serde_json::json!(["vehicle_class"]));
}

#[tokio::test]
async fn test_concurrent_submission_rejected_while_busy() {
    let mut config = test_config();
    config.submit_delay = Duration::from_millis(300);
    let state = Arc::new(AppState::new(config));

    let first = {
        let app = test_app(state.clone());
        tokio::spawn(async move { app.oneshot(post_json("/api/bookings", ada_form())).await })
    };
    while !state.form.is_submitting() {
        tokio::task::yield_now().await;
    }

    let res = test_app(state.clone())
        .oneshot(post_json("/api/bookings", ada_form()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = first.await.unwrap().unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(state.store().len(), 1);
    assert!(!state.form.is_submitting());
}

// ── Listing ──

#[tokio::test]
async fn test_new_bookings_listed_first() {
    let state = seeded_state();
    let created = create(&state, ada_form()).await;

    let res = test_app(state).oneshot(get("/api/bookings")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(list[0]["reference"], created["reference"]);
    assert_eq!(list[1]["reference"], "BKG-ABC123");
}

#[tokio::test]
async fn test_list_filters() {
    let state = seeded_state();

    let res = test_app(state.clone())
        .oneshot(get("/api/bookings?status=pending"))
        .await
        .unwrap();
    let json = json_body(res).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["reference"], "BKG-GHI789");

    let res = test_app(state.clone())
        .oneshot(get("/api/bookings?date=2025-12-23&limit=1"))
        .await
        .unwrap();
    let json = json_body(res).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["reference"], "BKG-ABC123");

    let res = test_app(state)
        .oneshot(get("/api/bookings?status=cancelled"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_booking() {
    let state = seeded_state();
    let res = test_app(state.clone())
        .oneshot(get("/api/bookings/BKG-JKL012"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    assert_eq!(json["vehicle_class"], "coaster");
    assert_eq!(json["stops"].as_array().unwrap().len(), 3);

    let res = test_app(state)
        .oneshot(get("/api/bookings/BKG-MISSING"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// ── Status transitions ──

#[tokio::test]
async fn test_pending_cannot_skip_to_dispatched() {
    let state = seeded_state();
    let res = test_app(state.clone())
        .oneshot(post_json(
            "/api/bookings/BKG-GHI789/status",
            serde_json::json!({"status": "dispatched"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(
        state.store().get("BKG-GHI789").unwrap().status,
        BookingStatus::Pending
    );
}

#[tokio::test]
async fn test_confirmed_to_dispatched() {
    let state = seeded_state();
    let res = test_app(state.clone())
        .oneshot(post_json(
            "/api/bookings/BKG-ABC123/status",
            serde_json::json!({"status": "dispatched"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    assert_eq!(json["status"], "dispatched");
    assert_eq!(
        state.store().get("BKG-ABC123").unwrap().status,
        BookingStatus::Dispatched
    );
}

#[tokio::test]
async fn test_advance_to_completed_then_terminal() {
    let state = seeded_state();
    for expected in ["in-progress", "completed"] {
        let res = test_app(state.clone())
            .oneshot(post_json(
                "/api/bookings/BKG-DEF456/advance",
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        assert_eq!(json["status"], expected);
    }

    let res = test_app(state.clone())
        .oneshot(post_json(
            "/api/bookings/BKG-DEF456/advance",
            serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = test_app(state)
        .oneshot(post_json(
            "/api/bookings/BKG-DEF456/status",
            serde_json::json!({"status": "pending"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_status_update_unknown_reference() {
    let res = test_app(test_state())
        .oneshot(post_json(
            "/api/bookings/BKG-NOPE/status",
            serde_json::json!({"status": "confirmed"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// ── Summaries ──

#[tokio::test]
async fn test_list_summary_tracks_changes() {
    let state = seeded_state();
    let res = test_app(state.clone())
        .oneshot(get("/api/bookings/summary"))
        .await
        .unwrap();
    let json = json_body(res).await;
    assert_eq!(json["total"], 4);
    assert_eq!(json["confirmed"], 2);
    assert_eq!(json["pending"], 1);
    assert_eq!(json["in_progress"], 1);
    assert_eq!(json["finished"], 0);

    state
        .store()
        .update_status("BKG-GHI789", BookingStatus::Confirmed)
        .unwrap();

    let res = test_app(state)
        .oneshot(get("/api/bookings/summary"))
        .await
        .unwrap();
    let json = json_body(res).await;
    assert_eq!(json["confirmed"], 3);
    assert_eq!(json["pending"], 0);
}

#[tokio::test]
async fn test_dashboard_counts_today() {
    let state = test_state();
    let mut form = ada_form();
    form["date"] = chrono::Utc::now().format("%Y-%m-%d").to_string().into();
    create(&state, form).await;
    create(&state, ada_form()).await;

    let res = test_app(state).oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    assert_eq!(json["today"], 1);
    assert_eq!(json["pending"], 0);
    assert_eq!(json["active"], 2);
}

// ── Analytics role gating ──

#[tokio::test]
async fn test_analytics_denied_for_staff() {
    let state = seeded_state();
    let res = test_app(state.clone())
        .oneshot(get("/api/analytics"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = test_app(state)
        .oneshot(
            Request::builder()
                .uri("/api/analytics")
                .header("x-operator-role", "staff")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_analytics_for_admin() {
    let state = seeded_state();
    let res = test_app(state)
        .oneshot(
            Request::builder()
                .uri("/api/analytics")
                .header("x-operator-role", "admin")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    assert_eq!(json["by_status"]["dispatched"], 1);
    assert_eq!(json["by_booking_type"]["multi-stop"], 1);
    assert_eq!(json["by_guest_category"]["vip"], 2);
    assert_eq!(json["total_passengers"], 22);
    assert_eq!(json["child_seat_requests"], 1);
}

// ── Driver chat ──

#[tokio::test]
async fn test_chat_send_and_history() {
    let state = seeded_state();

    for blank in ["", "   "] {
        let res = test_app(state.clone())
            .oneshot(post_json(
                "/api/bookings/BKG-ABC123/chat",
                serde_json::json!({"text": blank}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        assert_eq!(json["sent"], false);
    }

    let res = test_app(state.clone())
        .oneshot(post_json(
            "/api/bookings/BKG-ABC123/chat",
            serde_json::json!({"text": "Hello"}),
        ))
        .await
        .unwrap();
    let json = json_body(res).await;
    assert_eq!(json["sent"], true);
    assert_eq!(json["message"]["sender"], "staff");

    let res = test_app(state)
        .oneshot(get("/api/bookings/BKG-ABC123/chat"))
        .await
        .unwrap();
    let json = json_body(res).await;
    let history = json.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["content"], "Hello");
}

#[tokio::test]
async fn test_chat_unknown_booking() {
    let res = test_app(test_state())
        .oneshot(get("/api/bookings/BKG-NOPE/chat"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// ── Change notifications ──

#[tokio::test]
async fn test_events_published_on_changes() {
    let state = test_state();
    let mut rx = state.events_tx.subscribe();

    let created = create(&state, ada_form()).await;
    let reference = created["reference"].as_str().unwrap().to_string();

    test_app(state.clone())
        .oneshot(post_json(
            &format!("/api/bookings/{reference}/advance"),
            serde_json::json!({}),
        ))
        .await
        .unwrap();

    match rx.recv().await.unwrap() {
        BookingEvent::Created { booking } => assert_eq!(booking.reference, reference),
        other => panic!("unexpected event {other:?}"),
    }
    match rx.recv().await.unwrap() {
        BookingEvent::StatusChanged { from, to, .. } => {
            assert_eq!(from, BookingStatus::Confirmed);
            assert_eq!(to, BookingStatus::Dispatched);
        }
        other => panic!("unexpected event {other:?}"),
    }
}
