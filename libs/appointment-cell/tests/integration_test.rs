use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use appointment_cell::appointment_routes;
use patient_cell::patient_routes;
use shared_store::ClinicStore;

/// Both resource routers over one shared store, the way the api binary
/// composes them.
fn test_app() -> Router {
    let store = Arc::new(ClinicStore::new());
    Router::new()
        .nest("/api/v1/patients", patient_routes(store.clone()))
        .nest("/api/v1/appointments", appointment_routes(store))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_patient(app: &Router, name: &str, email: &str) -> u64 {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/patients",
            json!({ "name": name, "age": 35, "email": email }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["patient"]["id"].as_u64().unwrap()
}

#[tokio::test]
async fn patient_then_appointment_flow() {
    let app = test_app();
    let patient_id = create_patient(&app, "João Silva", "joao.silva@email.com").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/appointments",
            json!({
                "patient_id": patient_id,
                "doctor": "Dr. Santos",
                "date": "2025-07-10",
                "time": "10:00",
                "duration": 30,
                "notes": "Primeira consulta"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Appointment created successfully");
    let appointment = &body["appointment"];
    assert!(appointment["id"].as_u64().unwrap() >= 1);
    assert_eq!(appointment["patient_id"].as_u64().unwrap(), patient_id);
    assert_eq!(appointment["doctor"], "Dr. Santos");
    assert_eq!(appointment["date"], "2025-07-10");
    assert_eq!(appointment["time"], "10:00");

    let response = app.oneshot(get("/api/v1/appointments")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["appointments"][0]["patient_id"].as_u64().unwrap(), patient_id);
}

#[tokio::test]
async fn appointment_for_unknown_patient_is_rejected() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/appointments",
            json!({
                "patient_id": 999,
                "doctor": "Dr. Santos",
                "date": "2025-07-10",
                "time": "10:00"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], 422);
    assert!(body["error"]["details"].as_str().unwrap().contains("999"));

    // The rejected appointment must not have been stored.
    let response = app.oneshot(get("/api/v1/appointments")).await.unwrap();
    assert_eq!(body_json(response).await["total"], 0);
}

#[tokio::test]
async fn filters_combine_with_logical_and() {
    let app = test_app();
    let ana = create_patient(&app, "Ana", "ana@email.com").await;
    let bruno = create_patient(&app, "Bruno", "bruno@email.com").await;

    for (patient_id, date, time) in [
        (ana, "2025-07-10", "10:00"),
        (ana, "2025-07-11", "11:00"),
        (bruno, "2025-07-10", "14:30"),
    ] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/appointments",
                json!({
                    "patient_id": patient_id,
                    "doctor": "Dr. Santos",
                    "date": date,
                    "time": time
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/appointments?patient_id={ana}")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["total"], 2);

    let response = app
        .clone()
        .oneshot(get("/api/v1/appointments?date=2025-07-10"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["total"], 2);

    let response = app
        .clone()
        .oneshot(get(&format!(
            "/api/v1/appointments?patient_id={ana}&date=2025-07-10"
        )))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["appointments"][0]["time"], "10:00");
}

#[tokio::test]
async fn bad_query_parameters_are_rejected() {
    let app = test_app();

    for uri in [
        "/api/v1/appointments?patient_id=0",
        "/api/v1/appointments?patient_id=-3",
        "/api/v1/appointments?patient_id=abc",
        "/api/v1/appointments?date=10-07-2025",
        "/api/v1/appointments?date=2025-02-30",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], 400);
    }
}

#[tokio::test]
async fn invalid_time_is_reported_per_field() {
    let app = test_app();
    let patient_id = create_patient(&app, "Ana", "ana@email.com").await;

    let response = app
        .oneshot(post_json(
            "/api/v1/appointments",
            json!({
                "patient_id": patient_id,
                "doctor": "Dr. Santos",
                "date": "2025-07-10",
                "time": "25:00"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 1);
    assert_eq!(detail[0]["loc"], json!(["body", "time"]));
    assert_eq!(detail[0]["type"], "bad_format");
}
