use std::sync::Arc;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::handlers::booking_dtos::{BookingResponse, ConsultationRequest};
use crate::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<ConsultationRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), (StatusCode, Json<Value>)> {
    if let Some(expected) = state.settings.leads_public_key.as_deref() {
        let provided = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
        if provided != Some(expected) {
            tracing::warn!("Rejected booking with missing or wrong {}", API_KEY_HEADER);
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Invalid API key"})),
            ));
        }
    }

    let missing = request.missing_fields();
    if !missing.is_empty() {
        tracing::info!("Booking from {} missing fields {:?}", request.source_page, missing);
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "Required fields are missing", "missing": missing})),
        ));
    }

    let created_at = Utc::now().timestamp() as i32;
    let booking = request.into_new_booking(created_at);
    let source_page = booking.source_page.clone();

    let stored = state.booking_store.insert(booking).map_err(|e| {
        tracing::error!("Failed to store consultation booking: {}", e);
        sentry::capture_error(&e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to save booking"})),
        )
    })?;

    tracing::info!("Stored consultation booking {} from {}", stored.id, source_page);
    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            id: stored.id,
            created_at: stored.created_at,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::checkout_handlers::UnconfiguredCheckout;
    use crate::models::booking_models::ConsultationBooking;
    use crate::test_support::{read_json, state_with, RecordingStore};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn post(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/consultations")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn jane_doe() -> Value {
        json!({
            "full_name": "Jane Doe",
            "email": "jane@x.com",
            "industry": "Healthcare",
            "current_challenges": "Too much manual charting",
            "help_with": "AI Integration",
            "source_page": "home-modal"
        })
    }

    #[tokio::test]
    async fn valid_request_is_stored_once() {
        let store = Arc::new(RecordingStore::default());
        let app = crate::app(state_with(store.clone(), Arc::new(UnconfiguredCheckout), None));

        let response = app.oneshot(post(jane_doe())).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = read_json(response).await;
        assert_eq!(body["id"], 1);
        assert!(body["created_at"].as_i64().unwrap() > 0);

        let saved = store.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].full_name, "Jane Doe");
        assert_eq!(saved[0].industry, "Healthcare");
        assert_eq!(saved[0].help_with, "AI Integration");
        assert_eq!(saved[0].source_page, "home-modal");
        assert_eq!(saved[0].business_name, None);
    }

    #[tokio::test]
    async fn missing_required_fields_never_reach_the_store() {
        let store = Arc::new(RecordingStore::default());
        let app = crate::app(state_with(store.clone(), Arc::new(UnconfiguredCheckout), None));

        let mut body = jane_doe();
        body["email"] = json!("");
        body["current_challenges"] = json!("   ");
        let response = app.oneshot(post(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_json(response).await;
        assert_eq!(body["missing"], json!(["email", "current_challenges"]));
        assert!(store.saved().is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_an_opaque_500() {
        let store = Arc::new(RecordingStore::failing());
        let app = crate::app(state_with(store, Arc::new(UnconfiguredCheckout), None));

        let response = app.oneshot(post(jane_doe())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Failed to save booking");
    }

    #[tokio::test]
    async fn configured_key_is_enforced() {
        let store = Arc::new(RecordingStore::default());
        let state = state_with(store.clone(), Arc::new(UnconfiguredCheckout), Some("pk_site"));

        let rejected = crate::app(state.clone()).oneshot(post(jane_doe())).await.unwrap();
        assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);
        assert!(store.saved().is_empty());

        let mut request = post(jane_doe());
        request
            .headers_mut()
            .insert(API_KEY_HEADER, "pk_site".parse().unwrap());
        let accepted = crate::app(state).oneshot(request).await.unwrap();
        assert_eq!(accepted.status(), StatusCode::CREATED);
        assert_eq!(store.saved().len(), 1);
    }

    #[tokio::test]
    async fn writes_land_in_sqlite() {
        use crate::repositories::booking_repository::DieselBookingStore;
        use crate::schema::consultation_bookings;
        use diesel::prelude::*;

        let (_dir, pool) = crate::db::test_pool();
        let state = state_with(
            Arc::new(DieselBookingStore::new(pool.clone())),
            Arc::new(UnconfiguredCheckout),
            None,
        );

        let mut body = jane_doe();
        body["help_with"] = json!("AI Automation, Other");
        let response = crate::app(state).oneshot(post(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let rows: Vec<ConsultationBooking> = consultation_bookings::table
            .select(ConsultationBooking::as_select())
            .load(&mut pool.get().unwrap())
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].help_with, "AI Automation, Other");
        assert_eq!(rows[0].source_page, "home-modal");
    }
}
