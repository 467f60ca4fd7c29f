use stripe::{
    CheckoutSession,
    CheckoutSessionMode,
    Client,
    CreateCheckoutSession,
    CreateCheckoutSessionLineItems,
};

use async_trait::async_trait;
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use crate::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("payments are not configured")]
    NotConfigured,
    #[error("payment provider error: {0}")]
    Provider(String),
}

/// Creates hosted checkout pages for the one-off strategy session.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    async fn create_session(&self, success_url: &str, cancel_url: &str) -> Result<String, CheckoutError>;
}

pub struct StripeCheckout {
    client: Client,
    price_id: String,
}

impl StripeCheckout {
    pub fn new(secret_key: &str, price_id: &str) -> Self {
        Self {
            client: Client::new(secret_key.to_string()),
            price_id: price_id.to_string(),
        }
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckout {
    async fn create_session(&self, success_url: &str, cancel_url: &str) -> Result<String, CheckoutError> {
        let session = CheckoutSession::create(
            &self.client,
            CreateCheckoutSession {
                success_url: Some(success_url),
                cancel_url: Some(cancel_url),
                mode: Some(CheckoutSessionMode::Payment), // One-time payment mode
                line_items: Some(vec![
                    CreateCheckoutSessionLineItems {
                        price: Some(self.price_id.clone()),
                        quantity: Some(1),
                        ..Default::default()
                    }
                ]),
                billing_address_collection: Some(stripe::CheckoutSessionBillingAddressCollection::Required),
                allow_promotion_codes: Some(true),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| CheckoutError::Provider(e.to_string()))?;

        session
            .url
            .ok_or_else(|| CheckoutError::Provider("checkout session has no url".to_string()))
    }
}

/// Stand-in used when Stripe keys are absent so the server still boots.
pub struct UnconfiguredCheckout;

#[async_trait]
impl CheckoutProvider for UnconfiguredCheckout {
    async fn create_session(&self, _success_url: &str, _cancel_url: &str) -> Result<String, CheckoutError> {
        Err(CheckoutError::NotConfigured)
    }
}

pub async fn create_checkout(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let domain_url = state.settings.frontend_url.trim_end_matches('/');
    let success_url = format!("{}/pay/complete", domain_url);
    let cancel_url = format!("{}/pay", domain_url);

    match state.checkout.create_session(&success_url, &cancel_url).await {
        Ok(url) => {
            tracing::info!("Checkout session created");
            Ok(Json(json!({
                "url": url,
                "message": "Redirecting to Stripe Checkout for payment"
            })))
        }
        Err(CheckoutError::NotConfigured) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"error": "Online payments are not available right now"})),
        )),
        Err(e) => {
            tracing::error!("Failed to create checkout session: {}", e);
            sentry::capture_error(&e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "Failed to create Checkout Session"})),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{read_json, state_with, RecordingStore, StubCheckout};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn post_checkout() -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/checkout")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn returns_provider_url() {
        let checkout = Arc::new(StubCheckout::returning("https://checkout.stripe.com/c/pay/cs_test_1"));
        let state = state_with(Arc::new(RecordingStore::default()), checkout.clone(), None);

        let response = crate::app(state).oneshot(post_checkout()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["url"], "https://checkout.stripe.com/c/pay/cs_test_1");
        assert_eq!(
            checkout.requests(),
            vec![(
                "http://localhost:8080/pay/complete".to_string(),
                "http://localhost:8080/pay".to_string(),
            )]
        );
    }

    #[tokio::test]
    async fn unconfigured_payments_answer_503() {
        let state = state_with(Arc::new(RecordingStore::default()), Arc::new(UnconfiguredCheckout), None);

        let response = crate::app(state).oneshot(post_checkout()).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn provider_failure_answers_502() {
        let checkout = Arc::new(StubCheckout::failing("card_declined"));
        let state = state_with(Arc::new(RecordingStore::default()), checkout, None);

        let response = crate::app(state).oneshot(post_checkout()).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Failed to create Checkout Session");
    }
}
