use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
    middleware,
};
use std::net::SocketAddr;
use std::path::Path;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod handlers {
    pub mod booking_dtos;
    pub mod booking_handlers;
    pub mod checkout_handlers;
    pub mod rate_limit;
}
mod models {
    pub mod booking_models;
}
mod repositories {
    pub mod booking_repository;
}
mod config {
    pub mod settings;
}
mod utils {
    pub mod cache_policy;
}
mod db;
mod schema;

use config::settings::Settings;
use handlers::booking_handlers;
use handlers::checkout_handlers::{self, CheckoutProvider, StripeCheckout, UnconfiguredCheckout};
use handlers::rate_limit::{self, SubmissionLimiter};
use repositories::booking_repository::{BookingStore, DieselBookingStore};
use utils::cache_policy;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    settings: Arc<Settings>,
    booking_store: Arc<dyn BookingStore>,
    checkout: Arc<dyn CheckoutProvider>,
    submission_limiter: SubmissionLimiter,
}

pub fn app(state: Arc<AppState>) -> Router {
    let booking_routes = Router::new()
        .route("/api/consultations", post(booking_handlers::create_booking))
        .route_layer(middleware::from_fn_with_state(state.clone(), rate_limit::limit_submissions));

    let static_dir = Path::new(&state.settings.static_dir);
    let frontend = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/checkout", post(checkout_handlers::create_checkout))
        .route("/api/cache-manifest", get(cache_policy::cache_manifest))
        .merge(booking_routes)
        .fallback_service(frontend)
        .layer(middleware::from_fn(cache_policy::apply_cache_policy))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::HeaderName::from_static(booking_handlers::API_KEY_HEADER),
                ])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

fn checkout_provider(settings: &Settings) -> Arc<dyn CheckoutProvider> {
    match (&settings.stripe_secret_key, &settings.stripe_strategy_price_id) {
        (Some(key), Some(price_id)) => Arc::new(StripeCheckout::new(key, price_id)),
        _ => Arc::new(UnconfiguredCheckout),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env();

    let _guard = settings.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let pool = db::build_pool(&settings.database_url)?;
    db::run_migrations(&pool)?;

    let state = Arc::new(AppState {
        booking_store: Arc::new(DieselBookingStore::new(pool)),
        checkout: checkout_provider(&settings),
        submission_limiter: SubmissionLimiter::per_minute(settings.bookings_per_minute),
        settings: Arc::new(settings),
    });

    rate_limit::spawn_sweeper(state.clone());

    let listener = tokio::net::TcpListener::bind(&state.settings.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state).into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use async_trait::async_trait;
    use axum::response::Response;
    use crate::handlers::checkout_handlers::CheckoutError;
    use http_body_util::BodyExt;
    use crate::models::booking_models::{ConsultationBooking, NewConsultationBooking};
    use crate::repositories::booking_repository::RepositoryError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Keeps every booking it is handed, or fails every insert.
    #[derive(Default)]
    pub struct RecordingStore {
        saved: Mutex<Vec<NewConsultationBooking>>,
        fail: bool,
    }

    impl RecordingStore {
        pub fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        pub fn saved(&self) -> Vec<NewConsultationBooking> {
            self.saved.lock().unwrap().clone()
        }
    }

    impl BookingStore for RecordingStore {
        fn insert(&self, booking: NewConsultationBooking) -> Result<ConsultationBooking, RepositoryError> {
            if self.fail {
                return Err(RepositoryError::Query(diesel::result::Error::NotFound));
            }
            let mut saved = self.saved.lock().unwrap();
            saved.push(booking.clone());
            Ok(ConsultationBooking {
                id: saved.len() as i32,
                full_name: booking.full_name,
                email: booking.email,
                business_name: booking.business_name,
                industry: booking.industry,
                help_with: booking.help_with,
                current_challenges: booking.current_challenges,
                preferred_time: booking.preferred_time,
                hear_about: booking.hear_about,
                source_page: booking.source_page,
                created_at: booking.created_at,
            })
        }
    }

    /// Answers every checkout with a fixed outcome and remembers the return URLs.
    pub struct StubCheckout {
        outcome: Result<String, String>,
        requests: Mutex<Vec<(String, String)>>,
    }

    impl StubCheckout {
        pub fn returning(url: &str) -> Self {
            Self { outcome: Ok(url.to_string()), requests: Mutex::new(Vec::new()) }
        }

        pub fn failing(reason: &str) -> Self {
            Self { outcome: Err(reason.to_string()), requests: Mutex::new(Vec::new()) }
        }

        pub fn requests(&self) -> Vec<(String, String)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CheckoutProvider for StubCheckout {
        async fn create_session(&self, success_url: &str, cancel_url: &str) -> Result<String, CheckoutError> {
            self.requests
                .lock()
                .unwrap()
                .push((success_url.to_string(), cancel_url.to_string()));
            self.outcome.clone().map_err(CheckoutError::Provider)
        }
    }

    pub fn state_with(
        store: Arc<dyn BookingStore>,
        checkout: Arc<dyn CheckoutProvider>,
        leads_public_key: Option<&str>,
    ) -> Arc<AppState> {
        let mut vars = vec![];
        if let Some(key) = leads_public_key {
            vars.push(("LEADS_PUBLIC_KEY", key));
        }
        state_from_vars(store, checkout, &vars)
    }

    pub fn state_from_vars(
        store: Arc<dyn BookingStore>,
        checkout: Arc<dyn CheckoutProvider>,
        pairs: &[(&str, &str)],
    ) -> Arc<AppState> {
        let mut vars: HashMap<&str, String> = HashMap::new();
        vars.insert("STATIC_DIR", "./does-not-exist".to_string());
        for &(key, value) in pairs {
            vars.insert(key, value.to_string());
        }
        let settings = Settings::from_lookup(|key| vars.get(key).cloned());
        Arc::new(AppState {
            submission_limiter: SubmissionLimiter::per_minute(settings.bookings_per_minute),
            settings: Arc::new(settings),
            booking_store: store,
            checkout,
        })
    }

    pub async fn read_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }
}
