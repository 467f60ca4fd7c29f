use std::env;
use std::num::NonZeroU32;

use nonzero_ext::nonzero;

const DEFAULT_DATABASE_URL: &str = "database.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";

fn default_bookings_per_minute() -> NonZeroU32 {
    nonzero!(30u32)
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub frontend_url: String, // where checkout returns the visitor
    pub static_dir: String,
    pub leads_public_key: Option<String>, // expected x-api-key on booking writes, None accepts all
    pub stripe_secret_key: Option<String>,
    pub stripe_strategy_price_id: Option<String>,
    pub bookings_per_minute: NonZeroU32, // per client ip
    pub trust_proxy: bool, // trust x-forwarded-for from a fronting proxy
    pub sentry_dsn: Option<String>,
}

impl Settings {
    /// Reads settings from the process environment. Missing values fall
    /// back to defaults with a warning; nothing here aborts startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or_default = |key: &str, default: &str| {
            get(key).unwrap_or_else(|| {
                tracing::warn!("{} not set, using {}", key, default);
                default.to_string()
            })
        };

        let bookings_per_minute = match get("BOOKING_RATE_PER_MINUTE") {
            Some(raw) => raw.trim().parse::<NonZeroU32>().unwrap_or_else(|_| {
                tracing::warn!("BOOKING_RATE_PER_MINUTE={} is not a positive integer, using {}", raw, default_bookings_per_minute());
                default_bookings_per_minute()
            }),
            None => default_bookings_per_minute(),
        };

        let settings = Self {
            database_url: or_default("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_addr: or_default("BIND_ADDR", DEFAULT_BIND_ADDR),
            frontend_url: or_default("FRONTEND_URL", DEFAULT_FRONTEND_URL),
            static_dir: or_default("STATIC_DIR", DEFAULT_STATIC_DIR),
            leads_public_key: get("LEADS_PUBLIC_KEY"),
            stripe_secret_key: get("STRIPE_SECRET_KEY"),
            stripe_strategy_price_id: get("STRIPE_STRATEGY_PRICE_ID"),
            bookings_per_minute,
            trust_proxy: get("TRUST_PROXY")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            sentry_dsn: get("SENTRY_DSN"),
        };

        if settings.leads_public_key.is_none() {
            tracing::warn!("LEADS_PUBLIC_KEY not set, booking writes are accepted without a key");
        }
        if !settings.payments_configured() {
            tracing::warn!("Stripe is not configured, /api/checkout will answer 503");
        }
        settings
    }

    pub fn payments_configured(&self) -> bool {
        self.stripe_secret_key.is_some() && self.stripe_strategy_price_id.is_some()
    }
}
