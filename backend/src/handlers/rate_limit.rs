use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use serde_json::json;

use crate::AppState;

/// How often idle client buckets are dropped from the limiter.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Clients whose address cannot be determined share this bucket.
const UNKNOWN_CLIENT: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Per-client limiter for lead submissions.
pub struct SubmissionLimiter {
    limiter: DefaultKeyedRateLimiter<IpAddr>,
}

impl SubmissionLimiter {
    pub fn per_minute(per_minute: NonZeroU32) -> Self {
        Self {
            limiter: RateLimiter::keyed(Quota::per_minute(per_minute)),
        }
    }

    pub fn check(&self, client: IpAddr) -> bool {
        self.limiter.check_key(&client).is_ok()
    }

    /// Forgets clients whose bucket has refilled completely.
    pub fn sweep(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }
}

/// Sweeps the submission limiter for as long as the server runs.
pub fn spawn_sweeper(state: Arc<AppState>) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            state.submission_limiter.sweep();
            tracing::debug!(
                "Submission limiter tracks {} clients after sweep",
                state.submission_limiter.tracked_clients()
            );
        }
    });
}

fn forwarded_ip(request: &Request) -> Option<IpAddr> {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|ip| ip.trim().parse().ok())
}

fn peer_ip(request: &Request) -> Option<IpAddr> {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
}

/// `x-forwarded-for` is client-controlled, so it only counts when the
/// server is configured to sit behind a proxy that overwrites it.
fn client_ip(request: &Request, trust_proxy: bool) -> IpAddr {
    let forwarded = if trust_proxy { forwarded_ip(request) } else { None };
    forwarded.or_else(|| peer_ip(request)).unwrap_or(UNKNOWN_CLIENT)
}

pub async fn limit_submissions(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let ip = client_ip(&request, state.settings.trust_proxy);
    if !state.submission_limiter.check(ip) {
        tracing::warn!("Rate limit hit for booking submissions from {}", ip);
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": "Too many requests, please try again in a minute"})),
        )
            .into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use nonzero_ext::nonzero;

    fn request_from(peer: &str, forwarded: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/api/consultations");
        if let Some(forwarded) = forwarded {
            builder = builder.header("x-forwarded-for", forwarded);
        }
        let mut request = builder.body(Body::empty()).unwrap();
        let addr: SocketAddr = format!("{}:50000", peer).parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));
        request
    }

    #[test]
    fn burst_is_capped_per_client() {
        let limiter = SubmissionLimiter::per_minute(nonzero!(2u32));
        let visitor: IpAddr = "203.0.113.7".parse().unwrap();
        let other: IpAddr = "203.0.113.8".parse().unwrap();

        assert!(limiter.check(visitor));
        assert!(limiter.check(visitor));
        assert!(!limiter.check(visitor));
        assert!(limiter.check(other));
        assert_eq!(limiter.tracked_clients(), 2);
    }

    #[test]
    fn forwarded_header_is_ignored_unless_proxy_is_trusted() {
        let request = request_from("192.0.2.10", Some("10.0.0.1, 192.0.2.10"));

        assert_eq!(client_ip(&request, false), "192.0.2.10".parse::<IpAddr>().unwrap());
        assert_eq!(client_ip(&request, true), "10.0.0.1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn garbage_forwarded_header_falls_back_to_peer() {
        let request = request_from("192.0.2.10", Some("not-an-ip"));
        assert_eq!(client_ip(&request, true), "192.0.2.10".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn unknown_peers_share_one_bucket() {
        let request = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(client_ip(&request, false), UNKNOWN_CLIENT);
    }
}
