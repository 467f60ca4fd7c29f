//! Declarative caching rules for everything the server hands out.
//!
//! The same table drives the `Cache-Control` header on responses and the
//! `/api/cache-manifest` document a static service worker can read.

use axum::{
    extract::Request,
    http::{header::CACHE_CONTROL, HeaderValue},
    middleware::Next,
    response::Response,
    Json,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheStrategy {
    CacheFirst,
    StaleWhileRevalidate,
    NetworkFirst,
    NetworkOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RoutePattern {
    Prefix(&'static str),
    Extensions(&'static [&'static str]),
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheRule {
    pub name: &'static str,
    pub pattern: RoutePattern,
    pub strategy: CacheStrategy,
    pub max_age_secs: u32,
    pub max_entries: Option<u32>, // for the service worker, the server ignores it
}

const DAY: u32 = 24 * 60 * 60;

/// Checked in order, first match wins. The last rule matches everything.
pub const CACHE_RULES: &[CacheRule] = &[
    CacheRule {
        name: "api",
        pattern: RoutePattern::Prefix("/api/"),
        strategy: CacheStrategy::NetworkOnly,
        max_age_secs: 0,
        max_entries: None,
    },
    CacheRule {
        name: "images",
        pattern: RoutePattern::Prefix("/assets/"),
        strategy: CacheStrategy::CacheFirst,
        max_age_secs: 30 * DAY,
        max_entries: Some(60),
    },
    CacheRule {
        name: "fonts",
        pattern: RoutePattern::Extensions(&["woff2", "woff", "ttf"]),
        strategy: CacheStrategy::CacheFirst,
        max_age_secs: 365 * DAY,
        max_entries: Some(10),
    },
    CacheRule {
        name: "bundles",
        pattern: RoutePattern::Extensions(&["wasm", "js", "css"]),
        strategy: CacheStrategy::StaleWhileRevalidate,
        max_age_secs: DAY,
        max_entries: Some(30),
    },
    CacheRule {
        name: "pages",
        pattern: RoutePattern::Any,
        strategy: CacheStrategy::NetworkFirst,
        max_age_secs: 0,
        max_entries: Some(20),
    },
];

impl RoutePattern {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            RoutePattern::Prefix(prefix) => path.starts_with(prefix),
            RoutePattern::Extensions(extensions) => path
                .rsplit_once('.')
                .map(|(_, ext)| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
                .unwrap_or(false),
            RoutePattern::Any => true,
        }
    }
}

impl CacheRule {
    pub fn header_value(&self) -> String {
        match self.strategy {
            CacheStrategy::CacheFirst => format!("public, max-age={}, immutable", self.max_age_secs),
            CacheStrategy::StaleWhileRevalidate => format!(
                "public, max-age={}, stale-while-revalidate={}",
                self.max_age_secs,
                self.max_age_secs * 7
            ),
            CacheStrategy::NetworkFirst => "no-cache".to_string(),
            CacheStrategy::NetworkOnly => "no-store".to_string(),
        }
    }
}

pub fn rule_for(path: &str) -> &'static CacheRule {
    CACHE_RULES
        .iter()
        .find(|rule| rule.pattern.matches(path))
        .unwrap_or(&CACHE_RULES[CACHE_RULES.len() - 1])
}

/// Stamps `Cache-Control` on successful responses that did not set one.
pub async fn apply_cache_policy(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;
    if response.status().is_success() && !response.headers().contains_key(CACHE_CONTROL) {
        let rule = rule_for(&path);
        if let Ok(value) = HeaderValue::from_str(&rule.header_value()) {
            response.headers_mut().insert(CACHE_CONTROL, value);
        }
    }
    response
}

pub async fn cache_manifest() -> Json<&'static [CacheRule]> {
    Json(CACHE_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        assert_eq!(rule_for("/api/consultations").name, "api");
        assert_eq!(rule_for("/assets/projects/clinic-hero.webp").name, "images");
        assert_eq!(rule_for("/brightpath-frontend-3f2a.wasm").name, "bundles");
        assert_eq!(rule_for("/fonts/Inter.WOFF2").name, "fonts");
        assert_eq!(rule_for("/work/clinic-intake").name, "pages");
        assert_eq!(rule_for("/").name, "pages");
    }

    #[test]
    fn header_values_follow_strategy() {
        assert_eq!(rule_for("/api/health").header_value(), "no-store");
        assert_eq!(rule_for("/about").header_value(), "no-cache");
        assert_eq!(
            rule_for("/assets/logo.svg").header_value(),
            "public, max-age=2592000, immutable"
        );
        assert_eq!(
            rule_for("/app.js").header_value(),
            "public, max-age=86400, stale-while-revalidate=604800"
        );
    }

    #[test]
    fn manifest_serialises_rules() {
        let json = serde_json::to_value(CACHE_RULES).unwrap();
        assert_eq!(json[0]["strategy"], "network-only");
        assert_eq!(json[1]["pattern"]["kind"], "prefix");
        assert_eq!(json[1]["pattern"]["value"], "/assets/");
        assert_eq!(json[1]["max_entries"], 60);
    }
}
