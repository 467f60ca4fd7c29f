
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Where visitors pick a time once their request is in.
pub const CALENDAR_URL: &str = "https://calendly.com/brightpath-ai/strategy-call";

const PLACEHOLDER_ACCESS_KEY: &str = "public-anon-key-placeholder";

#[derive(Debug, Clone, PartialEq)]
pub struct LeadStoreConfig {
    pub endpoint: String,
    pub access_key: String,
}

impl LeadStoreConfig {
    pub fn is_placeholder(&self) -> bool {
        self.access_key == PLACEHOLDER_ACCESS_KEY
    }
}

/// Built from `BRIGHTPATH_API_URL` / `BRIGHTPATH_PUBLIC_KEY` at compile
/// time. Missing values fall back to placeholders so the site still loads;
/// writes then fail if the backend insists on a key.
pub fn lead_store_config() -> LeadStoreConfig {
    resolve_lead_store_config(option_env!("BRIGHTPATH_API_URL"), option_env!("BRIGHTPATH_PUBLIC_KEY"))
}

fn resolve_lead_store_config(endpoint: Option<&str>, access_key: Option<&str>) -> LeadStoreConfig {
    let endpoint = endpoint
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(get_backend_url())
        .to_string();
    let access_key = access_key
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(PLACEHOLDER_ACCESS_KEY)
        .to_string();
    LeadStoreConfig { endpoint, access_key }
}

pub fn warn_if_unconfigured() {
    if lead_store_config().is_placeholder() {
        log::warn!("BRIGHTPATH_PUBLIC_KEY was not set at build time; consultation requests may be rejected");
    }
}
