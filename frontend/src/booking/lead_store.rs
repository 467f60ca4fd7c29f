use std::fmt;
use std::future::Future;

use futures::future::{select, Either};
use gloo_net::http::Request;
use serde::Deserialize;

use crate::booking::form_data::{BookingPayload, BookingReceipt};
use crate::config::{self, LeadStoreConfig};

/// Longest we wait for the lead store before giving up on an attempt.
pub const SUBMIT_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub enum PersistError {
    Network(String),
    Rejected { status: u16, message: String },
    InvalidResponse(String),
    Timeout,
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Network(e) => write!(f, "network error: {}", e),
            PersistError::Rejected { status, message } => write!(f, "rejected with {}: {}", status, message),
            PersistError::InvalidResponse(e) => write!(f, "invalid response: {}", e),
            PersistError::Timeout => write!(f, "timed out after {} ms", SUBMIT_TIMEOUT_MS),
        }
    }
}

/// Write-only handle on the table consultation requests land in.
#[allow(async_fn_in_trait)]
pub trait LeadStore {
    async fn insert(&self, payload: &BookingPayload) -> Result<BookingReceipt, PersistError>;
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

pub struct HttpLeadStore {
    endpoint: String,
    access_key: String,
}

impl HttpLeadStore {
    pub fn new(config: &LeadStoreConfig) -> Self {
        Self {
            endpoint: format!("{}/api/consultations", config.endpoint.trim_end_matches('/')),
            access_key: config.access_key.clone(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(&config::lead_store_config())
    }
}

impl LeadStore for HttpLeadStore {
    async fn insert(&self, payload: &BookingPayload) -> Result<BookingReceipt, PersistError> {
        let response = Request::post(&self.endpoint)
            .header("x-api-key", &self.access_key)
            .json(payload)
            .map_err(|e| PersistError::InvalidResponse(e.to_string()))?
            .send()
            .await
            .map_err(|e| PersistError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => response.status_text(),
            };
            return Err(PersistError::Rejected { status, message });
        }

        response
            .json::<BookingReceipt>()
            .await
            .map_err(|e| PersistError::InvalidResponse(e.to_string()))
    }
}

/// Runs one insert, failing with `Timeout` if `timeout` resolves first.
pub async fn persist_with_timeout<S, T>(
    store: &S,
    payload: &BookingPayload,
    timeout: T,
) -> Result<BookingReceipt, PersistError>
where
    S: LeadStore,
    T: Future<Output = ()>,
{
    let insert = store.insert(payload);
    futures::pin_mut!(insert);
    futures::pin_mut!(timeout);
    match select(insert, timeout).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(_) => Err(PersistError::Timeout),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records every payload and answers with a canned outcome.
    pub struct RecordingStore {
        pub calls: RefCell<Vec<BookingPayload>>,
        outcome: Result<BookingReceipt, PersistError>,
        hang: bool,
    }

    impl RecordingStore {
        pub fn succeeding() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                outcome: Ok(BookingReceipt { id: 1, created_at: 1_700_000_000 }),
                hang: false,
            }
        }

        pub fn failing(error: PersistError) -> Self {
            Self { outcome: Err(error), ..Self::succeeding() }
        }

        pub fn hanging() -> Self {
            Self { hang: true, ..Self::succeeding() }
        }
    }

    impl LeadStore for RecordingStore {
        async fn insert(&self, payload: &BookingPayload) -> Result<BookingReceipt, PersistError> {
            self.calls.borrow_mut().push(payload.clone());
            if self.hang {
                futures::future::pending::<()>().await;
            }
            self.outcome.clone()
        }
    }
}
