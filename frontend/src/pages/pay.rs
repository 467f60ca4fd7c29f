use yew::prelude::*;
use yew_router::prelude::*;
use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::window;

use crate::config;
use crate::Route;

const CHECKOUT_FAILED: &str = "We couldn't start the checkout. Please try again or email us.";

#[derive(Deserialize)]
struct CheckoutResponse {
    url: String,
}

#[derive(Deserialize)]
struct CheckoutFailure {
    error: String,
}

/// Asks the backend for a checkout session and returns the hosted payment URL.
async fn start_checkout() -> Result<String, String> {
    let response = Request::post(&format!("{}/api/checkout", config::get_backend_url()))
        .send()
        .await
        .map_err(|e| {
            log::error!("Checkout request failed: {}", e);
            CHECKOUT_FAILED.to_string()
        })?;

    if response.ok() {
        response
            .json::<CheckoutResponse>()
            .await
            .map(|body| body.url)
            .map_err(|_| CHECKOUT_FAILED.to_string())
    } else {
        let status = response.status();
        let message = response
            .json::<CheckoutFailure>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| CHECKOUT_FAILED.to_string());
        log::warn!("Checkout rejected with status {}", status);
        Err(message)
    }
}

#[function_component(Pay)]
pub fn pay() -> Html {
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onclick = {
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            loading.set(true);
            error.set(None);
            let loading = loading.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match start_checkout().await {
                    Ok(url) => {
                        if let Some(window) = window() {
                            let _ = window.location().set_href(&url);
                        }
                    }
                    Err(message) => {
                        error.set(Some(message));
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="pay-page">
            <h1>{"AI Strategy Session"}</h1>
            <p>
                {"A 90 minute working session with a written plan afterwards: where AI fits in your \
                  business, what to build first and what it will cost."}
            </p>
            if let Some(message) = (*error).clone() {
                <div class="pay-error" role="alert">{ message }</div>
            }
            <button class="hero-cta" {onclick} disabled={*loading}>
                { if *loading { "Opening checkout..." } else { "Pay for a Strategy Session" } }
            </button>
            <p class="pay-note">
                {"Prefer to talk first? "}
                <Link<Route> to={Route::Start}>{"Send us a request"}</Link<Route>>
            </p>
            <style>
                {r#"
                .pay-page {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 8rem 2rem 4rem;
                    text-align: center;
                    line-height: 1.7;
                }
                .pay-error {
                    background: rgba(255, 107, 107, 0.1);
                    border: 1px solid rgba(255, 107, 107, 0.4);
                    border-radius: 8px;
                    padding: 1rem;
                    margin-bottom: 1.5rem;
                }
                .pay-note {
                    margin-top: 2rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .pay-note a {
                    color: #7EB2FF;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(PaymentComplete)]
pub fn payment_complete() -> Html {
    html! {
        <div class="pay-page">
            <h1>{"Payment received"}</h1>
            <p>{"Thank you! We'll email you within one working day to schedule your strategy session."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">{"Back to home"}</Link<Route>>
        </div>
    }
}
