use yew::prelude::*;

use crate::components::booking_form::BookingForm;

#[function_component(Start)]
pub fn start() -> Html {
    html! {
        <div class="start-page">
            <h1>{"Start a Project"}</h1>
            <p class="start-intro">
                {"Tell us a little about your business and what's getting in the way. \
                  We read every request and reply within one working day."}
            </p>
            <div class="start-panel">
                <BookingForm source_page="start-page" />
            </div>
            <style>
                {r#"
                .start-page {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 8rem 2rem 4rem;
                }
                .start-intro {
                    color: rgba(255, 255, 255, 0.75);
                    margin-bottom: 2rem;
                }
                .start-panel {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
