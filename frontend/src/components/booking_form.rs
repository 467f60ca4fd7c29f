use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use gloo_timers::future::TimeoutFuture;

use crate::booking::flow::{AttemptId, BookingFlow, BookingState, Completion, SubmitRejected};
use crate::booking::form_data::{
    BookingReceipt, FormField, HELP_TOPICS, INDUSTRY_OPTIONS, PREFERRED_TIMES,
};
use crate::booking::lead_store::{persist_with_timeout, HttpLeadStore, PersistError, SUBMIT_TIMEOUT_MS};
use crate::booking::navigation::{claim_calendar_redirect, BrowserNavigator};
use crate::config::CALENDAR_URL;

const REDIRECT_DELAY_MS: u32 = 1_000;

const BOOKING_CSS: &str = r#"
.booking-form {
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
}
.booking-row {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 1rem;
}
.booking-field {
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
    font-size: 0.9rem;
    color: rgba(255, 255, 255, 0.8);
}
.booking-field input,
.booking-field select,
.booking-field textarea {
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(126, 178, 255, 0.2);
    border-radius: 8px;
    padding: 0.75rem;
    color: #fff;
    font: inherit;
}
.booking-field.missing input,
.booking-field.missing select,
.booking-field.missing textarea {
    border-color: #ff6b6b;
}
.booking-topics {
    border: 1px solid rgba(126, 178, 255, 0.15);
    border-radius: 8px;
    padding: 1rem;
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem 1.25rem;
}
.booking-topic {
    display: flex;
    align-items: center;
    gap: 0.4rem;
    cursor: pointer;
}
.booking-submit {
    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
    border: none;
    border-radius: 8px;
    padding: 0.9rem 1.5rem;
    color: #fff;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
}
.booking-submit:disabled {
    opacity: 0.6;
    cursor: wait;
}
.booking-error {
    background: rgba(255, 107, 107, 0.1);
    border: 1px solid rgba(255, 107, 107, 0.4);
    border-radius: 8px;
    padding: 1rem;
}
.booking-missing {
    color: #ffb4b4;
    margin: 0;
}
.booking-success {
    text-align: center;
    display: flex;
    flex-direction: column;
    gap: 1rem;
    align-items: center;
}
.booking-calendar-link {
    color: #7EB2FF;
    font-weight: 600;
}
.booking-secondary {
    background: none;
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 8px;
    color: rgba(255, 255, 255, 0.8);
    padding: 0.6rem 1.2rem;
    cursor: pointer;
}
"#;

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    /// Attribution tag stored with the request.
    pub source_page: AttrValue,
    #[prop_or_default]
    pub on_success: Option<Callback<BookingReceipt>>,
}

pub enum BookingFormMsg {
    Set(FormField, String),
    ToggleTopic(&'static str),
    Submit,
    Finished(AttemptId, Result<BookingReceipt, PersistError>),
    StartOver,
}

pub struct BookingForm {
    flow: BookingFlow,
    missing: Vec<FormField>,
}

impl Component for BookingForm {
    type Message = BookingFormMsg;
    type Properties = BookingFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            flow: BookingFlow::new(ctx.props().source_page.to_string()),
            missing: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BookingFormMsg::Set(field, value) => {
                self.missing.retain(|f| *f != field);
                self.flow.form_mut().set(field, value);
                true
            }
            BookingFormMsg::ToggleTopic(topic) => {
                self.flow.form_mut().toggle_help_topic(topic);
                true
            }
            BookingFormMsg::Submit => match self.flow.begin_submit() {
                Ok((attempt, payload)) => {
                    self.missing.clear();
                    ctx.link().send_future(async move {
                        let store = HttpLeadStore::from_config();
                        let outcome = persist_with_timeout(
                            &store,
                            &payload,
                            TimeoutFuture::new(SUBMIT_TIMEOUT_MS),
                        )
                        .await;
                        BookingFormMsg::Finished(attempt, outcome)
                    });
                    true
                }
                Err(SubmitRejected::InFlight) => false,
                Err(SubmitRejected::MissingFields(missing)) => {
                    self.missing = missing;
                    true
                }
            },
            BookingFormMsg::Finished(attempt, outcome) => {
                let receipt = outcome.as_ref().ok().cloned();
                match self.flow.finish(attempt, outcome) {
                    Completion::Succeeded => {
                        log::info!("Consultation request saved from {}", self.flow.source_page());
                        if let (Some(cb), Some(receipt)) = (&ctx.props().on_success, receipt) {
                            cb.emit(receipt);
                        }
                        // Runs outside the component so closing the overlay does not cancel it
                        if let Some(redirect) = claim_calendar_redirect(&mut self.flow, attempt, CALENDAR_URL) {
                            wasm_bindgen_futures::spawn_local(async move {
                                TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                                if !redirect.open(&BrowserNavigator) {
                                    log::warn!("Calendar tab was blocked, the manual link is still shown");
                                }
                            });
                        }
                        true
                    }
                    Completion::Failed => true,
                    Completion::Stale => false,
                }
            }
            BookingFormMsg::StartOver => {
                self.flow.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match self.flow.state() {
            BookingState::Success(receipt) => self.render_success(ctx, receipt),
            _ => self.render_form(ctx),
        };
        html! {
            <>
                { body }
                <style>{ BOOKING_CSS }</style>
            </>
        }
    }
}

impl BookingForm {
    fn render_success(&self, ctx: &Context<Self>, receipt: &BookingReceipt) -> Html {
        html! {
            <div class="booking-success">
                <h3>{"Thanks, your request is in!"}</h3>
                if let Some(received) = receipt.received_at() {
                    <p class="booking-receipt">{ format!("Request #{} received {}", receipt.id, received) }</p>
                }
                <p>{"We're opening our calendar in a new tab so you can pick a time for your consultation."}</p>
                <a class="booking-calendar-link" href={CALENDAR_URL} target="_blank" rel="noopener noreferrer">
                    {"Open the calendar"}
                </a>
                <button class="booking-secondary" onclick={ctx.link().callback(|_| BookingFormMsg::StartOver)}>
                    {"Send another request"}
                </button>
            </div>
        }
    }

    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = self.flow.form();
        let submitting = self.flow.is_submitting();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            BookingFormMsg::Submit
        });
        let text_input = |field: FormField| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                BookingFormMsg::Set(field, input.value())
            })
        };
        let text_area = |field: FormField| {
            link.callback(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                BookingFormMsg::Set(field, input.value())
            })
        };
        let select = |field: FormField| {
            link.callback(move |e: Event| {
                let input: HtmlSelectElement = e.target_unchecked_into();
                BookingFormMsg::Set(field, input.value())
            })
        };
        let field_class = |field: FormField| {
            classes!("booking-field", self.missing.contains(&field).then(|| "missing"))
        };

        html! {
            <form class="booking-form" {onsubmit}>
                if let (BookingState::Error(message), Some(escape)) = (self.flow.state(), self.flow.escape_hatch(CALENDAR_URL)) {
                    <div class="booking-error" role="alert">
                        <p>{ message.clone() }</p>
                        <a class="booking-calendar-link" href={escape} target="_blank" rel="noopener noreferrer">
                            {"Book directly on the calendar"}
                        </a>
                    </div>
                }
                if !self.missing.is_empty() {
                    <p class="booking-missing">
                        { format!("Please fill in: {}", self.missing.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")) }
                    </p>
                }

                <div class="booking-row">
                    <label class={field_class(FormField::FullName)}>
                        <span>{"Full name *"}</span>
                        <input type="text" required={true} autocomplete="name"
                            value={form.full_name.clone()}
                            oninput={text_input(FormField::FullName)} />
                    </label>
                    <label class={field_class(FormField::Email)}>
                        <span>{"Email *"}</span>
                        <input type="email" required={true} autocomplete="email"
                            value={form.email.clone()}
                            oninput={text_input(FormField::Email)} />
                    </label>
                </div>

                <div class="booking-row">
                    <label class="booking-field">
                        <span>{"Business name"}</span>
                        <input type="text" autocomplete="organization"
                            value={form.business_name.clone()}
                            oninput={text_input(FormField::BusinessName)} />
                    </label>
                    <label class={field_class(FormField::Industry)}>
                        <span>{"Industry *"}</span>
                        <select required={true} onchange={select(FormField::Industry)}>
                            <option value="" selected={form.industry.is_empty()}>{"Select your industry"}</option>
                            { for INDUSTRY_OPTIONS.iter().map(|option| html! {
                                <option value={*option} selected={form.industry == *option}>{ *option }</option>
                            }) }
                        </select>
                    </label>
                </div>

                <fieldset class="booking-topics">
                    <legend>{"What can we help with?"}</legend>
                    { for HELP_TOPICS.iter().copied().map(|topic| {
                        html! {
                            <label class="booking-topic">
                                <input type="checkbox"
                                    checked={form.is_selected(topic)}
                                    onchange={link.callback(move |_| BookingFormMsg::ToggleTopic(topic))} />
                                <span>{ topic }</span>
                            </label>
                        }
                    }) }
                </fieldset>

                <label class={field_class(FormField::CurrentChallenges)}>
                    <span>{"What challenges are you facing right now? *"}</span>
                    <textarea rows="4" required={true}
                        value={form.current_challenges.clone()}
                        oninput={text_area(FormField::CurrentChallenges)} />
                </label>

                <div class="booking-row">
                    <label class="booking-field">
                        <span>{"Preferred time for a call"}</span>
                        <select onchange={select(FormField::PreferredTime)}>
                            <option value="" selected={form.preferred_time.is_empty()}>{"No preference"}</option>
                            { for PREFERRED_TIMES.iter().map(|option| html! {
                                <option value={*option} selected={form.preferred_time == *option}>{ *option }</option>
                            }) }
                        </select>
                    </label>
                    <label class="booking-field">
                        <span>{"How did you hear about us?"}</span>
                        <input type="text"
                            value={form.hear_about.clone()}
                            oninput={text_input(FormField::HearAbout)} />
                    </label>
                </div>

                <button type="submit" class="booking-submit" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Book my consultation" } }
                </button>
            </form>
        }
    }
}
