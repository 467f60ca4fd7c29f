use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::KeyboardEvent;

use crate::booking::form_data::BookingReceipt;
use crate::booking::modal_session::{CloseTrigger, ModalSession};
use crate::booking::scroll_lock::{page_scroll_lock, DocumentBody};
use crate::components::booking_form::BookingForm;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub source_page: AttrValue,
}

/// Booking form in an overlay. Nothing is mounted while closed, so every
/// opening starts from a fresh form.
#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    html! {
        <ModalShell on_close={props.on_close.clone()} source_page={props.source_page.clone()} />
    }
}

#[derive(Properties, PartialEq)]
struct ModalShellProps {
    on_close: Callback<()>,
    source_page: AttrValue,
}

#[function_component(ModalShell)]
fn modal_shell(props: &ModalShellProps) -> Html {
    let booked = use_state(|| false);

    let session = use_mut_ref(|| None::<ModalSession<DocumentBody>>);

    // Page scroll stays locked from mount until the first close or unmount
    {
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                *session.borrow_mut() = Some(ModalSession::open(&page_scroll_lock()));
                move || drop(session.borrow_mut().take())
            },
            (),
        );
    }

    let dismiss = {
        let session = session.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |trigger: CloseTrigger| {
            let closed = session
                .borrow_mut()
                .as_mut()
                .map_or(true, |s| s.close(trigger));
            if closed {
                on_close.emit(());
            }
        })
    };

    {
        let dismiss = dismiss.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(trigger) = CloseTrigger::from_key(&e.key()) {
                dismiss.emit(trigger);
            }
        });
    }

    let close_backdrop = dismiss.reform(|_: MouseEvent| CloseTrigger::Backdrop);
    let close_button = dismiss.reform(|_: MouseEvent| CloseTrigger::CloseButton);
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_success = {
        let booked = booked.clone();
        Callback::from(move |_: BookingReceipt| booked.set(true))
    };

    html! {
        <div class="modal-backdrop" onclick={close_backdrop}>
            <div class="modal-panel" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="modal-close" aria-label="Close" onclick={close_button}>{"×"}</button>
                <h2>{ if *booked { "You're all set" } else { "Book a free consultation" } }</h2>
                <BookingForm source_page={props.source_page.clone()} on_success={Some(on_success)} />
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(8, 12, 20, 0.75);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    z-index: 1000;
                }
                .modal-panel {
                    position: relative;
                    background: #111827;
                    border: 1px solid rgba(126, 178, 255, 0.15);
                    border-radius: 16px;
                    width: 100%;
                    max-width: 640px;
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 2.5rem 2rem 2rem;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
                }
                .modal-panel h2 {
                    margin: 0 0 1.5rem;
                    font-size: 1.6rem;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.6rem;
                    cursor: pointer;
                }
                .modal-close:hover {
                    color: #fff;
                }
                "#}
            </style>
        </div>
    }
}
