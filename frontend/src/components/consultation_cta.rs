use yew::prelude::*;

use crate::components::booking_modal::BookingModal;

fn default_cta_class() -> Classes {
    classes!("hero-cta")
}

#[derive(Properties, PartialEq)]
pub struct ConsultationCtaProps {
    pub source_page: AttrValue,
    #[prop_or(AttrValue::from("Book a Consultation"))]
    pub label: AttrValue,
    #[prop_or_else(default_cta_class)]
    pub class: Classes,
}

/// "Book a Consultation" button that owns its booking modal.
#[function_component(ConsultationCta)]
pub fn consultation_cta(props: &ConsultationCtaProps) -> Html {
    let open = use_state(|| false);

    let open_modal = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(true);
        })
    };
    let close_modal = {
        let open = open.clone();
        Callback::from(move |_| open.set(false))
    };

    html! {
        <>
            <button class={props.class.clone()} onclick={open_modal}>
                { props.label.clone() }
            </button>
            <BookingModal open={*open} on_close={close_modal} source_page={props.source_page.clone()} />
        </>
    }
}
