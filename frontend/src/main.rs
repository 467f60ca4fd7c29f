use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};

mod config;
mod catalog;
mod booking {
    pub mod form_data;
    pub mod flow;
    pub mod lead_store;
    pub mod scroll_lock;
    pub mod modal_session;
    pub mod navigation;
}
mod components {
    pub mod booking_form;
    pub mod booking_modal;
    pub mod consultation_cta;
    pub mod project_card;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod work;
    pub mod start;
    pub mod pay;
    pub mod not_found;
}

use pages::{
    home::Home,
    about::About,
    work::{Work, ProjectDetail},
    start::Start,
    pay::{Pay, PaymentComplete},
    not_found::NotFound,
};

/// Scroll offset after which the nav bar switches to its solid style.
const NAV_SCROLL_THRESHOLD: f64 = 80.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/work")]
    Work,
    #[at("/work/:id")]
    Project { id: String },
    #[at("/start")]
    Start,
    #[at("/pay")]
    Pay,
    #[at("/pay/complete")]
    PaymentComplete,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Work => {
            info!("Rendering Work page");
            html! { <Work /> }
        },
        Route::Project { id } => {
            info!("Rendering project {}", id);
            html! { <ProjectDetail {id} /> }
        },
        Route::Start => {
            info!("Rendering Start page");
            html! { <Start /> }
        },
        Route::Pay => html! { <Pay /> },
        Route::PaymentComplete => html! { <PaymentComplete /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let offset = window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            is_scrolled.set(offset > NAV_SCROLL_THRESHOLD);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let nav_link = |to: Route, label: &'static str| {
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> {to} classes="nav-link">{ label }</Link<Route>>
            </div>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"brightpath"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { nav_link(Route::About, "About") }
                    { nav_link(Route::Work, "Work") }
                    { nav_link(Route::Pay, "Strategy Session") }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Start} classes="nav-login-button">
                            {"Start a Project"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    config::warn_if_unconfigured();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
