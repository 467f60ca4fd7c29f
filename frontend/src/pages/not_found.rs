use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"That page doesn't exist, or it moved."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">{"Back to home"}</Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 60vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 2rem 4rem;
                    text-align: center;
                }
                .not-found-page h1 {
                    font-size: 4rem;
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}
