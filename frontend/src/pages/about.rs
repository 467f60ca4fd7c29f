use yew::prelude::*;

use crate::components::consultation_cta::ConsultationCta;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="about-hero">
                <h1>{"About Brightpath"}</h1>
                <p>
                    {"Brightpath is a two-person consultancy. We spent a decade building software for hospitals, \
                      agencies and shops before language models got good enough to take real work off people's plates. \
                      Now we help small teams use them sensibly."}
                </p>
            </section>

            <section class="about-principles">
                <h2>{"How we work"}</h2>
                <ul>
                    <li>
                        <strong>{"Start with the problem. "}</strong>
                        {"Every engagement begins with the job you want gone, not with a model or a vendor."}
                    </li>
                    <li>
                        <strong>{"Small, shippable steps. "}</strong>
                        {"You see something working in the first two weeks, and decide what comes next from there."}
                    </li>
                    <li>
                        <strong>{"You own it. "}</strong>
                        {"Code, prompts and documentation are handed over so your team can run it without us."}
                    </li>
                </ul>
            </section>

            <section class="about-cta">
                <h2>{"Let's talk about your business"}</h2>
                <ConsultationCta source_page="about-modal" />
            </section>

            <style>
                {r#"
                .about-page {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 8rem 2rem 4rem;
                    line-height: 1.7;
                }
                .about-hero h1 {
                    font-size: 2.6rem;
                    margin-bottom: 1.5rem;
                }
                .about-principles ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .about-principles li {
                    background: rgba(30, 30, 30, 0.7);
                    border-left: 3px solid #1E90FF;
                    padding: 1rem 1.25rem;
                    border-radius: 4px;
                }
                .about-cta {
                    text-align: center;
                    padding-top: 3rem;
                }
                "#}
            </style>
        </div>
    }
}
