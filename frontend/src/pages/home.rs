use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::featured_projects;
use crate::components::consultation_cta::ConsultationCta;
use crate::components::project_card::ProjectCard;
use crate::Route;

struct Service {
    title: &'static str,
    body: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "AI Strategy",
        body: "Find the two or three places where AI actually pays off in your business, and skip the rest.",
    },
    Service {
        title: "Automation",
        body: "Hand the repetitive inbox, intake and paperwork jobs to systems that do them the same way every time.",
    },
    Service {
        title: "Integration",
        body: "Connect language models to the tools you already run on, with your data staying where it belongs.",
    },
    Service {
        title: "Custom Builds",
        body: "When nothing off the shelf fits, we design, build and hand over an assistant made for your team.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <section class="hero">
                <h1>{"Practical AI for Small Businesses"}</h1>
                <p class="hero-subtitle">
                    {"We help owner-led teams put AI to work on the jobs that eat their week, without the enterprise price tag."}
                </p>
                <div class="hero-actions">
                    <ConsultationCta source_page="home-modal" />
                    <Link<Route> to={Route::Work} classes="hero-secondary">
                        {"See our work"}
                    </Link<Route>>
                </div>
            </section>

            <section class="services">
                <h2>{"What We Do"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-item">
                            <h3>{ service.title }</h3>
                            <p>{ service.body }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="featured-work">
                <h2>{"Recent Work"}</h2>
                <div class="project-grid">
                    { for featured_projects().map(|project| html! { <ProjectCard {project} /> }) }
                </div>
                <Link<Route> to={Route::Work} classes="forward-link">
                    {"All case studies →"}
                </Link<Route>>
            </section>

            <section class="footer-cta">
                <h2>{"Not sure where to start?"}</h2>
                <p class="subtitle">
                    {"Tell us what's slowing you down. A 30 minute call is free and you'll leave with at least one idea you can use."}
                </p>
                <ConsultationCta source_page="home-footer-modal" label="Book a Free Call" />
            </section>

            <style>
                {r#"
                .landing-page {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }
                .hero {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding-top: 6rem;
                }
                .hero h1 {
                    font-size: 3.2rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 640px;
                    margin-bottom: 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }
                .hero-cta {
                    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 1rem 2rem;
                    font-size: 1.05rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .hero-secondary {
                    border: 1px solid rgba(126, 178, 255, 0.4);
                    border-radius: 8px;
                    padding: 1rem 2rem;
                    color: #7EB2FF;
                    text-decoration: none;
                }
                .services, .featured-work, .footer-cta {
                    padding: 4rem 0;
                }
                .services-grid, .project-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .service-item {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem;
                }
                .footer-cta {
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}
