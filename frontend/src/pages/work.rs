use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{all_projects, all_tags, find_project, projects_tagged};
use crate::components::consultation_cta::ConsultationCta;
use crate::components::project_card::ProjectCard;
use crate::pages::not_found::NotFound;
use crate::Route;

#[function_component(Work)]
pub fn work() -> Html {
    let selected_tag = use_state(|| None::<&'static str>);

    let projects = match *selected_tag {
        Some(tag) => projects_tagged(tag),
        None => all_projects().iter().collect(),
    };

    let tag_button = |tag: Option<&'static str>, label: &'static str| {
        let selected_tag = selected_tag.clone();
        let active = *selected_tag == tag;
        html! {
            <button
                class={classes!("tag-filter", active.then(|| "active"))}
                onclick={Callback::from(move |_| selected_tag.set(tag))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="work-page">
            <h1>{"Our Work"}</h1>
            <p class="work-intro">{"A few of the systems we've built with clients. Each one started with a single conversation."}</p>

            <div class="tag-filters">
                { tag_button(None, "All") }
                { for all_tags().into_iter().map(|tag| tag_button(Some(tag), tag)) }
            </div>

            <div class="project-grid">
                { for projects.into_iter().map(|project| html! { <ProjectCard {project} /> }) }
            </div>

            <style>
                {r#"
                .work-page {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 8rem 2rem 4rem;
                }
                .work-intro {
                    color: rgba(255, 255, 255, 0.75);
                }
                .tag-filters {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin: 2rem 0;
                }
                .tag-filter {
                    background: none;
                    border: 1px solid rgba(126, 178, 255, 0.3);
                    color: rgba(255, 255, 255, 0.8);
                    border-radius: 999px;
                    padding: 0.4rem 1rem;
                    cursor: pointer;
                }
                .tag-filter.active {
                    background: #1E90FF;
                    border-color: #1E90FF;
                    color: #fff;
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .project-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    overflow: hidden;
                }
                .project-card-link {
                    color: inherit;
                    text-decoration: none;
                }
                .project-card img {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    object-fit: cover;
                }
                .project-card-body {
                    padding: 1.25rem;
                }
                .project-tags {
                    list-style: none;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.4rem;
                    padding: 0;
                }
                .project-tags li {
                    font-size: 0.75rem;
                    background: rgba(126, 178, 255, 0.12);
                    color: #7EB2FF;
                    border-radius: 4px;
                    padding: 0.15rem 0.5rem;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub id: String,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let Some(project) = find_project(&props.id) else {
        return html! { <NotFound /> };
    };

    html! {
        <div class="project-detail">
            <Link<Route> to={Route::Work} classes="forward-link">
                {"← All work"}
            </Link<Route>>
            <h1>{ project.title }</h1>
            <p class="project-meta">
                { format!("{} · {}", project.client, project.year) }
            </p>
            <img class="project-hero" src={project.image} alt={project.title} loading="lazy" />
            <p class="project-long">{ project.long_description }</p>

            if let Some(video) = project.video_embed_url {
                <div class="project-video">
                    <iframe
                        src={video}
                        title={project.title}
                        loading="lazy"
                        allow="accelerometer; encrypted-media; picture-in-picture"
                        allowfullscreen={true}
                    />
                </div>
            }

            <h2>{"Services"}</h2>
            <ul class="project-services">
                { for project.services.iter().map(|s| html! { <li>{ *s }</li> }) }
            </ul>

            if !project.gallery.is_empty() {
                <div class="project-gallery">
                    { for project.gallery.iter().map(|src| html! {
                        <img src={*src} alt={project.title} loading="lazy" />
                    }) }
                </div>
            }

            <section class="project-cta">
                <h2>{"Want something like this?"}</h2>
                <ConsultationCta source_page={format!("project-modal:{}", project.id)} />
            </section>

            <style>
                {r#"
                .project-detail {
                    max-width: 860px;
                    margin: 0 auto;
                    padding: 8rem 2rem 4rem;
                    line-height: 1.7;
                }
                .project-meta {
                    color: rgba(255, 255, 255, 0.6);
                }
                .project-hero, .project-gallery img {
                    width: 100%;
                    border-radius: 12px;
                }
                .project-video {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    margin: 2rem 0;
                }
                .project-video iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                    border-radius: 12px;
                }
                .project-gallery {
                    display: grid;
                    gap: 1rem;
                    margin: 2rem 0;
                }
                .project-cta {
                    text-align: center;
                    padding-top: 3rem;
                }
                "#}
            </style>
        </div>
    }
}
