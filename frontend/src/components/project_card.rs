use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::Project;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    html! {
        <article class="project-card">
            <Link<Route> to={Route::Project { id: project.id.to_string() }} classes="project-card-link">
                <img src={project.image} alt={project.title} loading="lazy" />
                <div class="project-card-body">
                    <h3>{ project.title }</h3>
                    <p>{ project.description }</p>
                    <ul class="project-tags">
                        { for project.tags.iter().map(|tag| html! { <li>{ *tag }</li> }) }
                    </ul>
                </div>
            </Link<Route>>
        </article>
    }
}
