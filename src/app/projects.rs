use leptos::prelude::*;

use crate::portfolio::{Project, PROJECTS};

#[component]
pub fn ProjectGallery() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="flex flex-col p-6 rounded-lg bg-brightBlack/30 border border-muted/30 hover:border-purple/50 transition-colors duration-200">
            <h3 class="text-xl font-bold mb-2 text-brightWhite">{project.title}</h3>
            <p class="flex-grow mb-4 leading-relaxed">{project.description}</p>
            <a
                href=project.external_link
                target="_blank"
                rel="noopener noreferrer"
                class="self-start text-cyan hover:text-brightCyan font-medium"
            >
                {project.link_label}
                " →"
            </a>
        </article>
    }
}
