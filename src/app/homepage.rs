use leptos::prelude::*;
use leptos_meta::Title;

use crate::portfolio::{
    DOWNLOAD_ICON, OWNER_NAME, OWNER_TAGLINE, OWNER_TITLE, RESUME_DOWNLOAD_NAME, RESUME_FILE,
};
use crate::scroll::Section;

use super::about::About;
use super::avatar::Avatar;
use super::contact::ContactForm;
use super::projects::ProjectGallery;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="w-full page-content">
            <Hero />
            <section id=Section::Projects.id() class="py-16 section-content">
                <h2 class="text-3xl font-bold mb-8 text-center">"Projects"</h2>
                <ProjectGallery />
            </section>
            <section id=Section::About.id() class="py-16 section-content">
                <h2 class="text-3xl font-bold mb-8 text-center">"About Me"</h2>
                <About />
            </section>
            <section id=Section::Contact.id() class="py-16 section-content">
                <h2 class="text-3xl font-bold mb-4 text-center">"Get in Touch"</h2>
                <p class="max-w-2xl mx-auto mb-8 text-center text-muted">
                    "Have a question, an idea, or an opportunity? Send me a message and it lands straight in my inbox."
                </p>
                <ContactForm />
            </section>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section
            id=Section::Home.id()
            class="flex flex-col lg:flex-row justify-center items-center gap-8 lg:gap-12 min-h-[80vh] section-content"
        >
            <div class="flex-shrink-0">
                <Avatar />
            </div>
            <div class="max-w-2xl text-center lg:text-left">
                <h1 class="text-4xl lg:text-5xl font-bold mb-4">"Hi, I'm " {OWNER_NAME}</h1>
                <p class="text-xl text-cyan font-medium mb-4">{OWNER_TITLE}</p>
                <p class="text-lg leading-relaxed mb-8">{OWNER_TAGLINE}</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                    <a
                        href=Section::Projects.href()
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                    >
                        "See my work"
                    </a>
                    <a
                        href=Section::Contact.href()
                        class="bg-purple/20 hover:bg-purple/30 text-purple px-6 py-3 rounded-md font-medium transition-all duration-200 border border-purple/30"
                    >
                        "Contact me"
                    </a>
                    <a
                        href=RESUME_FILE
                        download=RESUME_DOWNLOAD_NAME
                        class="px-6 py-3 rounded-md font-medium border border-muted/30 hover:border-muted transition-all duration-200"
                    >
                        <i class=format!("{DOWNLOAD_ICON} mr-2") />
                        "Résumé"
                    </a>
                </div>
            </div>
        </section>
    }
}
