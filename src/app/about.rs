use leptos::prelude::*;

use crate::portfolio::{DOWNLOAD_ICON, RESUME_DOWNLOAD_NAME, RESUME_FILE, SKILLS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="flex flex-col lg:flex-row gap-8 lg:gap-12">
            <div class="w-full lg:max-w-2xl">
                <p class="text-base mb-4 leading-relaxed">
                    "I'm a software engineer who likes working close to the metal and close to the user at the same time. Most days that means Rust services, web frontends compiled to WASM, and the tooling that glues them together."
                </p>
                <p class="text-base mb-4 leading-relaxed">
                    "I care about software that is "
                    <strong>"fast, observable and boring to operate"</strong>
                    ", and about teams where people can do the best work of their careers."
                </p>
                <p class="text-base mb-4 leading-relaxed">
                    "Outside of work you'll find me climbing, brewing far too much coffee, or soldering another mechanical keyboard."
                </p>
                <a
                    href=RESUME_FILE
                    download=RESUME_DOWNLOAD_NAME
                    class="inline-block mt-2 text-cyan hover:text-brightCyan font-medium"
                >
                    <i class=format!("{DOWNLOAD_ICON} mr-2") />
                    "Download my résumé"
                </a>
            </div>
            <div class="w-full lg:max-w-md">
                <h3 class="text-xl font-bold mb-4">"Skills"</h3>
                <ul class="grid grid-cols-2 gap-3">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <li class="flex items-center gap-2 p-2 rounded-md bg-brightBlack/30">
                                    <i class=format!("{} text-2xl", skill.icon) />
                                    <span>{skill.name}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
