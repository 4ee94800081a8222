use chrono::DateTime;
use leptos::prelude::*;

use crate::portfolio::{OWNER_EMAIL, OWNER_NAME, SOCIAL_LINKS};

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(BUILD_TIME).ok();
    let year = built
        .map(|d| d.format("%Y").to_string())
        .unwrap_or_default();
    let built = built
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| BUILD_TIME.to_string());

    view! {
        <footer class="mt-16 py-8 border-t border-muted/30 text-sm text-muted">
            <div class="mx-auto max-w-6xl px-4 flex flex-col sm:flex-row items-center justify-between gap-4">
                <p>"© " {year} " " {OWNER_NAME}</p>
                <div class="flex items-center gap-4">
                    <a href=format!("mailto:{OWNER_EMAIL}") class="hover:text-foreground">
                        {OWNER_EMAIL}
                    </a>
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-xl hover:text-foreground"
                                    aria-label=link.label
                                >
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p>"Last built " {built}</p>
            </div>
        </footer>
    }
}
