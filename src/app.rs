mod about;
mod avatar;
mod contact;
mod footer;
mod header;
mod homepage;
mod projects;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::{FAVICON, OWNER_NAME, OWNER_TAGLINE};

use footer::Footer;
use header::Header;
use homepage::HomePage;
pub use toast::Notifier;
use toast::Toast;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href=FAVICON />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(Notifier::new());

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta name="description" content=OWNER_TAGLINE />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow items-center mx-auto w-full max-w-6xl px-4">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <Toast />
        </Router>
    }
}
