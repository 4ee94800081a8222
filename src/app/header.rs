use leptos::{html, prelude::*};
use leptos_use::{on_click_outside, use_window_scroll};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::portfolio::OWNER_NAME;
use crate::scroll::{active_section, shows_back_to_top, Section, SectionBounds};

fn section_bounds(section: Section) -> Option<SectionBounds> {
    let el = document()
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SectionBounds {
        section,
        top: el.offset_top() as f64,
        height: el.offset_height() as f64,
    })
}

#[component]
pub fn Header() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let active = RwSignal::new(Section::Home);
    let menu_open = RwSignal::new(false);
    let menu_ref = NodeRef::<html::Div>::new();
    let _ = on_click_outside(menu_ref, move |_| menu_open.set(false));
    let back_to_top = Memo::new(move |_| shows_back_to_top(scroll_y.get()));

    // the scroll listener is dropped with the component
    Effect::new(move |_| {
        let y = scroll_y.get();
        let bounds = Section::ALL
            .into_iter()
            .filter_map(section_bounds)
            .collect::<Vec<_>>();
        if let Some(section) = active_section(y, &bounds) {
            if active.get_untracked() != section {
                active.set(section);
            }
        }
    });

    view! {
        <header class="sticky top-0 z-40 bg-background/90 backdrop-blur shadow-lg">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-4" node_ref=menu_ref>
                <div class="flex items-center justify-between">
                    <a href=Section::Home.href() class="text-2xl font-bold">
                        <span class="text-green">"➜"</span>
                        " "
                        <span class="text-cyan">{OWNER_NAME}</span>
                    </a>
                    <nav class="hidden md:flex gap-6" aria-label="Sections">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink section active menu_open /> })
                            .collect_view()}
                    </nav>
                    <button
                        class="md:hidden text-2xl"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|v| *v = !*v)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <nav class="md:hidden flex flex-col gap-4 mt-4 pb-2" aria-label="Sections">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink section active menu_open /> })
                            .collect_view()}
                    </nav>
                </Show>
            </div>
        </header>
        <Show when=move || back_to_top.get()>
            <button
                class="fixed bottom-6 left-6 z-40 px-3 py-2 rounded-md bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30"
                aria-label="Back to top"
                on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
            >
                "↑"
            </button>
        </Show>
    }
}

#[component]
fn NavLink(section: Section, active: RwSignal<Section>, menu_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <a
            href=section.href()
            class=move || {
                if active.get() == section {
                    "font-medium text-purple border-b-2 border-purple"
                } else {
                    "font-medium text-foreground hover:text-purple transition-colors duration-200"
                }
            }
            on:click=move |_| {
                active.set(section);
                menu_open.set(false);
            }
        >
            {section.label()}
        </a>
    }
}
