use leptos::prelude::*;

use crate::portfolio::{OWNER_NAME, PROFILE_IMAGE};

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <img
            src=PROFILE_IMAGE
            alt=format!("Portrait of {OWNER_NAME}")
            width="224"
            height="224"
            class="w-40 h-40 lg:w-56 lg:h-56 rounded-full object-cover border-4 border-purple/40 shadow-2xl"
        />
    }
}
