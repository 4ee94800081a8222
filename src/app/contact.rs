use chrono::Utc;
use leptos::{either::Either, ev::KeyboardEvent, prelude::*, task::spawn_local};

use crate::contact::{
    is_submit_shortcut, submit_message, ContactFormState, Field, SubmissionStatus, SubmitGate,
    SubmitOutcome,
};
use crate::email::{EmailConfig, EmailJsClient};

use super::toast::Notifier;

#[component]
pub fn ContactForm() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let form = RwSignal::new(ContactFormState::default());
    // fields edited since the last successful send
    let touched = RwSignal::new(Vec::<Field>::new());
    let status = RwSignal::new(SubmissionStatus::Idle);
    let gate = SubmitGate::with_observer(move |s| status.set(s));
    let client = EmailJsClient::new(EmailConfig::from_build_env());
    let disabled = Signal::derive(move || status.get() == SubmissionStatus::Submitting);

    let submit = move || {
        let snapshot = form.get_untracked();
        let gate = gate.clone();
        let client = client.clone();
        spawn_local(async move {
            let recipient = client.config().recipient_name.clone();
            let outcome = submit_message(&snapshot, &gate, &client, &recipient, Utc::now()).await;
            form.update(|f| f.apply(&outcome));
            if outcome == SubmitOutcome::Sent {
                touched.set(Vec::new());
            }
            if let Some(n) = outcome.notification() {
                notifier.show(n);
            }
        });
    };
    let submit_on_key = submit.clone();

    // not a <form>: plain Enter in a field must not trigger implicit submission
    view! {
        <div
            role="form"
            aria-label="Contact form"
            class="max-w-2xl mx-auto flex flex-col gap-5 p-6 rounded-lg bg-brightBlack/30 border border-muted/30"
            on:keydown=move |ev: KeyboardEvent| {
                if is_submit_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
                    ev.prevent_default();
                    submit_on_key();
                }
            }
        >
            <FormField field=Field::Name label="Name" kind="text" form touched disabled />
            <FormField field=Field::Email label="Email" kind="email" form touched disabled />
            <FormField field=Field::Message label="Message" kind="textarea" form touched disabled />
            <div class="flex items-center justify-between gap-4">
                <span class="text-xs text-muted">
                    {move || form.with(|f| f.message_len())}
                    " characters · Ctrl+Enter to send"
                </span>
                <button
                    type="button"
                    on:click=move |_| submit()
                    prop:disabled=move || disabled.get()
                    class="px-6 py-3 rounded-md font-medium bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {move || if disabled.get() { "Sending..." } else { "Send Message" }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn FormField(
    field: Field,
    label: &'static str,
    /// `"textarea"` renders a multi-line field, anything else is an input type
    kind: &'static str,
    form: RwSignal<ContactFormState>,
    touched: RwSignal<Vec<Field>>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let id = format!("contact_{}", label.to_lowercase());
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|f| f.set(field, event_target_value(&ev)));
        touched.update(|t| {
            if !t.contains(&field) {
                t.push(field);
            }
        });
    };
    let hint = move || {
        if !touched.with(|t| t.contains(&field)) {
            return None;
        }
        form.with(|f| f.hint(field)).map(|e| {
            view! { <p class="mt-1 text-xs text-red">{e.to_string()}</p> }
        })
    };
    let class = "w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan bg-background text-foreground placeholder-muted transition-all duration-200 disabled:opacity-50";

    view! {
        <div>
            <label for=id.clone() class="block mb-1 font-medium text-cyan">
                {label}
            </label>
            {if kind == "textarea" {
                Either::Left(
                    view! {
                        <textarea
                            id=id
                            rows="6"
                            class=class
                            prop:value=value
                            prop:disabled=move || disabled.get()
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            id=id
                            type=kind
                            class=class
                            prop:value=value
                            prop:disabled=move || disabled.get()
                            on:input=on_input
                        />
                    },
                )
            }}
            {hint}
        </div>
    }
}
