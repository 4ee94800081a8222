use leptos::prelude::*;

use crate::notification::{
    Notification, NotificationKind, NotificationState, NOTIFICATION_TIMEOUT,
};

/// Shared handle on the page's single toast.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    state: RwSignal<NotificationState>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(NotificationState::default()),
        }
    }

    /// Replaces whatever is showing. Earlier timers hold stale tickets and
    /// leave the new toast alone.
    pub fn show(&self, notification: Notification) {
        let Some(ticket) = self.state.try_update(|s| s.show(notification)) else {
            return;
        };
        let state = self.state;
        set_timeout(
            move || state.maybe_update(|s| s.expire(ticket)),
            NOTIFICATION_TIMEOUT,
        );
    }

    pub fn dismiss(&self) {
        self.state.update(NotificationState::dismiss);
    }

    pub fn current(&self) -> Option<Notification> {
        self.state.with(|s| s.current().cloned())
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    move || {
        notifier.current().map(|n| {
            let (accent, icon) = match n.kind {
                NotificationKind::Success => ("border-green text-green", "✓"),
                NotificationKind::Error => ("border-red text-red", "✗"),
            };
            view! {
                <div
                    role="status"
                    aria-live="polite"
                    class=format!(
                        "fixed bottom-6 right-6 z-50 flex items-start gap-3 max-w-sm p-4 rounded-md border-l-4 bg-brightBlack/90 shadow-lg {accent}",
                    )
                >
                    <span class="font-bold">{icon}</span>
                    <p class="flex-1 text-sm text-foreground">{n.message}</p>
                    <button
                        class="text-muted hover:text-foreground"
                        aria-label="Dismiss notification"
                        on:click=move |_| notifier.dismiss()
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
