use std::time::Duration;

/// How long a notification stays up after the most recent `show`.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Identifies one `show` call. Only the timer holding the latest ticket may
/// clear the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowTicket(u64);

/// The single live toast. Showing a new one replaces the old one and
/// invalidates the old one's timer; there is no queue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationState {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationState {
    /// Hand the returned ticket to a timer that fires after
    /// `NOTIFICATION_TIMEOUT` and calls `expire`.
    pub fn show(&mut self, notification: Notification) -> ShowTicket {
        self.generation += 1;
        self.current = Some(notification);
        ShowTicket(self.generation)
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clears the notification if `ticket` is from the latest `show`.
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, ticket: ShowTicket) -> bool {
        if ticket.0 != self.generation || self.current.is_none() {
            return false;
        }
        self.dismiss();
        true
    }

    pub fn visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_five_seconds() {
        assert_eq!(NOTIFICATION_TIMEOUT, Duration::from_secs(5));
    }

    #[test]
    fn test_expire_clears_latest() {
        let mut state = NotificationState::default();
        let ticket = state.show(Notification::success("Message sent"));
        assert!(state.visible());

        assert!(state.expire(ticket));
        assert!(!state.visible());
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_show_replaces_and_restarts_timer() {
        let mut state = NotificationState::default();
        let first = state.show(Notification::error("first"));
        let second = state.show(Notification::success("second"));

        assert_eq!(state.current().map(|n| n.message.as_str()), Some("second"));
        assert_eq!(state.current().map(|n| n.kind), Some(NotificationKind::Success));

        // the first timer fires but belongs to a replaced notification
        assert!(!state.expire(first));
        assert!(state.visible());
        assert!(state.expire(second));
        assert!(!state.visible());
    }

    #[test]
    fn test_expiry_does_not_depend_on_the_clock() {
        let mut state = NotificationState::default();
        let ticket = state.show(Notification::error("oops"));
        // nothing but the ticket decides; a timer firing early or late still clears
        assert!(state.expire(ticket));
        assert!(!state.expire(ticket));
    }

    #[test]
    fn test_dismiss_is_immediate() {
        let mut state = NotificationState::default();
        let ticket = state.show(Notification::error("oops"));
        state.dismiss();
        assert!(!state.visible());
        // late timer is a no-op
        assert!(!state.expire(ticket));
    }
}
