use std::fmt;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, LazyLock,
};

use chrono::{DateTime, Utc};
use regex::Regex;
use thiserror::Error;

use crate::email::{is_success_status, EmailSender, SendFailure, TemplateParams};
use crate::notification::Notification;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern should compile"));
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

pub const SENT_MESSAGE: &str = "Thanks for reaching out! Your message has been sent.";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    EmptyName,
    #[error("Name can only contain letters and spaces.")]
    InvalidName,
    #[error("Please enter your email address.")]
    EmptyEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a message.")]
    EmptyMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::InvalidName);
    }
    Ok(name)
}

pub fn validate_email(email: &str) -> Result<&str, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email)
}

pub fn validate_message(message: &str) -> Result<&str, ValidationError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    Ok(message)
}

/// Ctrl+Enter, or Cmd+Enter on macOS.
pub fn is_submit_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key == "Enter"
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormState {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Inline hint for a single field.
    pub fn hint(&self, field: Field) -> Option<ValidationError> {
        let res = match field {
            Field::Name => validate_name(&self.name),
            Field::Email => validate_email(&self.email),
            Field::Message => validate_message(&self.message),
        };
        res.err()
    }

    /// Checks name, then email, then message and stops at the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_message(&self.message)?;
        Ok(())
    }

    pub fn message_len(&self) -> usize {
        self.message.chars().count()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn template_params(&self, recipient_name: &str, now: DateTime<Utc>) -> TemplateParams {
        let name = self.name.trim();
        let email = self.email.trim();
        TemplateParams {
            from_name: name.to_string(),
            from_email: email.to_string(),
            message: self.message.trim().to_string(),
            to_name: recipient_name.to_string(),
            reply_to: email.to_string(),
            reply_to_header: email.to_string(),
            timestamp: now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            subject: format!("New portfolio message from {}", name),
        }
    }

    /// Successful sends clear the form; anything else keeps the input so the
    /// visitor can retry.
    pub fn apply(&mut self, outcome: &SubmitOutcome) {
        if let SubmitOutcome::Sent = outcome {
            self.clear();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

type StatusObserver = Arc<dyn Fn(SubmissionStatus) + Send + Sync>;

/// Lets one submission through at a time.
#[derive(Clone, Default)]
pub struct SubmitGate {
    busy: Arc<AtomicBool>,
    observer: Option<StatusObserver>,
}

impl fmt::Debug for SubmitGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitGate")
            .field("status", &self.status())
            .finish()
    }
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `observer` hears every status change, e.g. to disable the form inputs.
    pub fn with_observer(observer: impl Fn(SubmissionStatus) + Send + Sync + 'static) -> Self {
        Self {
            busy: Arc::new(AtomicBool::new(false)),
            observer: Some(Arc::new(observer)),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        if self.busy.load(Ordering::Acquire) {
            SubmissionStatus::Submitting
        } else {
            SubmissionStatus::Idle
        }
    }

    pub fn is_busy(&self) -> bool {
        self.status() == SubmissionStatus::Submitting
    }

    pub fn try_begin(&self) -> Option<SubmitGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        self.notify(SubmissionStatus::Submitting);
        Some(SubmitGuard { gate: self })
    }

    fn notify(&self, status: SubmissionStatus) {
        if let Some(observer) = &self.observer {
            observer(status);
        }
    }
}

/// Holds the gate closed. Dropping it reopens the gate on every exit path.
#[derive(Debug)]
pub struct SubmitGuard<'a> {
    gate: &'a SubmitGate,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
        self.gate.notify(SubmissionStatus::Idle);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission is still in flight.
    Busy,
    Invalid(ValidationError),
    Sent,
    Failed(SendFailure),
}

impl SubmitOutcome {
    pub fn notification(&self) -> Option<Notification> {
        match self {
            SubmitOutcome::Busy => None,
            SubmitOutcome::Invalid(e) => Some(Notification::error(e.to_string())),
            SubmitOutcome::Sent => Some(Notification::success(SENT_MESSAGE)),
            SubmitOutcome::Failed(e) => Some(Notification::error(e.to_string())),
        }
    }
}

/// Validates `form` and, if it passes, delivers it through `sender`.
///
/// The gate is held for the duration of the delivery call and released when
/// this returns, whichever way the call went. Nothing is retried.
pub async fn submit_message<S>(
    form: &ContactFormState,
    gate: &SubmitGate,
    sender: &S,
    recipient_name: &str,
    now: DateTime<Utc>,
) -> SubmitOutcome
where
    S: EmailSender + ?Sized,
{
    if gate.is_busy() {
        return SubmitOutcome::Busy;
    }
    if let Err(e) = form.validate() {
        log::debug!("contact form rejected: {:?}", e);
        return SubmitOutcome::Invalid(e);
    }
    let Some(_guard) = gate.try_begin() else {
        return SubmitOutcome::Busy;
    };

    let params = form.template_params(recipient_name, now);
    log::debug!("sending message from {}", params.reply_to);
    match sender.send(&params).await {
        Ok(status) if is_success_status(status) => {
            log::info!("message from {} delivered", params.reply_to);
            SubmitOutcome::Sent
        }
        Ok(status) => {
            log::warn!("email service answered {}", status);
            SubmitOutcome::Failed(SendFailure::Status(status))
        }
        Err(e) => {
            log::warn!("message from {} not delivered: {:?}", params.reply_to, e);
            SubmitOutcome::Failed(e)
        }
    }
}
