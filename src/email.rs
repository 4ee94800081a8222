use async_trait::async_trait;
use gloo::net::http::Request;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::portfolio::OWNER_NAME;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Addresses the EmailJS service and template that forward messages to the
/// site owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient_name: String,
}

impl EmailConfig {
    /// Identifiers stamped in by build.rs.
    pub fn from_build_env() -> Self {
        Self {
            service_id: env!("PORTFOLIO_EMAILJS_SERVICE_ID").to_string(),
            template_id: env!("PORTFOLIO_EMAILJS_TEMPLATE_ID").to_string(),
            public_key: env!("PORTFOLIO_EMAILJS_PUBLIC_KEY").to_string(),
            recipient_name: OWNER_NAME.to_string(),
        }
    }
}

/// Template variables handed to the email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
    pub reply_to: String,
    /// Same address under the hyphenated key some templates read.
    #[serde(rename = "reply-to")]
    pub reply_to_header: String,
    pub timestamp: String,
    pub subject: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendFailure {
    #[error("Failed to send message: {0}")]
    Rejected(String),
    #[error("Failed to send message (error code {0}). Please try again.")]
    Status(u16),
    #[error("Could not reach the mail service. Please check your connection and try again.")]
    Connectivity,
}

impl SendFailure {
    /// Textual detail wins over a status code; with neither, the failure is
    /// treated as a connectivity problem.
    pub fn classify(status: Option<u16>, text: Option<&str>) -> Self {
        match (text.map(str::trim).filter(|t| !t.is_empty()), status) {
            (Some(text), _) => Self::Rejected(text.to_string()),
            (None, Some(status)) => Self::Status(status),
            (None, None) => Self::Connectivity,
        }
    }
}

pub fn is_success_status(status: u16) -> bool {
    StatusCode::from_u16(status)
        .map(|s| s.is_success())
        .unwrap_or(false)
}

/// Hands a message to the delivery service. `Ok` carries the status code the
/// service answered with.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait EmailSender {
    async fn send(&self, params: &TemplateParams) -> Result<u16, SendFailure>;
}

#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

/// Browser-side client for the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    config: EmailConfig,
    endpoint: String,
}

impl EmailJsClient {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            endpoint: EMAILJS_SEND_URL.to_string(),
        }
    }

    pub fn config(&self) -> &EmailConfig {
        &self.config
    }

    pub fn request_body<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        }
    }
}

#[async_trait(?Send)]
impl EmailSender for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<u16, SendFailure> {
        let request = Request::post(&self.endpoint)
            .json(&self.request_body(params))
            .map_err(|e| {
                log::warn!("couldn't encode email request: {}", e);
                SendFailure::Connectivity
            })?;
        let response = request.send().await.map_err(|e| {
            log::warn!("email request failed: {}", e);
            SendFailure::Connectivity
        })?;

        let status = response.status();
        if is_success_status(status) {
            return Ok(status);
        }
        let text = response.text().await.ok();
        log::warn!(
            "email service answered {}: {}",
            status,
            text.as_deref().unwrap_or_default()
        );
        Err(SendFailure::classify(Some(status), text.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> TemplateParams {
        TemplateParams {
            from_name: "Ada Lovelace".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            to_name: "Alex Morgan".to_string(),
            reply_to: "ada@example.com".to_string(),
            reply_to_header: "ada@example.com".to_string(),
            timestamp: "2026-10-17 09:30:00 UTC".to_string(),
            subject: "New portfolio message from Ada Lovelace".to_string(),
        }
    }

    #[test]
    fn test_classify_prefers_text() {
        assert_eq!(
            SendFailure::classify(Some(400), Some("The template ID is invalid")),
            SendFailure::Rejected("The template ID is invalid".to_string())
        );
    }

    #[test]
    fn test_classify_falls_back_to_status() {
        let failure = SendFailure::classify(Some(422), Some("  "));
        assert_eq!(failure, SendFailure::Status(422));
        assert!(failure.to_string().contains("422"));
    }

    #[test]
    fn test_classify_without_detail_is_connectivity() {
        assert_eq!(SendFailure::classify(None, None), SendFailure::Connectivity);
    }

    #[test]
    fn test_success_status() {
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(!is_success_status(302));
        assert!(!is_success_status(422));
        assert!(!is_success_status(0));
    }

    #[test]
    fn test_request_body_shape() {
        let client = EmailJsClient::new(EmailConfig {
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            public_key: "pk".to_string(),
            recipient_name: "Alex Morgan".to_string(),
        });
        let params = params();
        let body = serde_json::to_value(client.request_body(&params)).expect("serializes");

        assert_eq!(body["service_id"], "svc");
        assert_eq!(body["template_id"], "tpl");
        assert_eq!(body["user_id"], "pk");
        assert_eq!(body["template_params"]["reply_to"], "ada@example.com");
        assert_eq!(body["template_params"]["reply-to"], "ada@example.com");
        assert_eq!(body["template_params"]["timestamp"], "2026-10-17 09:30:00 UTC");
        assert!(body["template_params"].get("reply_to_header").is_none());
        assert_eq!(
            body["template_params"]["subject"],
            "New portfolio message from Ada Lovelace"
        );
    }

    #[test]
    fn test_build_env_config_is_populated() {
        let config = EmailConfig::from_build_env();
        assert!(!config.service_id.is_empty());
        assert!(!config.template_id.is_empty());
        assert!(!config.public_key.is_empty());
        assert_eq!(config.recipient_name, OWNER_NAME);
    }
}
