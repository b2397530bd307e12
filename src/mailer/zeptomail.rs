use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    mailer::{EmailMessage, Mailer},
};

#[derive(Debug, Serialize)]
struct MailAddress<'a> {
    address: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct Recipient<'a> {
    email_address: MailAddress<'a>,
}

#[derive(Debug, Serialize)]
struct SendMailPayload<'a> {
    from: MailAddress<'a>,
    to: Vec<Recipient<'a>>,
    subject: &'a str,
    textbody: &'a str,
    htmlbody: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMailResponse {
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the ZeptoMail transactional email API.
pub struct ZeptoMailClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<SecretString>,
    from_address: String,
    from_name: String,
}

impl ZeptoMailClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: Self::endpoint_for(&config.zeptomail_url),
            token: config.zeptomail_token.clone(),
            from_address: config.zeptomail_from.clone(),
            from_name: config.mail_from_name.clone(),
        }
    }

    fn endpoint_for(base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        if base.starts_with("http://") || base.starts_with("https://") {
            format!("{}/v1.1/email", base)
        } else {
            format!("https://{}/v1.1/email", base)
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn payload<'a>(&'a self, message: &'a EmailMessage) -> SendMailPayload<'a> {
        SendMailPayload {
            from: MailAddress {
                address: &self.from_address,
                name: &self.from_name,
            },
            to: vec![Recipient {
                email_address: MailAddress {
                    address: &message.to_address,
                    name: &message.to_name,
                },
            }],
            subject: &message.subject,
            textbody: &message.text_body,
            htmlbody: &message.html_body,
        }
    }
}

#[async_trait]
impl Mailer for ZeptoMailClient {
    async fn send(&self, message: EmailMessage) -> AppResult<()> {
        let token = self
            .token
            .as_ref()
            .ok_or_else(|| AppError::EmailError("ZEPTOMAIL_TOKEN is not set".to_string()))?;

        let response = self
            .http
            .post(&self.endpoint)
            .header("accept", "application/json")
            .header("authorization", token.expose_secret())
            .json(&self.payload(&message))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::error!("ZeptoMail rejected message to {}: {}", message.to_address, status);
            return Err(AppError::EmailError(format!(
                "provider returned {}: {}",
                status, body
            )));
        }

        let parsed: SendMailResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::EmailError(format!("malformed provider response: {}", e))
        })?;

        log::info!(
            "Sent quiz result email to {} (request {}, {})",
            message.to_address,
            parsed.request_id.as_deref().unwrap_or("unknown"),
            parsed.message.as_deref().unwrap_or("no message")
        );

        Ok(())
    }
}
