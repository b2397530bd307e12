use async_trait::async_trait;

use crate::errors::AppResult;

pub mod zeptomail;

pub use zeptomail::ZeptoMailClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to_address: String,
    pub to_name: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl EmailMessage {
    /// Confirmation sent after a scored submission.
    pub fn quiz_result(
        name: &str,
        email: &str,
        score: u32,
        total: usize,
        recommendation: &str,
    ) -> Self {
        EmailMessage {
            to_address: email.to_string(),
            to_name: name.to_string(),
            subject: format!("Your quiz result — {}/{}", score, total),
            text_body: format!(
                "Hi {name},\n\nYou scored {score}/{total}.\nRecommendation: {recommendation}\n\nThanks!"
            ),
            html_body: format!(
                "<p>Hi {name},</p><p>You scored <strong>{score}/{total}</strong>.</p><p><strong>Recommendation:</strong> {recommendation}</p>"
            ),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: EmailMessage) -> AppResult<()>;
}
