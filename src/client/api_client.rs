use reqwest::StatusCode;
use thiserror::Error;

use crate::{
    errors::ErrorResponse,
    models::{
        domain::Question,
        dto::{QuestionsResponse, SubmitRequest, SubmitResponse},
    },
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with `{ ok: false, error }`.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("unexpected response ({status}): {body}")]
    UnexpectedResponse { status: StatusCode, body: String },
}

/// HTTP client for the quiz server.
pub struct QuizApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl QuizApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_questions(&self) -> Result<Vec<Question>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/questions"))
            .send()
            .await?
            .error_for_status()?;

        let body: QuestionsResponse = response.json().await?;
        Ok(body.questions)
    }

    pub async fn submit(&self, request: &SubmitRequest) -> Result<SubmitResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/api/submit"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&body)
                .map_err(|_| ClientError::UnexpectedResponse { status, body });
        }

        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => Err(ClientError::Rejected {
                status,
                message: error.error,
            }),
            Err(_) => Err(ClientError::UnexpectedResponse { status, body }),
        }
    }
}
