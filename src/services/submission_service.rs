use std::sync::Arc;

use crate::{
    constants::quiz::{ANSWER_KEY, QUESTION_COUNT},
    errors::AppResult,
    mailer::{EmailMessage, Mailer},
    models::{
        domain::ResultRecord,
        dto::{SubmitRequest, SubmitResponse},
    },
    repositories::ResultRepository,
    services::scoring::{score_answers, RecommendationTier},
};

pub struct SubmissionService {
    repository: Arc<dyn ResultRepository>,
    mailer: Arc<dyn Mailer>,
}

impl SubmissionService {
    pub fn new(repository: Arc<dyn ResultRepository>, mailer: Arc<dyn Mailer>) -> Self {
        Self { repository, mailer }
    }

    /// Scores a submission, stores the result and emails the submitter.
    ///
    /// The record is written before the email goes out, so a failed send
    /// still leaves the record stored while the caller sees an error.
    pub async fn submit(&self, request: SubmitRequest) -> AppResult<SubmitResponse> {
        let submission = request.validate()?;

        let score = score_answers(&submission.answers, &ANSWER_KEY);
        let recommendation = RecommendationTier::from_score(score).message();

        let record = ResultRecord::new(
            submission.name,
            submission.email,
            submission.answers,
            score,
            recommendation.to_string(),
        );
        let record = self.repository.insert(record).await?;

        let message = EmailMessage::quiz_result(
            &record.name,
            &record.email,
            score,
            QUESTION_COUNT,
            recommendation,
        );
        self.mailer.send(message).await?;

        log::info!("Scored submission from {}: {}/{}", record.email, score, QUESTION_COUNT);

        Ok(SubmitResponse::new(score, recommendation))
    }
}
