use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub score: u32,
    pub recommendation: String,
}

impl SubmitResponse {
    pub fn new(score: u32, recommendation: &str) -> Self {
        SubmitResponse {
            ok: true,
            score,
            recommendation: recommendation.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}
