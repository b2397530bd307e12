use serde_json::Value;

use crate::constants::quiz::{
    ADVANCED_MESSAGE, ADVANCED_MIN_SCORE, BEGINNER_MESSAGE, INTERMEDIATE_MESSAGE,
    INTERMEDIATE_MIN_SCORE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationTier {
    Advanced,
    Intermediate,
    Beginner,
}

impl RecommendationTier {
    pub fn from_score(score: u32) -> Self {
        if score >= ADVANCED_MIN_SCORE {
            RecommendationTier::Advanced
        } else if score >= INTERMEDIATE_MIN_SCORE {
            RecommendationTier::Intermediate
        } else {
            RecommendationTier::Beginner
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RecommendationTier::Advanced => ADVANCED_MESSAGE,
            RecommendationTier::Intermediate => INTERMEDIATE_MESSAGE,
            RecommendationTier::Beginner => BEGINNER_MESSAGE,
        }
    }
}

/// Strict match: only a JSON number equal to the key counts. `"1"`, `true`
/// and `null` never match.
fn is_match(answer: &Value, correct: u64) -> bool {
    match answer {
        Value::Number(n) => n.as_f64() == Some(correct as f64),
        _ => false,
    }
}

/// Counts positions where the submitted answer equals the key. Missing
/// positions score nothing and entries past the key are ignored.
pub fn score_answers(answers: &[Value], key: &[u64]) -> u32 {
    key.iter()
        .zip(answers.iter())
        .filter(|&(correct, answer)| is_match(answer, *correct))
        .count() as u32
}
