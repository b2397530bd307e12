use serde::{Deserialize, Serialize};

use crate::constants::quiz::{QuestionDef, QUESTIONS};

/// A question as shown to the quiz taker. Carries no correctness information.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn option_text(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}

impl From<&QuestionDef> for Question {
    fn from(def: &QuestionDef) -> Self {
        Question {
            prompt: def.prompt.to_string(),
            options: def.options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// The display catalog in quiz order.
pub fn quiz_questions() -> Vec<Question> {
    QUESTIONS.iter().map(Question::from).collect()
}
