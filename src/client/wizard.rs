//! Step-by-step quiz flow: contact details, one screen per question, review,
//! then the submitted result. Scoring is never done here.

use serde_json::Value;
use thiserror::Error;

use crate::models::{
    domain::Question,
    dto::{SubmitRequest, SubmitResponse},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    ContactEntry,
    /// 1-based question number.
    Question(usize),
    Review,
    Submitted { score: u32, recommendation: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("name and email are required")]
    MissingContact,

    #[error("question {0} has not been answered")]
    Unanswered(usize),

    #[error("option {option} does not exist for question {question}")]
    InvalidOption { question: usize, option: usize },

    #[error("cannot {action} from {step:?}")]
    InvalidTransition { action: &'static str, step: WizardStep },
}

pub struct QuizWizard {
    questions: Vec<Question>,
    name: String,
    email: String,
    answers: Vec<Option<usize>>,
    step: WizardStep,
    submitting: bool,
    last_error: Option<String>,
}

impl QuizWizard {
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            name: String::new(),
            email: String::new(),
            answers,
            step: WizardStep::ContactEntry,
            submitting: false,
            last_error: None,
        }
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Question shown on the current screen, if any.
    pub fn current_question(&self) -> Option<(usize, &Question)> {
        match self.step {
            WizardStep::Question(number) => Some((number, &self.questions[number - 1])),
            _ => None,
        }
    }

    fn refuse<T>(&self, action: &'static str) -> Result<T, WizardError> {
        Err(WizardError::InvalidTransition {
            action,
            step: self.step.clone(),
        })
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), WizardError> {
        if self.step != WizardStep::ContactEntry {
            return self.refuse("edit name");
        }
        self.name = name.trim().to_string();
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), WizardError> {
        if self.step != WizardStep::ContactEntry {
            return self.refuse("edit email");
        }
        self.email = email.trim().to_string();
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), WizardError> {
        if self.step != WizardStep::ContactEntry {
            return self.refuse("start");
        }
        if self.name.is_empty() || self.email.is_empty() {
            return Err(WizardError::MissingContact);
        }
        self.step = if self.questions.is_empty() {
            WizardStep::Review
        } else {
            WizardStep::Question(1)
        };
        Ok(())
    }

    pub fn choose(&mut self, option: usize) -> Result<(), WizardError> {
        let WizardStep::Question(number) = self.step else {
            return self.refuse("choose an option");
        };
        if option >= self.questions[number - 1].option_count() {
            return Err(WizardError::InvalidOption {
                question: number,
                option,
            });
        }
        self.answers[number - 1] = Some(option);
        Ok(())
    }

    pub fn next(&mut self) -> Result<(), WizardError> {
        let WizardStep::Question(number) = self.step else {
            return self.refuse("go forward");
        };
        if self.answers[number - 1].is_none() {
            return Err(WizardError::Unanswered(number));
        }
        self.step = if number == self.questions.len() {
            WizardStep::Review
        } else {
            WizardStep::Question(number + 1)
        };
        Ok(())
    }

    pub fn back(&mut self) -> Result<(), WizardError> {
        match self.step {
            WizardStep::Question(number) if number > 1 => {
                self.step = WizardStep::Question(number - 1);
                Ok(())
            }
            _ => self.refuse("go back"),
        }
    }

    /// Returns to the first question keeping every answer.
    pub fn edit(&mut self) -> Result<(), WizardError> {
        if self.step != WizardStep::Review || self.submitting || self.questions.is_empty() {
            return self.refuse("edit");
        }
        self.step = WizardStep::Question(1);
        Ok(())
    }

    /// Marks a submission in flight and builds its payload. Unanswered
    /// questions are sent as `null`.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, WizardError> {
        if self.step != WizardStep::Review || self.submitting {
            return self.refuse("submit");
        }
        self.submitting = true;
        self.last_error = None;

        let answers = self
            .answers
            .iter()
            .map(|answer| answer.map(Value::from).unwrap_or(Value::Null))
            .collect();
        Ok(SubmitRequest::new(&self.name, &self.email, answers))
    }

    /// Applies the server's answer. A failure keeps the review screen so
    /// the user can submit again.
    pub fn complete_submit(
        &mut self,
        outcome: Result<SubmitResponse, String>,
    ) -> Result<(), WizardError> {
        if !self.submitting {
            return self.refuse("complete a submission");
        }
        self.submitting = false;

        match outcome {
            Ok(response) => {
                self.step = WizardStep::Submitted {
                    score: response.score,
                    recommendation: response.recommendation,
                };
            }
            Err(message) => self.last_error = Some(message),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::quiz_questions;
    use serde_json::json;

    fn started() -> QuizWizard {
        let mut wizard = QuizWizard::new(quiz_questions());
        wizard.set_name("Ada").unwrap();
        wizard.set_email("ada@example.com").unwrap();
        wizard.start().unwrap();
        wizard
    }

    fn at_review(choices: &[usize]) -> QuizWizard {
        let mut wizard = started();
        for &choice in choices {
            wizard.choose(choice).unwrap();
            wizard.next().unwrap();
        }
        assert_eq!(wizard.step(), &WizardStep::Review);
        wizard
    }

    #[test]
    fn test_start_requires_name_and_email() {
        let mut wizard = QuizWizard::new(quiz_questions());
        assert_eq!(wizard.start(), Err(WizardError::MissingContact));

        wizard.set_name("Ada").unwrap();
        wizard.set_email("   ").unwrap();
        assert_eq!(wizard.start(), Err(WizardError::MissingContact));
        assert_eq!(wizard.step(), &WizardStep::ContactEntry);

        wizard.set_email("ada@example.com").unwrap();
        wizard.start().unwrap();
        assert_eq!(wizard.step(), &WizardStep::Question(1));
    }

    #[test]
    fn test_next_requires_answer() {
        let mut wizard = started();
        assert_eq!(wizard.next(), Err(WizardError::Unanswered(1)));
        assert_eq!(wizard.step(), &WizardStep::Question(1));

        wizard.choose(2).unwrap();
        wizard.next().unwrap();
        assert_eq!(wizard.step(), &WizardStep::Question(2));
    }

    #[test]
    fn test_choose_rejects_unknown_option() {
        let mut wizard = started();
        assert_eq!(
            wizard.choose(4),
            Err(WizardError::InvalidOption {
                question: 1,
                option: 4
            })
        );
        assert_eq!(wizard.answers()[0], None);
    }

    #[test]
    fn test_choose_overwrites_previous_choice() {
        let mut wizard = started();
        wizard.choose(0).unwrap();
        wizard.choose(3).unwrap();
        assert_eq!(wizard.answers()[0], Some(3));
    }

    #[test]
    fn test_back_is_refused_on_first_question() {
        let mut wizard = started();
        assert!(matches!(
            wizard.back(),
            Err(WizardError::InvalidTransition { .. })
        ));

        wizard.choose(1).unwrap();
        wizard.next().unwrap();
        wizard.back().unwrap();
        assert_eq!(wizard.step(), &WizardStep::Question(1));
        assert_eq!(wizard.answers()[0], Some(1));
    }

    #[test]
    fn test_last_question_leads_to_review() {
        let wizard = at_review(&[1, 1, 0, 2, 3]);
        assert!(wizard.current_question().is_none());
    }

    #[test]
    fn test_edit_keeps_answers() {
        let mut wizard = at_review(&[1, 1, 0, 2, 3]);
        wizard.edit().unwrap();

        assert_eq!(wizard.step(), &WizardStep::Question(1));
        assert_eq!(
            wizard.answers(),
            &[Some(1), Some(1), Some(0), Some(2), Some(3)]
        );
    }

    #[test]
    fn test_begin_submit_builds_payload() {
        let mut wizard = at_review(&[1, 1, 0, 2, 3]);
        let request = wizard.begin_submit().unwrap();

        assert_eq!(request.name.as_deref(), Some("Ada"));
        assert_eq!(request.email.as_deref(), Some("ada@example.com"));
        assert_eq!(
            request.answers,
            Some(vec![json!(1), json!(1), json!(0), json!(2), json!(3)])
        );
        assert!(wizard.is_submitting());
    }

    #[test]
    fn test_double_submit_is_refused() {
        let mut wizard = at_review(&[1, 1, 0, 2, 3]);
        wizard.begin_submit().unwrap();
        assert!(wizard.begin_submit().is_err());
        assert!(wizard.edit().is_err());
    }

    #[test]
    fn test_successful_submit_shows_result() {
        let mut wizard = at_review(&[1, 1, 0, 2, 3]);
        wizard.begin_submit().unwrap();
        wizard
            .complete_submit(Ok(SubmitResponse::new(5, "Excellent")))
            .unwrap();

        assert_eq!(
            wizard.step(),
            &WizardStep::Submitted {
                score: 5,
                recommendation: "Excellent".to_string()
            }
        );
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_failed_submit_can_be_retried() {
        let mut wizard = at_review(&[1, 1, 0, 2, 3]);
        wizard.begin_submit().unwrap();
        wizard
            .complete_submit(Err("Database error: down".to_string()))
            .unwrap();

        assert_eq!(wizard.step(), &WizardStep::Review);
        assert_eq!(wizard.last_error(), Some("Database error: down"));

        wizard.begin_submit().unwrap();
        assert!(wizard.last_error().is_none());
    }

    #[test]
    fn test_complete_without_submit_is_refused() {
        let mut wizard = at_review(&[1, 1, 0, 2, 3]);
        assert!(wizard
            .complete_submit(Ok(SubmitResponse::new(5, "Excellent")))
            .is_err());
        assert_eq!(wizard.step(), &WizardStep::Review);
    }

    #[test]
    fn test_contact_is_locked_after_start() {
        let mut wizard = started();
        assert!(wizard.set_name("Grace").is_err());
        assert_eq!(wizard.name(), "Ada");
    }
}
