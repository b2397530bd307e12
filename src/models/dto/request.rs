use serde::{
    de::{DeserializeOwned, Error as _},
    Deserialize, Deserializer, Serialize,
};
use serde_json::Value;

use crate::errors::{AppError, AppResult};

pub const MISSING_FIELDS: &str = "Missing fields";

/// Body of `POST /api/submit`. Every field is optional on the wire so a
/// missing or falsy field reaches validation instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SubmitRequest {
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub answers: Option<Vec<Value>>,
}

/// `null`, `false`, `0` and `""` count as absent. Arrays and objects never do,
/// so an empty answer list is still present.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Falsy values read as `None`. Any other value must have the field's type.
fn falsy_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if is_falsy(&value) {
        return Ok(None);
    }
    T::deserialize(value).map(Some).map_err(D::Error::custom)
}

/// A request that passed the presence checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSubmission {
    pub name: String,
    pub email: String,
    pub answers: Vec<Value>,
}

impl SubmitRequest {
    pub fn new(name: &str, email: &str, answers: Vec<Value>) -> Self {
        SubmitRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            answers: Some(answers),
        }
    }

    /// Name and email must be non-empty and answers must be present. An empty
    /// answer list is present and simply scores zero.
    pub fn validate(self) -> AppResult<ValidatedSubmission> {
        let missing = || AppError::ValidationError(MISSING_FIELDS.to_string());

        let name = self.name.filter(|n| !n.is_empty()).ok_or_else(missing)?;
        let email = self.email.filter(|e| !e.is_empty()).ok_or_else(missing)?;
        let answers = self.answers.ok_or_else(missing)?;

        Ok(ValidatedSubmission {
            name,
            email,
            answers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_accepts_complete_request() {
        let request = SubmitRequest::new("Ada", "ada@example.com", vec![json!(1)]);
        let validated = request.validate().unwrap();
        assert_eq!(validated.name, "Ada");
        assert_eq!(validated.answers, vec![json!(1)]);
    }

    #[test]
    fn test_validate_rejects_each_missing_field() {
        let base = SubmitRequest::new("Ada", "ada@example.com", vec![json!(1)]);

        let cases = [
            SubmitRequest {
                name: None,
                ..base.clone()
            },
            SubmitRequest {
                email: Some(String::new()),
                ..base.clone()
            },
            SubmitRequest {
                answers: None,
                ..base.clone()
            },
        ];

        for request in cases {
            match request.validate() {
                Err(AppError::ValidationError(message)) => assert_eq!(message, MISSING_FIELDS),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_answers_are_present() {
        let request = SubmitRequest::new("Ada", "ada@example.com", vec![]);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_null_fields_deserialize_as_missing() {
        let request: SubmitRequest =
            serde_json::from_str(r#"{"name": null, "email": "a@b.c"}"#).unwrap();
        assert!(request.name.is_none());
        assert!(request.answers.is_none());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_falsy_values_of_any_type_deserialize_as_missing() {
        let bodies = [
            r#"{"name": "Ada", "email": "a@b.c", "answers": 0}"#,
            r#"{"name": "Ada", "email": "a@b.c", "answers": false}"#,
            r#"{"name": "Ada", "email": "a@b.c", "answers": ""}"#,
            r#"{"name": 0, "email": "a@b.c", "answers": [1]}"#,
            r#"{"name": "Ada", "email": false, "answers": [1]}"#,
            r#"{"name": "Ada", "email": 0.0, "answers": [1]}"#,
        ];

        for body in bodies {
            let request: SubmitRequest = serde_json::from_str(body).unwrap();
            match request.validate() {
                Err(AppError::ValidationError(message)) => assert_eq!(message, MISSING_FIELDS),
                other => panic!("expected validation error for {}, got {:?}", body, other),
            }
        }
    }

    #[test]
    fn test_truthy_values_of_the_wrong_type_fail_to_deserialize() {
        let bodies = [
            r#"{"name": true, "email": "a@b.c", "answers": [1]}"#,
            r#"{"name": "Ada", "email": 7, "answers": [1]}"#,
            r#"{"name": "Ada", "email": "a@b.c", "answers": 1}"#,
            r#"{"name": "Ada", "email": "a@b.c", "answers": {"0": 1}}"#,
        ];

        for body in bodies {
            assert!(serde_json::from_str::<SubmitRequest>(body).is_err(), "{}", body);
        }
    }

    #[test]
    fn test_mixed_answer_values_deserialize() {
        let request: SubmitRequest = serde_json::from_str(
            r#"{"name": "Ada", "email": "a@b.c", "answers": [1, null, "2", 3.0, true]}"#,
        )
        .unwrap();
        assert_eq!(request.answers.unwrap().len(), 5);
    }
}
