#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::models::dto::SubmitRequest;

    /// Answers matching the key at every position.
    pub fn perfect_answers() -> Vec<Value> {
        vec![json!(1), json!(1), json!(0), json!(2), json!(3)]
    }

    pub fn perfect_request() -> SubmitRequest {
        request_with_answers(perfect_answers())
    }

    pub fn request_with_answers(answers: Vec<Value>) -> SubmitRequest {
        SubmitRequest::new("Ada", "ada@example.com", answers)
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_perfect_request() {
        let request = perfect_request();
        assert_eq!(request.name.as_deref(), Some("Ada"));
        assert_eq!(request.answers.map(|a| a.len()), Some(5));
    }
}
