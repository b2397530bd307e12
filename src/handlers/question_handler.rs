use actix_web::{get, HttpResponse};

use crate::models::{domain::quiz_questions, dto::QuestionsResponse};

/// Display catalog for quiz clients. Correct answers stay on the server.
#[get("/api/questions")]
pub async fn list_questions() -> HttpResponse {
    HttpResponse::Ok().json(QuestionsResponse {
        questions: quiz_questions(),
    })
}
