use actix_web::web;

pub mod health_handler;
pub mod question_handler;
pub mod submit_handler;

pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use question_handler::list_questions;
pub use submit_handler::{json_config, submit};

/// Registers every route together with the JSON extractor config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(submit)
        .service(list_questions)
        .service(health_check)
        .service(health_check_live)
        .service(health_check_ready);
}
