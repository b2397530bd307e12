pub mod scoring;
pub mod submission_service;

pub use submission_service::SubmissionService;
