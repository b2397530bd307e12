pub mod request;
pub mod response;

pub use request::{SubmitRequest, ValidatedSubmission};
pub use response::{QuestionsResponse, SubmitResponse};
