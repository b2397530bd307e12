pub mod question;
pub mod result_record;
pub use question::{quiz_questions, Question};
pub use result_record::ResultRecord;
