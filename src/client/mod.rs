pub mod api_client;
pub mod wizard;

pub use api_client::{ClientError, QuizApiClient};
pub use wizard::{QuizWizard, WizardError, WizardStep};
