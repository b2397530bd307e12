use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    mailer::{Mailer, ZeptoMailClient},
    repositories::{MongoResultRepository, ResultRepository},
    services::SubmissionService,
};

#[derive(Clone)]
pub struct AppState {
    pub submission_service: Arc<SubmissionService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the MongoDB and ZeptoMail gateways. Nothing connects until the
    /// first request needs the database.
    pub fn new(config: Config) -> Self {
        let db = Database::new(&config);
        let result_repository = Arc::new(MongoResultRepository::new(&db, &config.results_collection));
        let mailer = Arc::new(ZeptoMailClient::new(&config));

        Self::with_gateways(config, db, result_repository, mailer)
    }

    pub fn with_gateways(
        config: Config,
        db: Database,
        result_repository: Arc<dyn ResultRepository>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        let submission_service = Arc::new(SubmissionService::new(result_repository, mailer));

        Self {
            submission_service,
            db,
            config: Arc::new(config),
        }
    }
}
