#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quiz_submit_server::{
    app_state::AppState,
    config::Config,
    db::Database,
    errors::{AppError, AppResult},
    mailer::{EmailMessage, Mailer},
    models::domain::ResultRecord,
    repositories::ResultRepository,
};

#[derive(Clone, Default)]
pub struct InMemoryResultRepository {
    records: Arc<RwLock<Vec<ResultRecord>>>,
}

impl InMemoryResultRepository {
    pub async fn records(&self) -> Vec<ResultRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl ResultRepository for InMemoryResultRepository {
    async fn insert(&self, record: ResultRecord) -> AppResult<ResultRecord> {
        self.records.write().await.push(record.clone());
        Ok(record)
    }
}

#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<RwLock<Vec<EmailMessage>>>,
    failure: Option<String>,
}

impl RecordingMailer {
    pub fn failing(message: &str) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(message.to_string()),
        }
    }

    pub async fn sent(&self) -> Vec<EmailMessage> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: EmailMessage) -> AppResult<()> {
        if let Some(failure) = &self.failure {
            return Err(AppError::EmailError(failure.clone()));
        }
        self.sent.write().await.push(message);
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "MONGODB_URI" => Some("mongodb://localhost:27017".to_string()),
        "MONGODB_DB" => Some("quizdb-test".to_string()),
        _ => None,
    })
    .expect("test config should build")
}

pub fn test_state(repository: &InMemoryResultRepository, mailer: &RecordingMailer) -> AppState {
    let config = test_config();
    let db = Database::new(&config);
    AppState::with_gateways(
        config,
        db,
        Arc::new(repository.clone()),
        Arc::new(mailer.clone()),
    )
}
