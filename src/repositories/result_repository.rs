use async_trait::async_trait;
use mongodb::bson::Document;

use crate::{db::Database, errors::AppResult, models::domain::ResultRecord};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn insert(&self, record: ResultRecord) -> AppResult<ResultRecord>;
}

pub struct MongoResultRepository {
    db: Database,
    collection_name: String,
}

impl MongoResultRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            db: db.clone(),
            collection_name: collection_name.to_string(),
        }
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }
}

#[async_trait]
impl ResultRepository for MongoResultRepository {
    async fn insert(&self, record: ResultRecord) -> AppResult<ResultRecord> {
        let collection = self
            .db
            .get_collection::<Document>(&self.collection_name)
            .await?;

        let result = collection.insert_one(record.to_document()?).await?;
        log::info!(
            "Stored result {} in {}",
            result.inserted_id,
            self.collection_name
        );

        Ok(record)
    }
}
