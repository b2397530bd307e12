use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc, Document};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppResult;

/// One completed submission and its computed outcome. Inserted once, never updated.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub name: String,
    pub email: String,
    pub answers: Vec<Value>,
    pub score: u32,
    pub recommendation: String,
    pub created_at: DateTime<Utc>,
}

impl ResultRecord {
    pub fn new(
        name: String,
        email: String,
        answers: Vec<Value>,
        score: u32,
        recommendation: String,
    ) -> Self {
        ResultRecord {
            name,
            email,
            answers,
            score,
            recommendation,
            created_at: Utc::now(),
        }
    }

    /// Stored shape, with `createdAt` as a native BSON date.
    pub fn to_document(&self) -> AppResult<Document> {
        Ok(doc! {
            "name": self.name.as_str(),
            "email": self.email.as_str(),
            "answers": bson::to_bson(&self.answers.iter().map(storable).collect::<Vec<_>>())?,
            "score": self.score as i32,
            "recommendation": self.recommendation.as_str(),
            "createdAt": bson::DateTime::from_millis(self.created_at.timestamp_millis()),
        })
    }
}

/// BSON has no unsigned 64-bit integer, so integers above `i64::MAX` are
/// stored as doubles.
fn storable(value: &Value) -> Value {
    match value {
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (None, Some(unsigned)) => Value::from(unsigned as f64),
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(storable).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, item)| (key.clone(), storable(item)))
                .collect(),
        ),
        _ => value.clone(),
    }
}
