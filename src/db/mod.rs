use std::{sync::Arc, time::Duration};

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use tokio::sync::OnceCell;

use crate::{config::Config, errors::AppResult};

/// Process-wide MongoDB handle. The client is created on first use and then
/// reused by every clone of this value.
#[derive(Clone)]
pub struct Database {
    conn_string: String,
    db_name: String,
    client: Arc<OnceCell<Client>>,
}

impl Database {
    pub fn new(config: &Config) -> Self {
        Self {
            conn_string: config.mongodb_uri.clone(),
            db_name: config.mongodb_db.clone(),
            client: Arc::new(OnceCell::new()),
        }
    }

    /// Returns the cached client, connecting first if no request has done so yet.
    /// A failed connection is not cached.
    pub async fn client(&self) -> AppResult<&Client> {
        self.client
            .get_or_try_init(|| Self::connect(&self.conn_string))
            .await
    }

    async fn connect(conn_string: &str) -> AppResult<Client> {
        let mut client_options = ClientOptions::parse(conn_string).await?;

        let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
        client_options.server_api = Some(server_api);
        client_options.app_name = Some("quiz-submit-server".to_string());
        client_options.max_pool_size = Some(10);
        client_options.min_pool_size = Some(2);
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        log::info!("Connected to MongoDB");

        Ok(client)
    }

    pub async fn get_collection<T>(&self, collection_name: &str) -> AppResult<Collection<T>>
    where
        T: Send + Sync,
    {
        let client = self.client().await?;
        Ok(client.database(&self.db_name).collection(collection_name))
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.client()
            .await?
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }
}
