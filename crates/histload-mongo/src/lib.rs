//! histload-mongo — MongoDB event sink for histload.
//!
//! [`MongoSink`] implements [`histload_core::EventSink`] over a single
//! collection. Records are written as BSON documents; samples are read back
//! through `$sample` and rendered as relaxed extended JSON, with the
//! generated `_id` flattened to its hex string.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection};
use serde_json::Value;
use tracing::debug;

use histload_core::config::MongoConfig;
use histload_core::{EventRecord, EventSink, SinkError};

/// A connected MongoDB collection.
pub struct MongoSink {
    client: Client,
    collection: Collection<EventRecord>,
}

impl MongoSink {
    /// Connect to `config.uri` and verify the server answers before returning.
    pub async fn connect(config: &MongoConfig) -> Result<Self, SinkError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| SinkError::Connect(e.into()))?;
        let database = client.database(&config.database);
        // The driver connects lazily; ping so a bad URI fails here.
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| SinkError::Connect(e.into()))?;
        debug!(database = %config.database, collection = %config.collection, "mongo sink ready");

        Ok(Self {
            collection: database.collection(&config.collection),
            client,
        })
    }
}

/// Render a stored document as JSON, with an `ObjectId` `_id` as plain hex.
fn sample_to_json(mut document: Document) -> Value {
    if let Some(Bson::ObjectId(id)) = document.get("_id") {
        let hex = id.to_hex();
        document.insert("_id", hex);
    }
    Bson::Document(document).into_relaxed_extjson()
}

#[async_trait]
impl EventSink for MongoSink {
    async fn clear(&mut self) -> Result<u64, SinkError> {
        let result = self
            .collection
            .delete_many(doc! {})
            .await
            .map_err(|e| SinkError::operation("delete_many", e))?;
        Ok(result.deleted_count)
    }

    async fn insert_batch(&mut self, records: &[EventRecord]) -> Result<u64, SinkError> {
        let result = self
            .collection
            .insert_many(records)
            .await
            .map_err(|e| SinkError::operation("insert_many", e))?;
        Ok(result.inserted_ids.len() as u64)
    }

    async fn sample_random(&mut self, n: usize) -> Result<Vec<Value>, SinkError> {
        let size = i64::try_from(n).unwrap_or(i64::MAX);
        let cursor = self
            .collection
            .aggregate([doc! { "$sample": { "size": size } }])
            .await
            .map_err(|e| SinkError::operation("aggregate", e))?;
        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| SinkError::operation("aggregate", e))?;

        Ok(documents.into_iter().map(sample_to_json).collect())
    }

    async fn close(&mut self) -> Result<(), SinkError> {
        self.client.clone().shutdown().await;
        Ok(())
    }
}
