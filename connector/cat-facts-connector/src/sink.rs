use anyhow::Result;
use async_trait::async_trait;
use fluvio::{RecordKey, TopicProducerPool};

/// Destination for fetched facts.
///
/// The production implementation publishes to a fluvio topic; tests
/// substitute their own.
#[async_trait]
pub(crate) trait FactSink {
    async fn publish(&self, fact: &str) -> Result<()>;
}

#[async_trait]
impl FactSink for TopicProducerPool {
    async fn publish(&self, fact: &str) -> Result<()> {
        // fire and forget: no key, no flush, delivery stays on the
        // client's default batching
        self.send(RecordKey::NULL, fact).await?;
        Ok(())
    }
}
