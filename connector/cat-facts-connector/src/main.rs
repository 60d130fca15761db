//! A connector that polls a cat facts API and produces each fact
//! to a fluvio topic.
//!
//! Before running, make sure you have created the topic:
//!
//! ```text
//! $ fluvio topic create cat-facts-random
//! ```
//!
//! Then start the connector:
//!
//! ```text
//! $ cargo run --bin cat-facts-connector
//! ```
//!
//! You can watch the facts arrive with:
//!
//! ```text
//! $ fluvio consume cat-facts-random -B
//! ```

mod config;
mod connector;
mod sink;
mod source;

use std::io;

use anyhow::Result;
use fluvio::Fluvio;
use fluvio_future::subscriber::init_logger;
use fluvio_types::event::StickyEvent;
use tracing::info;

use crate::config::CatFactsConfig;
use crate::connector::CatFactsConnector;
use crate::source::CatFactSource;

#[async_std::main]
async fn main() -> Result<()> {
    init_logger();

    let config = CatFactsConfig::default();
    info!(
        endpoint = %config.endpoint,
        topic = %config.topic,
        "starting cat facts connector"
    );

    let fluvio = Fluvio::connect().await?;
    let producer = fluvio.topic_producer(&config.topic).await?;

    let source = CatFactSource::new(&config);
    let connector = CatFactsConnector::new(
        config,
        source,
        producer,
        io::stdout(),
        StickyEvent::shared(),
    );

    connector.run().await
}
