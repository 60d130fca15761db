use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use fluvio_future::timer::sleep;
use fluvio_types::event::StickyEvent;
use tokio::select;
use tracing::{debug, info};

use crate::config::CatFactsConfig;
use crate::sink::FactSink;
use crate::source::CatFactSource;

/// The poll loop: fetch one fact, publish it, echo it to the console,
/// then wait out the interval.
///
/// Runs until the shutdown event is set. Any failing step ends the loop
/// with an error; there is no retry.
pub(crate) struct CatFactsConnector<S, W> {
    config: CatFactsConfig,
    source: CatFactSource,
    sink: S,
    out: W,
    shutdown: Arc<StickyEvent>,
}

impl<S, W> CatFactsConnector<S, W>
where
    S: FactSink,
    W: Write,
{
    pub(crate) fn new(
        config: CatFactsConfig,
        source: CatFactSource,
        sink: S,
        out: W,
        shutdown: Arc<StickyEvent>,
    ) -> Self {
        Self {
            config,
            source,
            sink,
            out,
            shutdown,
        }
    }

    pub(crate) async fn run(mut self) -> Result<()> {
        info!(interval = ?self.config.interval, "entering poll loop");

        while !self.shutdown.is_set() {
            let fact = self.source.fetch().await?;
            self.sink.publish(&fact).await?;
            writeln!(self.out, "{fact}")?;

            select! {
                _ = sleep(self.config.interval) => {},
                _ = self.shutdown.listen() => {},
            }
        }

        debug!("poll loop stopped");
        Ok(())
    }
}
