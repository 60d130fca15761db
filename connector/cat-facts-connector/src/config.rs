use std::time::Duration;

const CAT_FACTS_ENDPOINT: &str = "https://catfact.ninja/fact";
const CAT_FACTS_TOPIC: &str = "cat-facts-random";
const WAIT_INTERVAL: Duration = Duration::from_secs(10);

/// Fixed parameters of the connector.
///
/// Nothing is read from the environment, CLI, or a config file;
/// `Default` supplies the values the connector ships with. The struct
/// exists so the poll loop can be driven against other endpoints and
/// intervals in tests.
#[derive(Debug, Clone)]
pub(crate) struct CatFactsConfig {
    /// endpoint that returns one random fact per GET
    pub endpoint: String,
    /// topic that receives one record per fact
    pub topic: String,
    /// delay after each iteration
    pub interval: Duration,
}

impl Default for CatFactsConfig {
    fn default() -> Self {
        Self {
            endpoint: CAT_FACTS_ENDPOINT.to_owned(),
            topic: CAT_FACTS_TOPIC.to_owned(),
            interval: WAIT_INTERVAL,
        }
    }
}
