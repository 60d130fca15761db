use anyhow::Result;
use tracing::debug;

use crate::config::CatFactsConfig;

/// Fetches one random fact per call from the configured endpoint.
pub(crate) struct CatFactSource {
    client: reqwest::Client,
    endpoint: String,
}

impl CatFactSource {
    pub(crate) fn new(config: &CatFactsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }

    /// Issues a single GET against the endpoint.
    ///
    /// The body is returned as-is: no parsing and no status check, so
    /// whatever the endpoint answers is what gets published downstream.
    /// Only transport-level failures surface as errors.
    pub(crate) async fn fetch(&self) -> Result<String> {
        let response = self.client.get(&self.endpoint).send().await?;
        let body = response.text().await?;
        debug!(len = body.len(), "fetched fact");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::GET;
    use httpmock::MockServer;

    fn test_source(endpoint: String) -> CatFactSource {
        CatFactSource::new(&CatFactsConfig {
            endpoint,
            ..CatFactsConfig::default()
        })
    }

    #[async_std::test]
    async fn test_fetch_returns_raw_body() {
        //given
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/fact");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"fact":"Cats sleep 70% of their lives.","length":30}"#);
        });
        let source = test_source(server.url("/fact"));

        //when
        let body = source.fetch().await.expect("fetch");

        //then
        mock.assert();
        assert_eq!(
            body,
            r#"{"fact":"Cats sleep 70% of their lives.","length":30}"#
        );
    }

    #[async_std::test]
    async fn test_fetch_empty_body() {
        //given
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/fact");
            then.status(200);
        });
        let source = test_source(server.url("/fact"));

        //when
        let body = source.fetch().await.expect("fetch");

        //then
        mock.assert();
        assert_eq!(body, "");
    }

    #[async_std::test]
    async fn test_fetch_passes_error_status_body_through() {
        //given
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/fact");
            then.status(500).body("upstream exploded");
        });
        let source = test_source(server.url("/fact"));

        //when
        let body = source.fetch().await.expect("fetch");

        //then
        mock.assert();
        assert_eq!(body, "upstream exploded");
    }

    #[async_std::test]
    async fn test_fetch_connection_refused() {
        //given
        let source = test_source("http://127.0.0.1:1/fact".to_owned());

        //when
        let result = source.fetch().await;

        //then
        assert!(result.is_err());
    }
}
