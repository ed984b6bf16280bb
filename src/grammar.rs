use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::types::grammar::GrammarReport;

#[async_trait]
pub trait GrammarChecker: Send + Sync {
    async fn check(&self, text: &str) -> Result<GrammarReport, handle_errors::Error>;
}

/// LanguageTool client. Calls are bounded by the client timeout and never retried.
#[derive(Clone, Debug)]
pub struct LanguageTool {
    client: reqwest::Client,
    endpoint: String,
    language: String,
}

impl LanguageTool {
    pub fn new(
        endpoint: &str,
        language: &str,
        timeout: Duration,
    ) -> Result<Self, handle_errors::Error> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(handle_errors::Error::ExternalAPIError)?;
        Ok(LanguageTool {
            client,
            endpoint: endpoint.to_string(),
            language: language.to_string(),
        })
    }
}

#[async_trait]
impl GrammarChecker for LanguageTool {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn check(&self, text: &str) -> Result<GrammarReport, handle_errors::Error> {
        let report = self
            .client
            .post(&self.endpoint)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(handle_errors::Error::ExternalAPIError)?
            .json::<GrammarReport>()
            .await
            .map_err(handle_errors::Error::ExternalAPIError)?;
        debug!("{} grammar issue(s)", report.matches.len());
        Ok(report)
    }
}
