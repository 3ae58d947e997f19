//! Orchestrates one inference invocation end to end: extract the event
//! payload, normalize it, invoke the endpoint, and map the raw labels.

use colored::Colorize;
use reqwest::Client;
use serde_json::Value;

use crate::config::EndpointConfig;
use crate::endpoint;
use crate::error::RelayError;
use crate::event::TextPayload;
use crate::models::{RawPrediction, Sentiment};
use crate::normalize::clean_text;

/// Translates one trigger event into simplified sentiment labels.
///
/// Holds the process-wide read-only resources by reference; construct once
/// and reuse across invocations.
pub struct InferenceAdapter<'a> {
    config: &'a EndpointConfig,
    client: &'a Client,
    verbose: bool,
}

impl<'a> InferenceAdapter<'a> {
    pub fn new(config: &'a EndpointConfig, client: &'a Client, verbose: bool) -> Self {
        InferenceAdapter {
            config,
            client,
            verbose,
        }
    }

    /// Handle one event: one [`Sentiment`] per input instance, same order
    /// and count. Any failure aborts the invocation with no partial output.
    pub async fn handle(&self, event: &Value) -> Result<Vec<Sentiment>, RelayError> {
        self.diag("event", &event.to_string());

        // Extraction happens before any network traffic.
        let payload = TextPayload::from_event(event)?;
        let instances: Vec<String> = payload
            .into_instances()
            .into_iter()
            .map(|text| clean_text(&text))
            .collect();
        self.diag("instances", &format!("{:?}", instances));

        let body = endpoint::invoke(self.client, &self.config.url, &instances).await?;
        self.diag("response", &body);

        let predictions: Vec<RawPrediction> = endpoint::parse_predictions(&body)?;
        if predictions.len() != instances.len() {
            return Err(RelayError::ResponseParse(format!(
                "endpoint returned {} predictions for {} instances",
                predictions.len(),
                instances.len()
            )));
        }

        Ok(predictions
            .iter()
            .map(|p| Sentiment::from_label(&p.label, &self.config.positive_marker))
            .collect())
    }

    fn diag(&self, tag: &str, detail: &str) {
        if self.verbose {
            eprintln!("  {} {}: {}", "→".cyan(), tag.bold(), detail);
        }
    }
}
