//! Async HTTP client for the hosted classification endpoint.
//!
//! The wire contract is fixed: request `{"instances": [<string>, ...]}` as
//! `application/json`, response a JSON array of objects each carrying at
//! least a `label` field.

use reqwest::Client;
use serde::Serialize;

use crate::error::RelayError;
use crate::models::RawPrediction;

/// Request body for the endpoint: always a sequence, even for one instance.
#[derive(Debug, Serialize)]
struct EndpointPayload<'a> {
    instances: &'a [String],
}

/// POST the normalized instances and return the raw response body.
///
/// Transport failures and non-success statuses surface as
/// [`RelayError::EndpointInvocation`]. No retry is performed here; parsing
/// is left to [`parse_predictions`] so callers can log the body first.
pub async fn invoke(
    client: &Client,
    url: &str,
    instances: &[String],
) -> Result<String, RelayError> {
    let response = client
        .post(url)
        .header(
            "User-Agent",
            concat!("sentiment-relay/", env!("CARGO_PKG_VERSION")),
        )
        .json(&EndpointPayload { instances })
        .send()
        .await
        .map_err(RelayError::EndpointInvocation)?
        .error_for_status()
        .map_err(RelayError::EndpointInvocation)?;

    response.text().await.map_err(RelayError::EndpointInvocation)
}

/// Parse a response body into the ordered prediction list.
pub fn parse_predictions(body: &str) -> Result<Vec<RawPrediction>, RelayError> {
    serde_json::from_str(body).map_err(|e| RelayError::ResponseParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instances(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_invoke_posts_instances_and_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/invocations")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "instances": ["great movie"]
            })))
            .with_status(200)
            .with_body(r#"[{"label": "__label__2"}]"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/invocations", server.url());
        let body = invoke(&client, &url, &instances(&["great movie"]))
            .await
            .unwrap();

        assert_eq!(body, r#"[{"label": "__label__2"}]"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invoke_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/invocations")
            .with_status(500)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/invocations", server.url());
        let err = invoke(&client, &url, &instances(&["text"])).await.unwrap_err();

        assert!(matches!(err, RelayError::EndpointInvocation(_)));
    }

    #[tokio::test]
    async fn test_invoke_unreachable_endpoint() {
        let client = reqwest::Client::new();
        // Nothing listens on port 1.
        let err = invoke(&client, "http://127.0.0.1:1/invocations", &instances(&["text"]))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::EndpointInvocation(_)));
    }

    #[test]
    fn test_parse_predictions() {
        let predictions =
            parse_predictions(r#"[{"label": "__label__2", "prob": 0.93}, {"label": "__label__1"}]"#)
                .unwrap();
        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions[0].label, "__label__2");
        assert_eq!(predictions[1].label, "__label__1");
    }

    #[test]
    fn test_parse_rejects_non_array_body() {
        for body in ["not json", r#"{"label": "__label__2"}"#, r#"[{"score": 1}]"#] {
            let err = parse_predictions(body).unwrap_err();
            assert!(matches!(err, RelayError::ResponseParse(_)));
        }
    }
}
