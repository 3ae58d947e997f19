use thiserror::Error;

/// Failures of a single adapter invocation.
///
/// Every variant is terminal for the invocation and carries no partial
/// output; the process remains able to serve the next event.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The trigger event lacks the input field, or the field holds something
    /// other than a string or an array of strings.
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    /// The endpoint call itself failed: transport error, timeout, or a
    /// non-success status.
    #[error("endpoint invocation failed")]
    EndpointInvocation(#[source] reqwest::Error),

    /// The endpoint answered, but not with the expected prediction list.
    #[error("could not parse endpoint response: {0}")]
    ResponseParse(String),
}
