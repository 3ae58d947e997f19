use serde::{Deserialize, Serialize};

/// One prediction record returned by the endpoint, one per instance.
///
/// Only `label` is required; extra fields (probabilities, ids) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPrediction {
    pub label: String,
}

/// Simplified sentiment category derived from a raw classifier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Map a raw classifier label using the configured positive-class marker.
    ///
    /// Matching is by containment: the reference classifier emits compound
    /// label strings rather than a bare token.
    pub fn from_label(label: &str, positive_marker: &str) -> Self {
        if label.contains(positive_marker) {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "__label__2";

    #[test]
    fn test_marker_maps_to_positive() {
        assert_eq!(Sentiment::from_label("__label__2", MARKER), Sentiment::Positive);
    }

    #[test]
    fn test_marker_matched_by_containment() {
        assert_eq!(
            Sentiment::from_label("__label__2 0.93", MARKER),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_other_labels_map_to_negative() {
        assert_eq!(Sentiment::from_label("__label__1", MARKER), Sentiment::Negative);
        assert_eq!(Sentiment::from_label("", MARKER), Sentiment::Negative);
        assert_eq!(Sentiment::from_label("neutral", MARKER), Sentiment::Negative);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&[Sentiment::Positive, Sentiment::Negative]).unwrap(),
            r#"["positive","negative"]"#
        );
    }
}
