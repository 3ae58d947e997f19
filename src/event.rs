use serde::Deserialize;
use serde_json::Value;

use crate::error::RelayError;

/// Key in the trigger event that carries the inference input.
pub const DATA_FIELD: &str = "data";

/// Inference input as delivered by the trigger: one text or an ordered batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextPayload {
    Single(String),
    Batch(Vec<String>),
}

impl TextPayload {
    /// Extract the payload from a raw event document.
    ///
    /// Fails with [`RelayError::MalformedEvent`] when the `data` field is
    /// absent or holds an unsupported type.
    pub fn from_event(event: &Value) -> Result<Self, RelayError> {
        let data = event.get(DATA_FIELD).ok_or_else(|| {
            RelayError::MalformedEvent(format!("event has no \"{}\" field", DATA_FIELD))
        })?;

        serde_json::from_value(data.clone()).map_err(|_| {
            RelayError::MalformedEvent(format!(
                "\"{}\" must be a string or an array of strings",
                DATA_FIELD
            ))
        })
    }

    /// Flatten to the uniform batch representation sent to the endpoint.
    pub fn into_instances(self) -> Vec<String> {
        match self {
            TextPayload::Single(text) => vec![text],
            TextPayload::Batch(texts) => texts,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TextPayload::Single(_) => 1,
            TextPayload::Batch(texts) => texts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_string() {
        let event = json!({ "data": "a fine film" });
        let payload = TextPayload::from_event(&event).unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.into_instances(), vec!["a fine film"]);
    }

    #[test]
    fn test_batch_preserves_order() {
        let event = json!({ "data": ["first", "second", "third"] });
        let payload = TextPayload::from_event(&event).unwrap();
        assert_eq!(payload.into_instances(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_missing_field() {
        let event = json!({ "other": "value" });
        let err = TextPayload::from_event(&event).unwrap_err();
        assert!(matches!(err, RelayError::MalformedEvent(_)));
    }

    #[test]
    fn test_unsupported_type() {
        for data in [json!(42), json!({ "text": "nested" }), json!([1, 2])] {
            let event = json!({ "data": data });
            let err = TextPayload::from_event(&event).unwrap_err();
            assert!(matches!(err, RelayError::MalformedEvent(_)));
        }
    }

    #[test]
    fn test_empty_batch() {
        let event = json!({ "data": [] });
        let payload = TextPayload::from_event(&event).unwrap();
        assert!(payload.is_empty());
    }
}
