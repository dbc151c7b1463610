use serde::{Deserialize, Serialize};

/// One ordered item.
///
/// `quantity` and `special_request` are omitted from serialized output when
/// absent; they are never written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_request: Option<String>,
}

impl OrderEntry {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            quantity: None,
            special_request: None,
        }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Attach a special request; an empty string leaves it absent.
    #[must_use]
    pub fn with_special_request(mut self, request: impl Into<String>) -> Self {
        let request = request.into();
        self.special_request = (!request.is_empty()).then_some(request);
        self
    }
}

/// Extraction output for one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptResult {
    pub transcript: String,
    pub order: Vec<OrderEntry>,
}

impl TranscriptResult {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            order: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_absent_fields_are_omitted() {
        let entry = OrderEntry::new("Coke");
        let json = serde_json::to_value(&entry).expect("serialize");

        assert_eq!(json, serde_json::json!({ "item": "Coke" }));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_present_fields_are_written() {
        let entry = OrderEntry::new("fries")
            .with_quantity("one")
            .with_special_request("large");
        let json = serde_json::to_value(&entry).expect("serialize");

        assert_eq!(
            json,
            serde_json::json!({ "item": "fries", "quantity": "one", "special_request": "large" })
        );
    }

    #[test]
    fn test_empty_special_request_stays_absent() {
        let entry = OrderEntry::new("fries").with_special_request("");
        assert_eq!(entry.special_request, None);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_reads_back_sparse_entries() {
        let result: TranscriptResult = serde_json::from_str(
            r#"{"transcript": "Can you add a Coke?", "order": [{"item": "Coke"}]}"#,
        )
        .expect("deserialize");

        assert_eq!(result.order, vec![OrderEntry::new("Coke")]);
    }
}
