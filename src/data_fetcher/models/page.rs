use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

/// One element of a page's `results` list.
pub type Record = Map<String, Value>;

/// A single page of a paginated API resource.
///
/// Both keys are required: a body without `results` or without `next` is not a
/// page. `next` may be `null`, which terminates the page chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub results: Vec<Record>,
    // `deserialize_with` makes serde report a missing key instead of defaulting to None
    #[serde(deserialize_with = "Option::deserialize")]
    pub next: Option<String>,
}

impl PageDocument {
    /// Decodes a response body into a page, classifying failures for `url`.
    pub fn decode(body: &str, url: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| AppError::api_malformed_json(e.to_string(), url))?;

        serde_json::from_value(value)
            .map_err(|e| AppError::api_unexpected_structure(e.to_string(), url))
    }

    /// Returns true when this page ends the chain.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
