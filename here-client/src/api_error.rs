//! Error payloads returned by the HERE services.

use std::fmt;

use serde::Deserialize;

/// Structured error body returned by a HERE endpoint.
///
/// Two shapes are in circulation. The routing 7.x services answer with
/// `type`/`subtype`/`details`:
///
/// ```json
/// {"_type": "ns2:RoutingServiceErrorType", "type": "ApplicationError",
///  "subtype": "InvalidInputData", "details": "Invalid Input Data"}
/// ```
///
/// while the platform gateway (authentication, quota) answers with
/// `error`/`error_description`. Both are decoded into this one type; fields
/// missing from the body are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiError {
    /// Namespaced schema type, e.g. `ns2:RoutingServiceErrorType`.
    #[serde(rename = "_type")]
    pub type_name: String,
    /// Error category, e.g. `ApplicationError`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Error subcategory, e.g. `InvalidInputData`.
    pub subtype: String,
    /// Human-readable description.
    pub details: String,
    /// Extra key/value context supplied by the service.
    #[serde(rename = "additionalData")]
    pub additional_data: Vec<AdditionalData>,
    /// Gateway error name, e.g. `Unauthorized`.
    pub error: String,
    /// Gateway error description.
    pub error_description: String,
    /// Problem title.
    pub title: String,
    /// HTTP status echoed in the body.
    pub status: Option<u16>,
    /// Service error code, e.g. `E605001`.
    pub code: String,
    /// Problem cause.
    pub cause: String,
    /// Suggested remedy.
    pub action: String,
    /// Request correlation identifier.
    #[serde(rename = "correlationId")]
    pub correlation_id: String,
}

/// A single `additionalData` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdditionalData {
    /// Context key.
    pub key: String,
    /// Context value.
    pub value: String,
}

impl ApiError {
    /// Whether the body carried any identifying error field.
    ///
    /// A JSON object that merely decodes (for example `{}`) is not treated as
    /// an error payload.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        [
            &self.kind,
            &self.subtype,
            &self.details,
            &self.error,
            &self.error_description,
            &self.title,
            &self.code,
        ]
        .iter()
        .any(|field| !field.is_empty())
    }

    /// Short category for the error, preferring the most specific field.
    #[must_use]
    pub fn category(&self) -> &str {
        [&self.subtype, &self.kind, &self.error, &self.code, &self.title]
            .into_iter()
            .find(|field| !field.is_empty())
            .map_or("unknown", String::as_str)
    }

    /// Longest available description of the error.
    #[must_use]
    pub fn description(&self) -> &str {
        [&self.details, &self.error_description, &self.cause]
            .into_iter()
            .find(|field| !field.is_empty())
            .map_or("", String::as_str)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = self.description();
        if description.is_empty() {
            f.write_str(self.category())
        } else {
            write!(f, "{}: {description}", self.category())
        }
    }
}
