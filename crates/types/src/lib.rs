//! Shared wire types for the pvn narrative service.
//!
//! These types define the JSON surface exchanged with callers: the raw case
//! record, the request/response payloads of the REST API, and the health
//! response. They carry no behaviour beyond (de)serialization; all narrative
//! logic lives in `pvn-core`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// One row of adverse-event case data as received from a caller.
///
/// Every field is optional and kept as raw JSON so that absent keys, nulls,
/// text, and numbers all survive deserialization unchanged; `pvn-core`
/// normalizes them before use. Keys outside this vocabulary are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CaseRecord {
    /// Case identifier; rows sharing it belong to one case.
    #[serde(rename = "regulatory_ID", default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub regulatory_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub case_justification: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub case_type: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub reporter_type: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub publication_title: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub country: Option<Value>,

    /// Initial receipt date of the case.
    #[serde(rename = "IRD", default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub initial_receipt_date: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub age: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub gender: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub suspect_drug: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub co_suspect_drug: Option<Value>,

    /// Adverse event description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub event: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub medical_history: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub past_drug_therapy: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub concurrent_condition: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub concomitant_medication: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub dose: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub frequency: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub route: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub indication: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub suspect_drug_start_date: Option<Value>,
}

/// Request body for `/generate` and `/validate`: a flat batch of case rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    #[serde(default)]
    pub data: Vec<CaseRecord>,
}

/// One generated narrative, keyed by the case it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CaseNarrative {
    #[serde(rename = "regulatory_ID")]
    pub regulatory_id: String,
    pub narrative: String,
}

/// Response body for `/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub results: Vec<CaseNarrative>,
}

/// Response body for `/validate`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
    pub message: String,
}
