use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::leave::{HalfDayType, LeaveNature, LeaveSplit, SplitStatus};
use crate::models::od::GeoPoint;
use crate::utils::dates::to_iso_date;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

/// Pagination envelope shared by the list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub items: Vec<T>,
}

/// Wire form of one draft row. `number_of_days` is a client-side display
/// field and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveSplitPayload {
    pub date: String,
    pub leave_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_nature: Option<LeaveNature>,
    pub is_half_day: bool,
    pub half_day_type: Option<HalfDayType>,
    pub status: SplitStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&LeaveSplit> for LeaveSplitPayload {
    fn from(split: &LeaveSplit) -> Self {
        Self {
            date: to_iso_date(split.date),
            leave_type: split.leave_type.clone(),
            leave_nature: split.leave_nature,
            is_half_day: split.is_half_day,
            half_day_type: split.half_day_type,
            status: split.status,
            notes: split.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitValidationResponse {
    pub is_valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSplitsResponse {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveApplication {
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(default)]
    pub is_half_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_day_type: Option<HalfDayType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOdApplication {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub purpose: String,
    #[serde(default)]
    pub is_half_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_day_type: Option<HalfDayType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
