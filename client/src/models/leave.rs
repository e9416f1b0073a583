//! Leave applications and their per-day split outcomes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::employee::Employee;
use crate::models::refs::EntityRef;
use crate::workflow::{ApplicationStatus, ApprovalWorkflow};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HalfDayType {
    FirstHalf,
    SecondHalf,
}

impl HalfDayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HalfDayType::FirstHalf => "first_half",
            HalfDayType::SecondHalf => "second_half",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeaveNature {
    Paid,
    Lop,
    WithoutPay,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SplitStatus {
    Approved,
    Rejected,
}

impl Default for SplitStatus {
    fn default() -> Self {
        SplitStatus::Approved
    }
}

/// A persisted per-day outcome exactly as the server returns it. Dates arrive
/// in mixed formats and records may be stale or out of range; reconciliation
/// happens in [`crate::splits::clamp_splits_to_range`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveSplitRecord {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub date: String,
    #[serde(default)]
    pub leave_type: Option<String>,
    #[serde(default)]
    pub leave_nature: Option<LeaveNature>,
    #[serde(default)]
    pub is_half_day: bool,
    #[serde(default)]
    pub half_day_type: Option<HalfDayType>,
    #[serde(default)]
    pub status: SplitStatus,
    /// Display value only; the draft recomputes it from the half-day flag.
    #[serde(default)]
    pub number_of_days: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A canonical draft row: normalized date, derived day value, half-day type
/// cleared unless the half-day flag is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveSplit {
    #[serde(default)]
    pub id: Option<String>,
    pub date: NaiveDate,
    pub leave_type: String,
    #[serde(default)]
    pub leave_nature: Option<LeaveNature>,
    pub is_half_day: bool,
    #[serde(default)]
    pub half_day_type: Option<HalfDayType>,
    pub status: SplitStatus,
    pub number_of_days: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl LeaveSplit {
    /// Day value derived from the half-day flag; never trusted from the wire.
    pub fn day_value(is_half_day: bool) -> f64 {
        if is_half_day {
            0.5
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveApplication {
    #[serde(alias = "_id")]
    pub id: String,
    pub employee: EntityRef<Employee>,
    pub leave_type: String,
    #[serde(deserialize_with = "crate::utils::dates::lenient_date")]
    pub from_date: NaiveDate,
    #[serde(deserialize_with = "crate::utils::dates::lenient_date")]
    pub to_date: NaiveDate,
    /// Only meaningful when the range collapses to a single day.
    #[serde(default)]
    pub is_half_day: bool,
    #[serde(default)]
    pub half_day_type: Option<HalfDayType>,
    #[serde(default)]
    pub number_of_days: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub workflow: Option<ApprovalWorkflow>,
    /// Present only once a human has split the outcome by day.
    #[serde(default)]
    pub splits: Option<Vec<LeaveSplitRecord>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
