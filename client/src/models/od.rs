//! On-duty applications: work-related absences distinct from leave,
//! optionally backed by photo or location evidence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::employee::Employee;
use crate::models::leave::HalfDayType;
use crate::models::refs::EntityRef;
use crate::workflow::{ApplicationStatus, ApprovalWorkflow};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OdApplication {
    #[serde(alias = "_id")]
    pub id: String,
    pub employee: EntityRef<Employee>,
    #[serde(deserialize_with = "crate::utils::dates::lenient_date")]
    pub from_date: NaiveDate,
    #[serde(deserialize_with = "crate::utils::dates::lenient_date")]
    pub to_date: NaiveDate,
    pub purpose: String,
    #[serde(default)]
    pub is_half_day: bool,
    #[serde(default)]
    pub half_day_type: Option<HalfDayType>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub workflow: Option<ApprovalWorkflow>,
}
