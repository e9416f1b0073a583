use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::refs::{EntityRef, HasId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Division {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

impl HasId for Division {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(alias = "_id")]
    pub id: String,
    pub employee_code: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub division: Option<EntityRef<Division>>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::dates::lenient_date_opt")]
    pub date_of_joining: Option<NaiveDate>,
    /// Payroll state the salary-approval action advances; owned server-side.
    #[serde(default)]
    pub salary_approval_status: Option<String>,
}

impl HasId for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}
