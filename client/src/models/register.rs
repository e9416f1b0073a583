//! The leave-balance register: per employee, leave type, and year.

use serde::{Deserialize, Serialize};

use crate::models::employee::Employee;
use crate::models::refs::EntityRef;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRegisterEntry {
    pub employee: EntityRef<Employee>,
    pub leave_type: String,
    pub year: i32,
    pub opening_balance: f64,
    pub accrued: f64,
    pub availed: f64,
    pub closing_balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRegister {
    pub year: i32,
    pub entries: Vec<LeaveRegisterEntry>,
}
