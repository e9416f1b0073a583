//! Filter and pagination state for the leave application list view.

use crate::api::ApiClient;
use crate::models::leave::LeaveApplication;
use crate::workflow::ApplicationStatus;

#[derive(Debug, Clone)]
pub struct LeaveListFilters {
    pub status: Option<ApplicationStatus>,
    pub employee_id: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for LeaveListFilters {
    fn default() -> Self {
        Self {
            status: None,
            employee_id: None,
            page: 1,
            per_page: 20,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LeaveListState {
    pub filters: LeaveListFilters,
    pub items: Vec<LeaveApplication>,
    pub total: i64,
    pub loading: bool,
}

pub async fn load_leave_applications(
    state: &mut LeaveListState,
    api: &ApiClient,
) -> Result<(), String> {
    state.loading = true;
    match api
        .list_leave_applications(
            state.filters.status,
            state.filters.employee_id.as_deref(),
            Some(state.filters.page),
            Some(state.filters.per_page),
        )
        .await
    {
        Ok(page) => {
            state.items = page.items;
            state.total = page.total;
            state.loading = false;
            Ok(())
        }
        Err(error) => {
            state.loading = false;
            Err(error.to_string())
        }
    }
}
