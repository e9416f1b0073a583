use reqwest::Method;
use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::types::{
    ApiError, CreateLeaveApplication, LeaveSplitPayload, Paginated, SaveSplitsResponse,
    SplitValidationResponse,
};
use crate::models::leave::LeaveApplication;
use crate::workflow::ApplicationStatus;

fn leave_list_params(
    status: Option<ApplicationStatus>,
    employee_id: Option<&str>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(status) = status {
        params.push(("status", status.as_str().to_string()));
    }
    if let Some(employee_id) = employee_id {
        params.push(("employee_id", employee_id.to_string()));
    }
    if let Some(page) = page {
        params.push(("page", page.to_string()));
    }
    if let Some(per_page) = per_page {
        params.push(("per_page", per_page.to_string()));
    }
    params
}

impl ApiClient {
    pub async fn list_leave_applications(
        &self,
        status: Option<ApplicationStatus>,
        employee_id: Option<&str>,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Paginated<LeaveApplication>, ApiError> {
        let params = leave_list_params(status, employee_id, page, per_page);
        let mut request = self.request(Method::GET, "/leave-applications");
        if !params.is_empty() {
            request = request.query(&params);
        }
        self.send_json(request).await
    }

    pub async fn get_leave_application(&self, id: &str) -> Result<LeaveApplication, ApiError> {
        self.send_json(self.request(Method::GET, &format!("/leave-applications/{}", id)))
            .await
    }

    pub async fn create_leave_application(
        &self,
        payload: &CreateLeaveApplication,
    ) -> Result<LeaveApplication, ApiError> {
        self.send_json(self.request(Method::POST, "/leave-applications").json(payload))
            .await
    }

    pub async fn approve_leave_application(
        &self,
        id: &str,
        comment: &str,
    ) -> Result<LeaveApplication, ApiError> {
        self.decide_leave(id, "approve", comment).await
    }

    pub async fn reject_leave_application(
        &self,
        id: &str,
        comment: &str,
    ) -> Result<LeaveApplication, ApiError> {
        self.decide_leave(id, "reject", comment).await
    }

    async fn decide_leave(
        &self,
        id: &str,
        action: &str,
        comment: &str,
    ) -> Result<LeaveApplication, ApiError> {
        self.send_json(
            self.request(Method::PUT, &format!("/leave-applications/{}/{}", id, action))
                .json(&json!({ "comment": comment })),
        )
        .await
    }

    pub async fn cancel_leave_application(&self, id: &str) -> Result<LeaveApplication, ApiError> {
        self.send_json(self.request(Method::DELETE, &format!("/leave-applications/{}", id)))
            .await
    }

    /// Server-side validation of an edited draft; never mutates anything.
    pub async fn validate_leave_splits(
        &self,
        id: &str,
        splits: &[LeaveSplitPayload],
    ) -> Result<SplitValidationResponse, ApiError> {
        self.send_json(
            self.request(
                Method::POST,
                &format!("/leave-applications/{}/splits/validate", id),
            )
            .json(&json!({ "splits": splits })),
        )
        .await
    }

    /// Replaces the application's split set wholesale; the server is the
    /// source of truth afterwards.
    pub async fn create_leave_splits(
        &self,
        id: &str,
        splits: &[LeaveSplitPayload],
    ) -> Result<SaveSplitsResponse, ApiError> {
        self.send_json(
            self.request(Method::POST, &format!("/leave-applications/{}/splits", id))
                .json(&json!({ "splits": splits })),
        )
        .await
    }
}
