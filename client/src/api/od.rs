use reqwest::Method;
use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, CreateOdApplication, Paginated};
use crate::models::od::OdApplication;
use crate::workflow::ApplicationStatus;

impl ApiClient {
    pub async fn list_od_applications(
        &self,
        status: Option<ApplicationStatus>,
        employee_id: Option<&str>,
    ) -> Result<Paginated<OdApplication>, ApiError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(status) = status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(employee_id) = employee_id {
            params.push(("employee_id", employee_id.to_string()));
        }
        let mut request = self.request(Method::GET, "/od-applications");
        if !params.is_empty() {
            request = request.query(&params);
        }
        self.send_json(request).await
    }

    pub async fn create_od_application(
        &self,
        payload: &CreateOdApplication,
    ) -> Result<OdApplication, ApiError> {
        self.send_json(self.request(Method::POST, "/od-applications").json(payload))
            .await
    }

    pub async fn approve_od_application(
        &self,
        id: &str,
        comment: &str,
    ) -> Result<OdApplication, ApiError> {
        self.decide_od(id, "approve", comment).await
    }

    pub async fn reject_od_application(
        &self,
        id: &str,
        comment: &str,
    ) -> Result<OdApplication, ApiError> {
        self.decide_od(id, "reject", comment).await
    }

    async fn decide_od(
        &self,
        id: &str,
        action: &str,
        comment: &str,
    ) -> Result<OdApplication, ApiError> {
        self.send_json(
            self.request(Method::PUT, &format!("/od-applications/{}/{}", id, action))
                .json(&json!({ "comment": comment })),
        )
        .await
    }
}
