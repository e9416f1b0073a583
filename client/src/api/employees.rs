use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, Paginated};
use crate::models::employee::Employee;

fn employee_list_params(
    search: Option<&str>,
    division_id: Option<&str>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(search) = search {
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
    }
    if let Some(division_id) = division_id {
        params.push(("division_id", division_id.to_string()));
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
    pub async fn list_employees(
        &self,
        search: Option<&str>,
        division_id: Option<&str>,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Paginated<Employee>, ApiError> {
        let params = employee_list_params(search, division_id, page, per_page);
        let mut request = self.request(Method::GET, "/employees");
        if !params.is_empty() {
            request = request.query(&params);
        }
        self.send_json(request).await
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee, ApiError> {
        self.send_json(self.request(Method::GET, &format!("/employees/{}", id)))
            .await
    }

    /// Advances the employee's payroll state; computation is server-side.
    pub async fn approve_employee_salary(&self, id: &str) -> Result<Employee, ApiError> {
        self.send_json(self.request(Method::PUT, &format!("/employees/{}/salary/approve", id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_list_params_skip_blank_search() {
        let params = employee_list_params(Some(""), None, None, None);
        assert!(params.is_empty());
    }

    #[test]
    fn employee_list_params_include_filters() {
        let params = employee_list_params(Some("priya"), Some("div-1"), Some(1), Some(20));
        assert!(params.contains(&("search", "priya".to_string())));
        assert!(params.contains(&("division_id", "div-1".to_string())));
        assert!(params.contains(&("page", "1".to_string())));
        assert!(params.contains(&("per_page", "20".to_string())));
    }
}
