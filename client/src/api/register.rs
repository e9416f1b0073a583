use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::types::ApiError;
use crate::models::register::LeaveRegister;

impl ApiClient {
    /// The accrual arithmetic behind the register is owned by the backend;
    /// the client only renders what it returns.
    pub async fn get_leave_register(
        &self,
        year: i32,
        employee_id: Option<&str>,
    ) -> Result<LeaveRegister, ApiError> {
        let mut params: Vec<(&str, String)> = vec![("year", year.to_string())];
        if let Some(employee_id) = employee_id {
            params.push(("employee_id", employee_id.to_string()));
        }
        self.send_json(self.request(Method::GET, "/leave-register").query(&params))
            .await
    }
}
