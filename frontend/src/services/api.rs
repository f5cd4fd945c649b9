use gloo::net::http::{Request, Response};
use shared::{CreateEmployeeRequest, Employee, EmployeeId, UpdateEmployeeRequest};
use thiserror::Error;

use crate::config::AppConfig;
use crate::services::store::EmployeeStore;

/// Failure talking to the employee store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// API client for communicating with the employee store
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn employees_url(&self) -> String {
        format!("{}/employees", self.base_url)
    }

    fn employee_url(&self, id: &EmployeeId) -> String {
        format!("{}/employees/{}", self.base_url, urlencoding::encode(id.as_str()))
    }

    fn download_url(&self, id: &EmployeeId) -> String {
        format!("{}/download", self.employee_url(id))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

/// Turn a non-2xx response into `ApiError::Status`, keeping the body text
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ApiError::Status { status, body })
}

impl EmployeeStore for ApiClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let response = Request::get(&self.employees_url())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response)
            .await?
            .json::<Vec<Employee>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn create_employee(&self, request: &CreateEmployeeRequest) -> Result<Employee, ApiError> {
        let response = Request::post(&self.employees_url())
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response)
            .await?
            .json::<Employee>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), ApiError> {
        let response = Request::delete(&self.employee_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response).await.map(|_| ())
    }

    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, ApiError> {
        let response = Request::get(&self.employee_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response)
            .await?
            .json::<Employee>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn update_employee(
        &self,
        id: &EmployeeId,
        request: &UpdateEmployeeRequest,
    ) -> Result<(), ApiError> {
        let response = Request::put(&self.employee_url(id))
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response).await.map(|_| ())
    }

    async fn download_summary(&self, id: &EmployeeId) -> Result<Vec<u8>, ApiError> {
        let response = Request::get(&self.download_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response)
            .await?
            .binary()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
