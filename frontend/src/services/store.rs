use shared::{CreateEmployeeRequest, Employee, EmployeeId, UpdateEmployeeRequest};

use crate::services::api::ApiError;

/// Operations offered by the remote employee store.
///
/// `ApiClient` talks to the real service; tests swap in an in-memory store.
#[allow(async_fn_in_trait)]
pub trait EmployeeStore {
    /// `GET /employees`
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError>;

    /// `POST /employees`, returning the store-assigned record
    async fn create_employee(&self, request: &CreateEmployeeRequest) -> Result<Employee, ApiError>;

    /// `DELETE /employees/{id}`
    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), ApiError>;

    /// `GET /employees/{id}`, including work entries
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, ApiError>;

    /// `PUT /employees/{id}`: replaces entries and earnings wholesale
    async fn update_employee(
        &self,
        id: &EmployeeId,
        request: &UpdateEmployeeRequest,
    ) -> Result<(), ApiError>;

    /// `GET /employees/{id}/download`: the generated PDF summary
    async fn download_summary(&self, id: &EmployeeId) -> Result<Vec<u8>, ApiError>;
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    pub enum StoreCall {
        List,
        Create(CreateEmployeeRequest),
        Delete(EmployeeId),
        Get(EmployeeId),
        Update(EmployeeId, UpdateEmployeeRequest),
        Download(EmployeeId),
    }

    /// In-memory store that records every call it receives
    #[derive(Default)]
    pub struct FakeStore {
        pub employees: RefCell<Vec<Employee>>,
        pub calls: RefCell<Vec<StoreCall>>,
        /// When set, every call fails with a 500 after being recorded
        pub failing: Cell<bool>,
        next_id: Cell<u32>,
    }

    impl FakeStore {
        pub fn with_employees(employees: Vec<Employee>) -> Self {
            let store = Self::default();
            store.next_id.set(employees.len() as u32 + 1);
            *store.employees.borrow_mut() = employees;
            store
        }

        pub fn failing() -> Self {
            let store = Self::default();
            store.failing.set(true);
            store
        }

        pub fn calls(&self) -> Vec<StoreCall> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: StoreCall) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            if self.failing.get() {
                return Err(ApiError::Status {
                    status: 500,
                    body: "Internal Server Error".to_string(),
                });
            }
            Ok(())
        }

        fn not_found(id: &EmployeeId) -> ApiError {
            ApiError::Status {
                status: 404,
                body: format!("Employee {} not found", id),
            }
        }
    }

    pub fn employee(id: &str, name: &str) -> Employee {
        Employee {
            id: EmployeeId::parse(id).unwrap(),
            name: name.to_string(),
            title: "Senior Developer".to_string(),
            earned: 0.0,
            image: None,
            initials: None,
            color: None,
            work_entries: Vec::new(),
        }
    }

    impl EmployeeStore for FakeStore {
        async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
            self.record(StoreCall::List)?;
            Ok(self.employees.borrow().clone())
        }

        async fn create_employee(&self, request: &CreateEmployeeRequest) -> Result<Employee, ApiError> {
            self.record(StoreCall::Create(request.clone()))?;
            let id = self.next_id.get().max(1);
            self.next_id.set(id + 1);
            let mut created = employee(&id.to_string(), &request.name);
            created.earned = request.earned;
            self.employees.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn delete_employee(&self, id: &EmployeeId) -> Result<(), ApiError> {
            self.record(StoreCall::Delete(id.clone()))?;
            let mut employees = self.employees.borrow_mut();
            let before = employees.len();
            employees.retain(|employee| &employee.id != id);
            if employees.len() == before {
                return Err(Self::not_found(id));
            }
            Ok(())
        }

        async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, ApiError> {
            self.record(StoreCall::Get(id.clone()))?;
            self.employees
                .borrow()
                .iter()
                .find(|employee| &employee.id == id)
                .cloned()
                .ok_or_else(|| Self::not_found(id))
        }

        async fn update_employee(
            &self,
            id: &EmployeeId,
            request: &UpdateEmployeeRequest,
        ) -> Result<(), ApiError> {
            self.record(StoreCall::Update(id.clone(), request.clone()))?;
            let mut employees = self.employees.borrow_mut();
            let employee = employees
                .iter_mut()
                .find(|employee| &employee.id == id)
                .ok_or_else(|| Self::not_found(id))?;
            employee.earned = request.earned;
            employee.work_entries = request
                .work_entries
                .iter()
                .map(|payload| shared::WorkEntry {
                    date: payload.date.clone(),
                    work: payload.work.clone(),
                    rate: payload.rate,
                    units: payload.units,
                    deposited: payload.deposited,
                })
                .collect();
            Ok(())
        }

        async fn download_summary(&self, id: &EmployeeId) -> Result<Vec<u8>, ApiError> {
            self.record(StoreCall::Download(id.clone()))?;
            if !self.employees.borrow().iter().any(|employee| &employee.id == id) {
                return Err(Self::not_found(id));
            }
            Ok(b"%PDF-1.4 summary".to_vec())
        }
    }
}
