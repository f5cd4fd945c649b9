//! Screen actions that talk to the store.
//!
//! Each workflow validates its input, performs at most one store call, logs
//! failures, and hands back either the data to apply or a notice to show.
//! Local state is only ever changed by the caller after a successful result.

use shared::{CreateEmployeeRequest, Employee, EmployeeId, UpdateEmployeeRequest};

use crate::services::download::SummaryDocument;
use crate::services::logging::Logger;
use crate::services::notice::Notice;
use crate::services::store::EmployeeStore;

pub const LIST_COMPONENT: &str = "employee-list";
pub const DETAIL_COMPONENT: &str = "employee-detail";

/// Fetch every employee; an unreachable store yields an empty list
pub async fn load_employee_list<S: EmployeeStore>(store: &S) -> Vec<Employee> {
    match store.list_employees().await {
        Ok(employees) => {
            Logger::debug_with_component(
                LIST_COMPONENT,
                &format!("Loaded {} employees", employees.len()),
            );
            employees
        }
        Err(e) => {
            Logger::error_with_component(LIST_COMPONENT, &format!("Failed to load employees: {}", e));
            Vec::new()
        }
    }
}

/// Create an employee from a name typed into the add prompt.
///
/// Blank names are rejected before any request is made.
pub async fn create_employee<S: EmployeeStore>(store: &S, name: &str) -> Result<Employee, Notice> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Notice::warning("Please enter a name."));
    }

    let request = CreateEmployeeRequest::new(name);
    match store.create_employee(&request).await {
        Ok(employee) => {
            Logger::info_with_component(
                LIST_COMPONENT,
                &format!("Created employee {} ({})", employee.name, employee.id),
            );
            Ok(employee)
        }
        Err(e) => {
            Logger::error_with_component(LIST_COMPONENT, &format!("Failed to add employee: {}", e));
            Err(Notice::error("Failed to add employee. Please try again."))
        }
    }
}

/// Delete the selected employee.
///
/// Returns `Ok(None)` without contacting the store when nothing is selected,
/// and the removed identifier on success.
pub async fn remove_employee<S: EmployeeStore>(
    store: &S,
    selected: Option<&EmployeeId>,
) -> Result<Option<EmployeeId>, Notice> {
    let Some(id) = selected else {
        return Ok(None);
    };

    match store.delete_employee(id).await {
        Ok(()) => {
            Logger::info_with_component(LIST_COMPONENT, &format!("Removed employee {}", id));
            Ok(Some(id.clone()))
        }
        Err(e) => {
            Logger::error_with_component(
                LIST_COMPONENT,
                &format!("Failed to remove employee {}: {}", id, e),
            );
            Err(Notice::error("Failed to remove employee. Please try again."))
        }
    }
}

pub async fn load_employee<S: EmployeeStore>(store: &S, id: &EmployeeId) -> Result<Employee, Notice> {
    store.get_employee(id).await.map_err(|e| {
        Logger::error_with_component(
            DETAIL_COMPONENT,
            &format!("Failed to load employee {}: {}", id, e),
        );
        Notice::error("Failed to load employee details.")
    })
}

/// Replace the employee's entries and earnings with the local copy
pub async fn save_entries<S: EmployeeStore>(
    store: &S,
    id: &EmployeeId,
    request: &UpdateEmployeeRequest,
) -> Notice {
    match store.update_employee(id, request).await {
        Ok(()) => {
            Logger::info_with_component(
                DETAIL_COMPONENT,
                &format!("Saved {} entries for employee {}", request.work_entries.len(), id),
            );
            Notice::success("Entries saved successfully.")
        }
        Err(e) => {
            Logger::error_with_component(
                DETAIL_COMPONENT,
                &format!("Failed to save entries for employee {}: {}", id, e),
            );
            Notice::error("Failed to save entries. Your changes are kept, please try again.")
        }
    }
}

/// Fetch the generated PDF summary for an employee
pub async fn fetch_summary<S: EmployeeStore>(store: &S, id: &EmployeeId) -> Result<SummaryDocument, Notice> {
    match store.download_summary(id).await {
        Ok(bytes) => {
            Logger::debug_with_component(
                DETAIL_COMPONENT,
                &format!("Downloaded {} byte summary for employee {}", bytes.len(), id),
            );
            Ok(SummaryDocument::for_employee(id, bytes))
        }
        Err(e) => {
            Logger::error_with_component(
                DETAIL_COMPONENT,
                &format!("Failed to download summary for employee {}: {}", id, e),
            );
            Err(Notice::error("Failed to download PDF summary."))
        }
    }
}
