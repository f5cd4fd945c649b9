pub mod employee_detail;
pub mod employee_list;
pub mod not_found;

pub use employee_detail::EmployeeDetailPage;
pub use employee_list::EmployeeListPage;
pub use not_found::NotFoundPage;
