pub mod use_employee_detail;
pub mod use_employees;

pub use use_employee_detail::use_employee_detail;
pub use use_employees::use_employees;
