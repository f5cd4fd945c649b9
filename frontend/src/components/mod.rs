pub mod add_employee_modal;
pub mod avatar;
pub mod bottom_nav;
pub mod employee_card;
pub mod entry_card;
pub mod header;
pub mod remove_employee_modal;

pub use add_employee_modal::AddEmployeeModal;
pub use avatar::Avatar;
pub use bottom_nav::BottomNav;
pub use employee_card::EmployeeCard;
pub use entry_card::EntryCard;
pub use header::Header;
pub use remove_employee_modal::RemoveEmployeeModal;
