//! Screen state for the two pages.
//!
//! Both types are immutable `Reducible`s: every action produces a new value,
//! so transitions can be tested without a browser.

pub mod employee_list;
pub mod entry_editor;

pub use employee_list::{EmployeeListAction, EmployeeListState};
pub use entry_editor::{EditableEntry, EditorAction, EntryEditor, EntryField};
