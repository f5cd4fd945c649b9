use std::rc::Rc;

use shared::{Employee, EmployeeId};
use yew::Reducible;

/// Employees shown on the list screen, in store order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeListState {
    employees: Vec<Employee>,
}

pub enum EmployeeListAction {
    /// Replace everything with a fresh fetch
    Loaded(Vec<Employee>),
    /// Append a record returned by a successful create
    Added(Employee),
    /// Drop the record removed by a successful delete
    Removed(EmployeeId),
}

impl EmployeeListState {
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.employees.iter().any(|employee| &employee.id == id)
    }
}

impl Reducible for EmployeeListState {
    type Action = EmployeeListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let employees = match action {
            EmployeeListAction::Loaded(employees) => employees,
            EmployeeListAction::Added(employee) => self
                .employees
                .iter()
                .cloned()
                .chain(std::iter::once(employee))
                .collect(),
            EmployeeListAction::Removed(id) => {
                if !self.contains(&id) {
                    return self;
                }
                self.employees
                    .iter()
                    .filter(|employee| employee.id != id)
                    .cloned()
                    .collect()
            }
        };
        Rc::new(Self { employees })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::fake::employee;

    fn state(names: &[(&str, &str)]) -> Rc<EmployeeListState> {
        Rc::new(EmployeeListState::from_employees(
            names.iter().map(|(id, name)| employee(id, name)).collect(),
        ))
    }

    #[test]
    fn test_loaded_replaces_everything() {
        let before = state(&[("1", "Alice Johnson")]);
        let after = before.reduce(EmployeeListAction::Loaded(vec![
            employee("2", "Bob Williams"),
            employee("3", "Charlie Davis"),
        ]));
        let names: Vec<&str> = after.employees().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bob Williams", "Charlie Davis"]);
    }

    #[test]
    fn test_added_appends_without_touching_previous_state() {
        let before = state(&[("1", "Alice Johnson")]);
        let after = before.clone().reduce(EmployeeListAction::Added(employee("2", "John Smith")));
        assert_eq!(before.employees().len(), 1);
        assert_eq!(after.employees().len(), 2);
        assert_eq!(after.employees()[1].name, "John Smith");
    }

    #[test]
    fn test_removed_filters_by_exact_id() {
        let before = state(&[("1", "Alice Johnson"), ("10", "Diana Miller"), ("2", "Bob Williams")]);
        let after = before.reduce(EmployeeListAction::Removed(EmployeeId::parse("1").unwrap()));
        let ids: Vec<&str> = after.employees().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["10", "2"]);
    }

    #[test]
    fn test_removing_unknown_id_keeps_state() {
        let before = state(&[("1", "Alice Johnson")]);
        let after = before.clone().reduce(EmployeeListAction::Removed(EmployeeId::parse("99").unwrap()));
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_empty_state() {
        let empty = EmployeeListState::default();
        assert!(empty.is_empty());
        assert!(!empty.contains(&EmployeeId::parse("1").unwrap()));
    }
}
