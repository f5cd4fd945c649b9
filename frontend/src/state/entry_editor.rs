use std::rc::Rc;

use shared::{grand_total, parse_number_input, Employee, EmployeeId, UpdateEmployeeRequest, WorkEntry};
use yew::Reducible;

/// Whether a row shows its values or form controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowMode {
    #[default]
    Display,
    Editing,
}

impl RowMode {
    pub fn toggled(self) -> Self {
        match self {
            RowMode::Display => RowMode::Editing,
            RowMode::Editing => RowMode::Display,
        }
    }

    pub fn is_editing(self) -> bool {
        self == RowMode::Editing
    }
}

/// A work entry plus its on-screen mode. The mode is never sent to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct EditableEntry {
    pub entry: WorkEntry,
    pub mode: RowMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Date,
    Work,
    Rate,
    Units,
    Deposited,
}

/// Which fetch the editor's rows came from
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EntrySource {
    #[default]
    Empty,
    Loading(EmployeeId),
    Loaded { id: EmployeeId, employee: Employee },
    Failed(EmployeeId),
}

/// Local, editable copy of one employee's work entries.
///
/// Rows only ever come from the latest requested fetch, so a save can never
/// overwrite a record whose entries were not loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryEditor {
    source: EntrySource,
    rows: Vec<EditableEntry>,
}

pub enum EditorAction {
    /// Clear the rows and wait for this employee's fetch
    Begin(EmployeeId),
    /// Fetched record for `id`; ignored unless `id` is the one being waited on
    Load { id: EmployeeId, employee: Employee },
    LoadFailed(EmployeeId),
    ToggleRow(usize),
    EditField { index: usize, field: EntryField, value: String },
    /// Prepend a blank row in editing mode
    AddBlank,
}

impl EntryEditor {
    /// Editor for a fetched record, all rows in display mode
    pub fn loaded(id: EmployeeId, employee: Employee) -> Self {
        let rows = employee
            .work_entries
            .iter()
            .cloned()
            .map(|entry| EditableEntry { entry, mode: RowMode::Display })
            .collect();
        Self {
            source: EntrySource::Loaded { id, employee },
            rows,
        }
    }

    pub fn employee(&self) -> Option<&Employee> {
        match &self.source {
            EntrySource::Loaded { employee, .. } => Some(employee),
            _ => None,
        }
    }

    /// True until the requested fetch has answered
    pub fn is_loading(&self) -> bool {
        matches!(self.source, EntrySource::Empty | EntrySource::Loading(_))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.source, EntrySource::Loaded { .. })
    }

    fn is_waiting_for(&self, id: &EmployeeId) -> bool {
        matches!(&self.source, EntrySource::Loading(pending) if pending == id)
    }

    pub fn rows(&self) -> &[EditableEntry] {
        &self.rows
    }

    pub fn entries(&self) -> impl Iterator<Item = &WorkEntry> {
        self.rows.iter().map(|row| &row.entry)
    }

    pub fn total(&self) -> f64 {
        grand_total(self.entries())
    }

    /// Target and body for a save, available only once entries were loaded
    pub fn pending_save(&self) -> Option<(EmployeeId, UpdateEmployeeRequest)> {
        match &self.source {
            EntrySource::Loaded { id, .. } => {
                Some((id.clone(), UpdateEmployeeRequest::from_entries(self.entries())))
            }
            _ => None,
        }
    }

    fn with_row_changed<F>(&self, index: usize, change: F) -> Option<Self>
    where
        F: FnOnce(&mut EditableEntry),
    {
        if index >= self.rows.len() {
            return None;
        }
        let mut rows = self.rows.clone();
        change(&mut rows[index]);
        Some(Self { source: self.source.clone(), rows })
    }
}

fn apply_field(entry: &mut WorkEntry, field: EntryField, value: String) {
    match field {
        EntryField::Date => entry.date = value,
        EntryField::Work => entry.work = value,
        EntryField::Rate => entry.rate = parse_number_input(&value),
        EntryField::Units => entry.units = parse_number_input(&value),
        EntryField::Deposited => entry.deposited = parse_number_input(&value),
    }
}

impl Reducible for EntryEditor {
    type Action = EditorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            EditorAction::Begin(id) => Some(Self {
                source: EntrySource::Loading(id),
                rows: Vec::new(),
            }),
            EditorAction::Load { id, employee } => {
                self.is_waiting_for(&id).then(|| Self::loaded(id, employee))
            }
            EditorAction::LoadFailed(id) => self.is_waiting_for(&id).then(|| Self {
                source: EntrySource::Failed(id),
                rows: Vec::new(),
            }),
            EditorAction::ToggleRow(index) => {
                self.with_row_changed(index, |row| row.mode = row.mode.toggled())
            }
            EditorAction::EditField { index, field, value } => {
                self.with_row_changed(index, |row| apply_field(&mut row.entry, field, value))
            }
            EditorAction::AddBlank => {
                let blank = EditableEntry { entry: WorkEntry::blank(), mode: RowMode::Editing };
                let rows = std::iter::once(blank).chain(self.rows.iter().cloned()).collect();
                self.is_loaded().then(|| Self { source: self.source.clone(), rows })
            }
        };
        next.map(Rc::new).unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::format::format_rupees;
    use crate::services::store::fake::employee;

    fn id(raw: &str) -> EmployeeId {
        EmployeeId::parse(raw).unwrap()
    }

    fn loaded(raw_id: &str, entries: Vec<WorkEntry>) -> EntryEditor {
        let mut record = employee(raw_id, "Jane Doe");
        record.work_entries = entries;
        EntryEditor::loaded(id(raw_id), record)
    }

    fn entry(date: &str, rate: f64, units: f64, deposited: f64) -> WorkEntry {
        WorkEntry {
            date: date.to_string(),
            work: format!("Work on {}", date),
            rate,
            units,
            deposited,
        }
    }

    fn sample() -> Rc<EntryEditor> {
        Rc::new(loaded(
            "1",
            vec![
                entry("2024-07-20", 25.0, 8.0, 0.0),
                entry("2024-07-19", 30.0, 6.0, 180.0),
                entry("2024-07-18", 28.0, 7.0, -50.0),
            ],
        ))
    }

    fn edit(index: usize, field: EntryField, value: &str) -> EditorAction {
        EditorAction::EditField { index, field, value: value.to_string() }
    }

    #[test]
    fn test_loaded_rows_start_in_display_mode() {
        let editor = sample();
        assert_eq!(editor.rows().len(), 3);
        assert!(editor.rows().iter().all(|row| row.mode == RowMode::Display));
    }

    #[test]
    fn test_toggle_affects_only_one_row() {
        let before = sample();
        let after = before.clone().reduce(EditorAction::ToggleRow(1));

        assert_eq!(after.rows()[1].mode, RowMode::Editing);
        assert_eq!(after.rows()[0], before.rows()[0]);
        assert_eq!(after.rows()[2], before.rows()[2]);
        assert_eq!(before.rows()[1].mode, RowMode::Display);

        let back = after.reduce(EditorAction::ToggleRow(1));
        assert_eq!(*back, *before);
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let before = sample();
        let after = before.clone().reduce(EditorAction::ToggleRow(3));
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_text_fields_are_stored_verbatim() {
        let editor = sample()
            .reduce(edit(0, EntryField::Date, "next week"))
            .reduce(edit(0, EntryField::Work, "  Prepared training materials "));
        assert_eq!(editor.rows()[0].entry.date, "next week");
        assert_eq!(editor.rows()[0].entry.work, "  Prepared training materials ");
    }

    #[test]
    fn test_numeric_fields_are_parsed_or_zero() {
        let editor = sample()
            .reduce(edit(1, EntryField::Rate, "32.5"))
            .reduce(edit(1, EntryField::Units, "abc"))
            .reduce(edit(1, EntryField::Deposited, "-20"));
        let row = &editor.rows()[1].entry;
        assert_eq!(row.rate, 32.5);
        assert_eq!(row.units, 0.0);
        assert_eq!(row.deposited, -20.0);

        let cleared = editor.reduce(edit(1, EntryField::Rate, ""));
        assert_eq!(cleared.rows()[1].entry.rate, 0.0);
    }

    #[test]
    fn test_add_blank_prepends_editing_row() {
        let editor = sample().reduce(EditorAction::AddBlank);
        assert_eq!(editor.rows().len(), 4);
        assert_eq!(editor.rows()[0].entry, WorkEntry::blank());
        assert_eq!(editor.rows()[0].mode, RowMode::Editing);
        assert_eq!(editor.rows()[1].entry.date, "2024-07-20");
    }

    #[test]
    fn test_total_follows_edits() {
        let editor = sample();
        assert_eq!(editor.total(), 200.0 + 180.0 + 180.0 + 196.0 - 50.0);

        let editor = editor.reduce(edit(2, EntryField::Deposited, "not a number"));
        assert_eq!(editor.total(), 200.0 + 180.0 + 180.0 + 196.0);
    }

    #[test]
    fn test_scenario_amounts_and_total() {
        let editor = loaded(
            "1",
            vec![entry("2024-07-20", 25.0, 8.0, 0.0), entry("2024-07-19", 30.0, 6.0, 180.0)],
        );
        let amounts: Vec<f64> = editor.entries().map(WorkEntry::amount).collect();
        assert_eq!(amounts, vec![200.0, 180.0]);
        assert_eq!(editor.total(), 560.0);

        let (target, request) = editor.pending_save().unwrap();
        assert_eq!(target, id("1"));
        assert_eq!(request.earned, 560.0);
    }

    #[test]
    fn test_load_resets_modes() {
        let mut record = employee("2", "Bob Williams");
        record.work_entries = vec![entry("2024-07-17", 22.0, 5.0, 110.0)];

        let editor = sample()
            .reduce(EditorAction::ToggleRow(0))
            .reduce(EditorAction::Begin(id("2")))
            .reduce(EditorAction::Load { id: id("2"), employee: record });
        assert_eq!(editor.rows().len(), 1);
        assert_eq!(editor.rows()[0].mode, RowMode::Display);
        assert_eq!(editor.employee().map(|e| e.name.as_str()), Some("Bob Williams"));
    }

    #[test]
    fn test_empty_editor_total_is_positive_zero() {
        let editor = EntryEditor::default();
        assert!(editor.total().is_sign_positive());
        assert_eq!(format_rupees(editor.total()), "₹0.00");
    }

    #[test]
    fn test_nothing_to_save_until_loaded() {
        let editor = Rc::new(EntryEditor::default());
        assert!(editor.pending_save().is_none());

        let editor = editor.reduce(EditorAction::Begin(id("1")));
        assert!(editor.is_loading());
        assert!(editor.pending_save().is_none());
    }

    #[test]
    fn test_failed_load_cannot_be_saved_or_extended() {
        let editor = sample()
            .reduce(EditorAction::Begin(id("1")))
            .reduce(EditorAction::LoadFailed(id("1")));
        assert_eq!(editor.source, EntrySource::Failed(id("1")));
        assert!(editor.rows().is_empty());
        assert!(editor.pending_save().is_none());

        let after = editor.clone().reduce(EditorAction::AddBlank);
        assert!(Rc::ptr_eq(&editor, &after));
    }

    #[test]
    fn test_stale_fetch_is_ignored() {
        let mut alice = employee("1", "Alice Johnson");
        alice.work_entries = vec![entry("2024-07-20", 25.0, 8.0, 0.0)];
        let mut bob = employee("2", "Bob Williams");
        bob.work_entries = vec![entry("2024-07-19", 30.0, 6.0, 180.0)];

        // Route moves from 1 to 2 before the first response arrives
        let editor = Rc::new(EntryEditor::default())
            .reduce(EditorAction::Begin(id("1")))
            .reduce(EditorAction::Begin(id("2")))
            .reduce(EditorAction::Load { id: id("2"), employee: bob })
            .reduce(EditorAction::Load { id: id("1"), employee: alice.clone() })
            .reduce(EditorAction::LoadFailed(id("1")));

        assert_eq!(editor.employee().map(|e| e.name.as_str()), Some("Bob Williams"));
        let (target, request) = editor.pending_save().unwrap();
        assert_eq!(target, id("2"));
        assert_eq!(request.earned, 360.0);

        let waiting = Rc::new(EntryEditor::default())
            .reduce(EditorAction::Begin(id("2")))
            .reduce(EditorAction::Load { id: id("1"), employee: alice });
        assert!(waiting.is_loading());
        assert!(waiting.rows().is_empty());
    }
}
