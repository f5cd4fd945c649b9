use shared::{Employee, EmployeeId};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::notice::Notice;
use crate::services::workflows::{self, DETAIL_COMPONENT};
use crate::state::{EditorAction, EntryEditor, EntryField};

pub struct EmployeeDetailState {
    pub employee: Option<Employee>,
    pub editor: EntryEditor,
    pub loading: bool,
    pub saving: bool,
    pub downloading: bool,
}

pub struct UseEmployeeDetailResult {
    pub state: EmployeeDetailState,
    pub actions: UseEmployeeDetailActions,
}

#[derive(Clone, PartialEq)]
pub struct UseEmployeeDetailActions {
    pub toggle_row: Callback<usize>,
    pub edit_field: Callback<(usize, EntryField, String)>,
    pub add_entry: Callback<()>,
    pub save: Callback<()>,
    pub download: Callback<()>,
}

#[hook]
pub fn use_employee_detail(api_client: &ApiClient, id: &EmployeeId) -> UseEmployeeDetailResult {
    let editor = use_reducer(EntryEditor::default);
    let saving = use_state(|| false);
    let downloading = use_state(|| false);

    // Fetch on mount and whenever the route identifier changes
    use_effect_with(id.clone(), {
        let api_client = api_client.clone();
        let dispatcher = editor.dispatcher();
        move |id: &EmployeeId| {
            let id = id.clone();
            dispatcher.dispatch(EditorAction::Begin(id.clone()));
            spawn_local(async move {
                match workflows::load_employee(&api_client, &id).await {
                    Ok(employee) => dispatcher.dispatch(EditorAction::Load { id, employee }),
                    Err(notice) => {
                        dispatcher.dispatch(EditorAction::LoadFailed(id));
                        notice.show();
                    }
                }
            });
            || ()
        }
    });

    let toggle_row = {
        let dispatcher = editor.dispatcher();
        use_callback((), move |index: usize, _| {
            dispatcher.dispatch(EditorAction::ToggleRow(index));
        })
    };

    let edit_field = {
        let dispatcher = editor.dispatcher();
        use_callback((), move |(index, field, value): (usize, EntryField, String), _| {
            dispatcher.dispatch(EditorAction::EditField { index, field, value });
        })
    };

    let add_entry = {
        let dispatcher = editor.dispatcher();
        use_callback((), move |_, _| {
            dispatcher.dispatch(EditorAction::AddBlank);
        })
    };

    // Rebuilt every render so it always sends the entries currently on screen
    let save = {
        let api_client = api_client.clone();
        let pending = editor.pending_save();
        let saving = saving.clone();
        Callback::from(move |_: ()| {
            let Some((id, request)) = pending.clone() else {
                Logger::warn_with_component(DETAIL_COMPONENT, "Nothing to save before entries are loaded");
                return;
            };
            let api_client = api_client.clone();
            let saving = saving.clone();
            spawn_local(async move {
                saving.set(true);
                let notice = workflows::save_entries(&api_client, &id, &request).await;
                saving.set(false);
                notice.show();
            });
        })
    };

    let download = {
        let api_client = api_client.clone();
        let id = id.clone();
        let downloading = downloading.clone();
        use_callback(id.clone(), move |_, _| {
            let api_client = api_client.clone();
            let id = id.clone();
            let downloading = downloading.clone();
            spawn_local(async move {
                downloading.set(true);
                match workflows::fetch_summary(&api_client, &id).await {
                    Ok(document) => {
                        if let Err(e) = document.save() {
                            Logger::error_with_component(
                                DETAIL_COMPONENT,
                                &format!("Failed to save PDF summary: {}", e),
                            );
                            Notice::error("Failed to download PDF summary.").show();
                        }
                    }
                    Err(notice) => notice.show(),
                }
                downloading.set(false);
            });
        })
    };

    UseEmployeeDetailResult {
        state: EmployeeDetailState {
            employee: editor.employee().cloned(),
            editor: (*editor).clone(),
            loading: editor.is_loading(),
            saving: *saving,
            downloading: *downloading,
        },
        actions: UseEmployeeDetailActions {
            toggle_row,
            edit_field,
            add_entry,
            save,
            download,
        },
    }
}
