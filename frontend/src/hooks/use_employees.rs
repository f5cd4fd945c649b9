use shared::{Employee, EmployeeId};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::workflows;
use crate::state::{EmployeeListAction, EmployeeListState};

pub struct UseEmployeesResult {
    pub state: EmployeeListState,
    pub loading: bool,
    pub actions: UseEmployeesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseEmployeesActions {
    /// Apply a record the store has just created
    pub employee_added: Callback<Employee>,
    /// Apply a delete the store has just confirmed
    pub employee_removed: Callback<EmployeeId>,
}

#[hook]
pub fn use_employees(api_client: &ApiClient) -> UseEmployeesResult {
    let list = use_reducer(EmployeeListState::default);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let dispatcher = list.dispatcher();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                let employees = workflows::load_employee_list(&api_client).await;
                dispatcher.dispatch(EmployeeListAction::Loaded(employees));
                loading.set(false);
            });
        })
    };

    let employee_added = {
        let dispatcher = list.dispatcher();
        use_callback((), move |employee: Employee, _| {
            dispatcher.dispatch(EmployeeListAction::Added(employee));
        })
    };

    let employee_removed = {
        let dispatcher = list.dispatcher();
        use_callback((), move |id: EmployeeId, _| {
            dispatcher.dispatch(EmployeeListAction::Removed(id));
        })
    };

    // Load the list once on mount
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    UseEmployeesResult {
        state: (*list).clone(),
        loading: *loading,
        actions: UseEmployeesActions {
            employee_added,
            employee_removed,
        },
    }
}
