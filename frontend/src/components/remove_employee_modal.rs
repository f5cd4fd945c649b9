use shared::{Employee, EmployeeId};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::workflows;

#[derive(Properties, PartialEq)]
pub struct RemoveEmployeeModalProps {
    pub is_open: bool,
    pub api_client: ApiClient,
    pub employees: Vec<Employee>,
    /// Fired with the identifier the store deleted
    pub on_removed: Callback<EmployeeId>,
    pub on_close: Callback<()>,
}

#[function_component(RemoveEmployeeModal)]
pub fn remove_employee_modal(props: &RemoveEmployeeModalProps) -> Html {
    let selected = use_state(|| Option::<EmployeeId>::None);
    let is_submitting = use_state(|| false);

    use_effect_with(props.is_open, {
        let selected = selected.clone();
        let is_submitting = is_submitting.clone();
        move |is_open| {
            if *is_open {
                selected.set(None);
                is_submitting.set(false);
            }
            || ()
        }
    });

    let on_select_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(EmployeeId::parse(&select.value()).ok());
        })
    };

    let on_confirm = {
        let selected = selected.clone();
        let is_submitting = is_submitting.clone();
        let api_client = props.api_client.clone();
        let on_removed = props.on_removed.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |_: MouseEvent| {
            let target = (*selected).clone();
            let selected = selected.clone();
            let is_submitting = is_submitting.clone();
            let api_client = api_client.clone();
            let on_removed = on_removed.clone();
            let on_close = on_close.clone();

            spawn_local(async move {
                is_submitting.set(true);
                match workflows::remove_employee(&api_client, target.as_ref()).await {
                    Ok(Some(id)) => {
                        selected.set(None);
                        on_removed.emit(id);
                        on_close.emit(());
                    }
                    Ok(None) => {}
                    Err(notice) => notice.show(),
                }
                is_submitting.set(false);
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let current = (*selected).clone();
    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50" onclick={on_backdrop_click}>
            <div class="bg-white p-5 rounded-lg w-11/12 max-w-sm text-center" onclick={on_modal_click}>
                <h2 class="text-lg font-semibold mb-4">{"Remove Employee"}</h2>
                <select
                    class="w-full p-2 border rounded mb-4"
                    onchange={on_select_change}
                    disabled={*is_submitting}
                >
                    <option value="" disabled=true selected={current.is_none()}>
                        {"Select an employee"}
                    </option>
                    {for props.employees.iter().map(|employee| {
                        let is_selected = current.as_ref() == Some(&employee.id);
                        html! {
                            <option
                                key={employee.id.to_string()}
                                value={employee.id.to_string()}
                                selected={is_selected}
                            >
                                {&employee.name}
                            </option>
                        }
                    })}
                </select>
                <div class="flex justify-between">
                    <button
                        class="bg-red-500 text-white px-4 py-2 rounded hover:bg-red-600"
                        onclick={on_confirm}
                        disabled={*is_submitting}
                    >
                        {if *is_submitting { "Deleting..." } else { "Confirm Delete" }}
                    </button>
                    <button
                        class="bg-gray-300 px-4 py-2 rounded hover:bg-gray-400"
                        onclick={on_cancel}
                        disabled={*is_submitting}
                    >
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
