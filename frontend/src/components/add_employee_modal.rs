use shared::Employee;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::workflows;

#[derive(Properties, PartialEq)]
pub struct AddEmployeeModalProps {
    pub is_open: bool,
    pub api_client: ApiClient,
    /// Fired with the record the store created
    pub on_created: Callback<Employee>,
    pub on_close: Callback<()>,
}

#[function_component(AddEmployeeModal)]
pub fn add_employee_modal(props: &AddEmployeeModalProps) -> Html {
    let name = use_state(String::new);
    let is_submitting = use_state(|| false);

    // Reset state when modal opens
    use_effect_with(props.is_open, {
        let name = name.clone();
        let is_submitting = is_submitting.clone();
        move |is_open| {
            if *is_open {
                name.set(String::new());
                is_submitting.set(false);
            }
            || ()
        }
    });

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let is_submitting = is_submitting.clone();
        let api_client = props.api_client.clone();
        let on_created = props.on_created.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let typed = (*name).clone();
            let name = name.clone();
            let is_submitting = is_submitting.clone();
            let api_client = api_client.clone();
            let on_created = on_created.clone();
            let on_close = on_close.clone();

            spawn_local(async move {
                is_submitting.set(true);
                match workflows::create_employee(&api_client, &typed).await {
                    Ok(employee) => {
                        name.set(String::new());
                        on_created.emit(employee);
                        on_close.emit(());
                    }
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

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50" onclick={on_backdrop_click}>
            <div class="bg-white p-5 rounded-lg w-11/12 max-w-sm text-center" onclick={on_modal_click}>
                <h2 class="text-lg font-semibold mb-4">{"Add New Employee"}</h2>
                <form onsubmit={on_submit}>
                    <input
                        type="text"
                        class="w-full p-2 border rounded mb-4"
                        placeholder="Enter employee name"
                        value={(*name).clone()}
                        oninput={on_name_input}
                        disabled={*is_submitting}
                        autofocus=true
                    />
                    <div class="flex justify-between">
                        <button
                            type="submit"
                            class="bg-indigo-600 text-white px-4 py-2 rounded hover:bg-indigo-700"
                            disabled={*is_submitting}
                        >
                            {if *is_submitting { "Adding..." } else { "Add" }}
                        </button>
                        <button
                            type="button"
                            class="bg-gray-300 px-4 py-2 rounded hover:bg-gray-400"
                            onclick={on_cancel}
                            disabled={*is_submitting}
                        >
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
