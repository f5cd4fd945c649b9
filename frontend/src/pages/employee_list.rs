use shared::EmployeeId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{AddEmployeeModal, BottomNav, EmployeeCard, Header, RemoveEmployeeModal};
use crate::hooks::use_employees;
use crate::route::Route;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::workflows::LIST_COMPONENT;

#[function_component(EmployeeListPage)]
pub fn employee_list_page() -> Html {
    let api_client = use_context::<ApiClient>().unwrap_or_default();
    let employees = use_employees(&api_client);
    let navigator = use_navigator();
    let show_add_modal = use_state(|| false);
    let show_remove_modal = use_state(|| false);

    let on_select = Callback::from(move |id: EmployeeId| match &navigator {
        Some(navigator) => navigator.push(&Route::employee(&id)),
        None => Logger::warn_with_component(LIST_COMPONENT, "Navigation is unavailable outside a router"),
    });

    let open_add = {
        let show_add_modal = show_add_modal.clone();
        Callback::from(move |_: MouseEvent| show_add_modal.set(true))
    };
    let close_add = {
        let show_add_modal = show_add_modal.clone();
        Callback::from(move |_: ()| show_add_modal.set(false))
    };
    let open_remove = {
        let show_remove_modal = show_remove_modal.clone();
        Callback::from(move |_: MouseEvent| show_remove_modal.set(true))
    };
    let close_remove = {
        let show_remove_modal = show_remove_modal.clone();
        Callback::from(move |_: ()| show_remove_modal.set(false))
    };

    let list = if employees.loading && employees.state.is_empty() {
        html! { <div class="text-center text-gray-500">{"Loading employees..."}</div> }
    } else if employees.state.is_empty() {
        html! { <div class="text-center text-gray-500">{"No employees yet."}</div> }
    } else {
        employees
            .state
            .employees()
            .iter()
            .map(|employee| html! {
                <EmployeeCard
                    key={employee.id.to_string()}
                    employee={employee.clone()}
                    on_select={on_select.clone()}
                />
            })
            .collect::<Html>()
    };

    html! {
        <div class="min-h-screen flex flex-col justify-between bg-white max-w-md mx-auto text-sm px-4 pt-6 pb-20">
            <Header title="Employee Register">
                <span class="material-icons text-gray-600 cursor-pointer">{"logout"}</span>
            </Header>

            <div class="space-y-4 mb-6">
                {list}
            </div>

            <div class="flex flex-col gap-3">
                <button
                    onclick={open_add}
                    class="bg-indigo-600 text-white py-2 rounded-full font-medium hover:bg-indigo-700"
                >
                    {"+ Add New Employee"}
                </button>
                <button
                    onclick={open_remove}
                    class="bg-rose-500 text-white py-2 rounded-full font-medium hover:bg-rose-600"
                >
                    {"🗑 Remove Employee"}
                </button>
            </div>

            <BottomNav active="Employees" />

            <AddEmployeeModal
                is_open={*show_add_modal}
                api_client={api_client.clone()}
                on_created={employees.actions.employee_added.clone()}
                on_close={close_add}
            />
            <RemoveEmployeeModal
                is_open={*show_remove_modal}
                api_client={api_client}
                employees={employees.state.employees().to_vec()}
                on_removed={employees.actions.employee_removed.clone()}
                on_close={close_remove}
            />
        </div>
    }
}
