use shared::EmployeeId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Avatar, EntryCard, Header};
use crate::hooks::use_employee_detail;
use crate::route::Route;
use crate::services::api::ApiClient;
use crate::services::format::format_rupees;

#[derive(Properties, PartialEq)]
pub struct EmployeeDetailPageProps {
    pub id: EmployeeId,
}

#[function_component(EmployeeDetailPage)]
pub fn employee_detail_page(props: &EmployeeDetailPageProps) -> Html {
    let api_client = use_context::<ApiClient>().unwrap_or_default();
    let detail = use_employee_detail(&api_client, &props.id);
    let state = &detail.state;
    let actions = &detail.actions;

    let title = match &state.employee {
        Some(employee) => format!("{}'s Entries", employee.name),
        None if state.loading => "Loading...".to_string(),
        None => "Employee not found".to_string(),
    };

    let avatar = match &state.employee {
        Some(employee) => html! { <Avatar employee={employee.clone()} size="w-8 h-8" /> },
        None => html! {},
    };

    let on_add_entry = {
        let add_entry = actions.add_entry.clone();
        Callback::from(move |_: MouseEvent| add_entry.emit(()))
    };
    let on_save = {
        let save = actions.save.clone();
        Callback::from(move |_: MouseEvent| save.emit(()))
    };
    let on_download = {
        let download = actions.download.clone();
        Callback::from(move |_: MouseEvent| download.emit(()))
    };

    html! {
        <div class="min-h-screen bg-white px-4 py-6 text-[15px] max-w-md mx-auto font-sans">
            <Header title="Employee Register">
                <Link<Route> to={Route::EmployeeList} classes="material-icons text-gray-600">
                    {"arrow_back"}
                </Link<Route>>
                <span class="material-icons text-gray-600">{"notifications"}</span>
                {avatar}
            </Header>

            <div class="border border-dashed rounded-md text-center py-2 font-medium text-gray-700 mb-4">
                {title}
            </div>

            {for state.editor.rows().iter().enumerate().map(|(index, row)| html! {
                <EntryCard
                    key={index}
                    {index}
                    row={row.clone()}
                    on_toggle={actions.toggle_row.clone()}
                    on_edit={actions.edit_field.clone()}
                />
            })}

            <div class="border border-dashed rounded-md p-3 font-medium flex justify-between mb-4">
                <span>{"Total Amount:"}</span>
                <span class="text-indigo-600">{format_rupees(state.editor.total())}</span>
            </div>

            <div class="flex flex-col gap-3">
                <button
                    onclick={on_add_entry}
                    class="bg-indigo-600 text-white py-2 rounded font-medium hover:bg-indigo-700"
                    disabled={!state.editor.is_loaded()}
                >
                    {"+ Add New Entry"}
                </button>
                <button
                    onclick={on_save}
                    class="bg-green-600 text-white py-2 rounded font-medium hover:bg-green-700"
                    disabled={!state.editor.is_loaded() || state.saving}
                >
                    {if state.saving { "Saving..." } else { "💾 Save Entries" }}
                </button>
                <button
                    onclick={on_download}
                    class="bg-rose-500 text-white py-2 rounded font-medium hover:bg-rose-600"
                    disabled={state.employee.is_none() || state.downloading}
                >
                    {if state.downloading { "Preparing PDF..." } else { "⬇ Download PDF Summary" }}
                </button>
            </div>
        </div>
    }
}
