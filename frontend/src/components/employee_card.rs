use shared::{Employee, EmployeeId};
use yew::prelude::*;

use super::avatar::Avatar;
use crate::services::format::format_dollars;

#[derive(Properties, PartialEq)]
pub struct EmployeeCardProps {
    pub employee: Employee,
    pub on_select: Callback<EmployeeId>,
}

#[function_component(EmployeeCard)]
pub fn employee_card(props: &EmployeeCardProps) -> Html {
    let onclick = {
        let id = props.employee.id.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };

    let employee = &props.employee;
    html! {
        <div
            class="cursor-pointer flex justify-between items-center bg-white border rounded-lg px-4 py-3 shadow-sm"
            {onclick}
        >
            <div class="flex items-center gap-3">
                <Avatar employee={employee.clone()} />
                <div>
                    <div class="font-medium">{&employee.name}</div>
                    <div class="text-gray-500 text-xs">{&employee.title}</div>
                    <div class="text-sm mt-1">
                        <span class="text-gray-500">{"Earned: "}</span>
                        <span class="text-rose-600 font-semibold">{format_dollars(employee.earned)}</span>
                    </div>
                </div>
            </div>
            <div class="text-pink-500 font-bold text-lg">{"›"}</div>
        </div>
    }
}
