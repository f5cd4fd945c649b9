use shared::format_entry_date;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::format::{format_deposit, format_rupees};
use crate::state::{EditableEntry, EntryField};

#[derive(Properties, PartialEq)]
pub struct EntryCardProps {
    pub index: usize,
    pub row: EditableEntry,
    pub on_toggle: Callback<usize>,
    pub on_edit: Callback<(usize, EntryField, String)>,
}

fn input_handler(index: usize, field: EntryField, on_edit: &Callback<(usize, EntryField, String)>) -> Callback<InputEvent> {
    let on_edit = on_edit.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_edit.emit((index, field, input.value()));
    })
}

/// One work entry, shown either as text or as inline form controls
#[function_component(EntryCard)]
pub fn entry_card(props: &EntryCardProps) -> Html {
    let index = props.index;
    let entry = &props.row.entry;
    let editing = props.row.mode.is_editing();
    let amount = entry.amount();

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(index))
    };

    let on_work_input = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((index, EntryField::Work, textarea.value()));
        })
    };

    let date = if editing {
        html! {
            <input
                type="date"
                class="w-full text-sm px-2 py-1 border rounded"
                value={entry.date.clone()}
                oninput={input_handler(index, EntryField::Date, &props.on_edit)}
            />
        }
    } else {
        html! { <span class="text-gray-600">{format_entry_date(&entry.date)}</span> }
    };

    let work = if editing {
        html! {
            <textarea
                rows="2"
                class="w-full border rounded p-1 text-sm"
                value={entry.work.clone()}
                oninput={on_work_input}
            />
        }
    } else {
        html! { <p>{&entry.work}</p> }
    };

    let rate = if editing {
        html! {
            <input
                type="number"
                class="w-full border rounded px-2 py-1"
                value={entry.rate.to_string()}
                oninput={input_handler(index, EntryField::Rate, &props.on_edit)}
            />
        }
    } else {
        html! { <span>{format_rupees(entry.rate)}</span> }
    };

    let units = if editing {
        html! {
            <input
                type="number"
                class="w-full border rounded px-2 py-1"
                value={entry.units.to_string()}
                oninput={input_handler(index, EntryField::Units, &props.on_edit)}
            />
        }
    } else {
        html! { <span>{entry.units.to_string()}</span> }
    };

    let deposited = if editing {
        html! {
            <input
                type="number"
                class="w-1/3 border rounded px-2 py-1 text-right"
                value={entry.deposited.to_string()}
                oninput={input_handler(index, EntryField::Deposited, &props.on_edit)}
            />
        }
    } else {
        let tone = if entry.deposited >= 0.0 { "text-green-600" } else { "text-red-500" };
        html! {
            <span class={classes!("font-medium", tone)}>{format_deposit(entry.deposited)}</span>
        }
    };

    html! {
        <div class="border border-dashed rounded-md p-3 mb-4 text-gray-800">
            <div class="flex justify-between items-center text-sm mb-1">
                {date}
                <span class="material-icons text-gray-500 cursor-pointer" onclick={on_toggle}>
                    {if editing { "check" } else { "edit" }}
                </span>
            </div>

            <div class="mb-2">
                <span class="text-gray-500 block font-medium mb-1">{"Work Performed"}</span>
                {work}
            </div>

            <div class="flex justify-between text-sm mb-1 gap-3">
                <div class="flex-1">
                    <span class="block text-gray-500">{"Rate / Unit"}</span>
                    {rate}
                </div>
                <div class="flex-1">
                    <span class="block text-gray-500">{"Units"}</span>
                    {units}
                </div>
            </div>

            <div class="flex justify-between text-sm mb-1">
                <span class="text-gray-500">{"Calculated Amount"}</span>
                <span class="text-indigo-600 font-medium">{format_rupees(amount)}</span>
            </div>

            <div class="flex justify-between text-sm">
                <span class="text-gray-500">{"Deposited / Due"}</span>
                {deposited}
            </div>
        </div>
    }
}
