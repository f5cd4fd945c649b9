use yew::prelude::*;

const ITEMS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("groups", "Employees"),
    ("bar_chart", "Analytics"),
    ("settings", "Settings"),
];

#[derive(Properties, PartialEq)]
pub struct BottomNavProps {
    /// Label of the highlighted item
    pub active: AttrValue,
}

#[function_component(BottomNav)]
pub fn bottom_nav(props: &BottomNavProps) -> Html {
    html! {
        <nav class="fixed bottom-0 left-0 right-0 max-w-md mx-auto border-t bg-white flex justify-around py-2 text-gray-500 text-xs">
            {for ITEMS.iter().map(|(icon, label)| {
                let tone = (props.active.as_str() == *label).then_some("text-blue-600");
                html! {
                    <div key={*label} class={classes!("flex", "flex-col", "items-center", tone)}>
                        <span class="material-icons text-lg">{*icon}</span>
                        <span>{*label}</span>
                    </div>
                }
            })}
        </nav>
    }
}
