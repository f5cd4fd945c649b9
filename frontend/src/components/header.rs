use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    /// Icons and avatar shown on the right
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="flex justify-between items-center mb-5">
            <h1 class="text-xl font-semibold">{props.title.clone()}</h1>
            <div class="flex items-center gap-3">
                {props.children.clone()}
            </div>
        </header>
    }
}
