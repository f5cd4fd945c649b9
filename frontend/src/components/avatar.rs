use shared::Employee;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub employee: Employee,
    /// Tailwind size classes
    #[prop_or(AttrValue::Static("w-10 h-10"))]
    pub size: AttrValue,
}

/// Employee picture, or coloured initials when there is none
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let employee = &props.employee;
    match &employee.image {
        Some(image) => html! {
            <img
                src={image.clone()}
                alt={employee.name.clone()}
                class={classes!("rounded-full", props.size.to_string())}
            />
        },
        None => html! {
            <div class={classes!(
                "rounded-full",
                "flex",
                "items-center",
                "justify-center",
                "font-semibold",
                props.size.to_string(),
                employee.avatar_color().to_string(),
            )}>
                {employee.avatar_initials()}
            </div>
        },
    }
}
