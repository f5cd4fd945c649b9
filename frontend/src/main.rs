use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod hooks;
mod pages;
mod route;
mod services;
mod state;

use config::AppConfig;
use route::{switch, Route};
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| {
        let client = ApiClient::new(&AppConfig::from_env());
        Logger::info_with_component("app", &format!("Using employee store at {}", client.base_url()));
        client
    });

    html! {
        <ContextProvider<ApiClient> context={(*api_client).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiClient>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
