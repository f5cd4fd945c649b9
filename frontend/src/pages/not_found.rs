use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen bg-white max-w-md mx-auto px-4 py-6 text-center">
            <h1 class="text-lg font-semibold mb-4">{"Page not found"}</h1>
            <Link<Route> to={Route::EmployeeList} classes="text-indigo-600">
                {"Back to employees"}
            </Link<Route>>
        </div>
    }
}
