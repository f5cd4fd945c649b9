use shared::EmployeeId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{EmployeeDetailPage, EmployeeListPage, NotFoundPage};

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    EmployeeList,
    #[at("/employee/:id")]
    EmployeeDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn employee(id: &EmployeeId) -> Self {
        Route::EmployeeDetail { id: id.to_string() }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::EmployeeList => html! { <EmployeeListPage /> },
        Route::EmployeeDetail { id } => match EmployeeId::parse(&id) {
            Ok(id) => html! { <EmployeeDetailPage {id} /> },
            Err(_) => html! { <NotFoundPage /> },
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_path_uses_employee_id() {
        let id = EmployeeId::parse("1712345678901").unwrap();
        assert_eq!(Route::employee(&id).to_path(), "/employee/1712345678901");
        assert_eq!(Route::EmployeeList.to_path(), "/");
    }

    #[test]
    fn test_recognize_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::EmployeeList));
        assert_eq!(
            Route::recognize("/employee/42"),
            Some(Route::EmployeeDetail { id: "42".to_string() })
        );
    }
}
