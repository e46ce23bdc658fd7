//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod employees;

use axum::Router;
use axum::routing::{get, post};

use personnel_app::ports::EmployeeRepository;

use crate::state::AppState;

/// Build the employee API sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/employee", post(employees::create::<R>))
        .route(
            "/employee/{id}",
            get(employees::get::<R>)
                .put(employees::update::<R>)
                .delete(employees::delete::<R>),
        )
        .route("/employees", get(employees::list::<R>))
}
