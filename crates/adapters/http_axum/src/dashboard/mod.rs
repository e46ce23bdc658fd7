//! Server-side rendered HTML front end for staff (no JavaScript).
//!
//! Pages read and write through the same [`EmployeeService`] as the JSON
//! API, so the front end and the API always agree on the data. Forms use
//! POST + redirect (PRG) to avoid double-submission.
//!
//! [`EmployeeService`]: personnel_app::services::employee_service::EmployeeService

#[allow(clippy::missing_errors_doc)]
pub mod employees;
#[allow(clippy::missing_errors_doc)]
pub mod home;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};

use personnel_app::ports::EmployeeRepository;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<R>))
        .route(
            "/dashboard/employees",
            get(employees::list::<R>).post(employees::create::<R>),
        )
        .route(
            "/dashboard/employees/{id}",
            get(employees::detail::<R>).post(employees::update::<R>),
        )
        .route(
            "/dashboard/employees/{id}/delete",
            post(employees::delete::<R>),
        )
}

/// Render a page, answering `500` if the template fails.
fn render(template: &impl Template) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
