//! Dashboard home page.

use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use personnel_app::ports::EmployeeRepository;

use crate::error::ApiError;
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    refresh_seconds: Option<u32>,
    employee_count: usize,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        super::render(&self)
    }
}

/// `GET /`
pub async fn index<R>(State(state): State<AppState<R>>) -> Result<HomeTemplate, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let employees = state.employee_service.list_employees().await?;

    Ok(HomeTemplate {
        refresh_seconds: Some(30),
        employee_count: employees.len(),
    })
}
