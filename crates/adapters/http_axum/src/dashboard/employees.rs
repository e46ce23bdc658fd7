//! Dashboard pages for employees.

use askama::Template;
use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use personnel_app::ports::EmployeeRepository;
use personnel_domain::employee::{Employee, EmployeePatch};

use crate::api::employees::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

const LIST_PATH: &str = "/dashboard/employees";

/// One employee as shown in a page. The password never leaves the server.
pub struct EmployeeRow {
    id: String,
    first_name: String,
    last_name: String,
    mail: String,
}

impl From<Employee> for EmployeeRow {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.map(|id| id.to_string()).unwrap_or_default(),
            first_name: employee.first_name.unwrap_or_default(),
            last_name: employee.last_name.unwrap_or_default(),
            mail: employee.mail.unwrap_or_default(),
        }
    }
}

/// Employee list page template, with the "new employee" form.
#[derive(Template)]
#[template(path = "employee_list.html")]
pub struct EmployeeListTemplate {
    refresh_seconds: Option<u32>,
    employees: Vec<EmployeeRow>,
}

impl IntoResponse for EmployeeListTemplate {
    fn into_response(self) -> Response {
        super::render(&self)
    }
}

/// Employee detail page template, with the edit and delete forms.
#[derive(Template)]
#[template(path = "employee_detail.html")]
pub struct EmployeeDetailTemplate {
    refresh_seconds: Option<u32>,
    employee: EmployeeRow,
}

impl IntoResponse for EmployeeDetailTemplate {
    fn into_response(self) -> Response {
        super::render(&self)
    }
}

/// Response from the form handlers (PRG pattern).
pub enum FormResponse {
    Redirect(Redirect),
}

impl IntoResponse for FormResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
        }
    }
}

/// Fields posted by the create and edit forms.
///
/// Browsers send every input, so a blank input stands for "no value".
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mail: Option<String>,
    pub password: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl From<EmployeeForm> for EmployeePatch {
    fn from(form: EmployeeForm) -> Self {
        Self {
            first_name: non_blank(form.first_name),
            last_name: non_blank(form.last_name),
            mail: non_blank(form.mail),
            password: non_blank(form.password),
        }
    }
}

impl From<EmployeeForm> for Employee {
    fn from(form: EmployeeForm) -> Self {
        let mut employee = Employee::default();
        employee.apply(form.into());
        employee
    }
}

/// `GET /dashboard/employees`
pub async fn list<R>(
    State(state): State<AppState<R>>,
) -> Result<EmployeeListTemplate, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let employees = state.employee_service.list_employees().await?;

    Ok(EmployeeListTemplate {
        refresh_seconds: Some(10),
        employees: employees.into_iter().map(EmployeeRow::from).collect(),
    })
}

/// `GET /dashboard/employees/:id`
pub async fn detail<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<EmployeeDetailTemplate, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let employee_id = parse_id(id)?;
    let employee = state.employee_service.get_employee(employee_id).await?;

    Ok(EmployeeDetailTemplate {
        refresh_seconds: None,
        employee: employee.into(),
    })
}

/// `POST /dashboard/employees`, then redirect to the new employee's page.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Form(form): Form<EmployeeForm>,
) -> Result<FormResponse, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let created = state.employee_service.create_employee(form.into()).await?;
    let target = created
        .id
        .map_or_else(|| LIST_PATH.to_string(), |id| format!("{LIST_PATH}/{id}"));

    Ok(FormResponse::Redirect(Redirect::to(&target)))
}

/// `POST /dashboard/employees/:id`, merging the filled-in inputs.
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Form(form): Form<EmployeeForm>,
) -> Result<FormResponse, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let employee_id = parse_id(id)?;
    state
        .employee_service
        .update_employee(employee_id, form.into())
        .await?;

    Ok(FormResponse::Redirect(Redirect::to(&format!(
        "{LIST_PATH}/{employee_id}"
    ))))
}

/// `POST /dashboard/employees/:id/delete`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<FormResponse, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let employee_id = parse_id(id)?;
    state.employee_service.delete_employee(employee_id).await?;

    Ok(FormResponse::Redirect(Redirect::to(LIST_PATH)))
}
