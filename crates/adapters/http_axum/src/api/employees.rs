//! JSON REST handlers for employees.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use personnel_app::ports::EmployeeRepository;
use personnel_domain::employee::{Employee, EmployeePatch};
use personnel_domain::error::{PersonnelError, ValidationError};
use personnel_domain::id::EmployeeId;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Employee>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Employee>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Employee>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

pub(crate) fn parse_id(raw: String) -> Result<EmployeeId, ApiError> {
    EmployeeId::from_str(&raw)
        .map_err(|_| ApiError::from(PersonnelError::from(ValidationError::InvalidId(raw))))
}

/// `GET /employees`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let employees = state.employee_service.list_employees().await?;
    Ok(ListResponse::Ok(Json(employees)))
}

/// `GET /employee/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let employee_id = parse_id(id)?;
    let employee = state.employee_service.get_employee(employee_id).await?;
    Ok(GetResponse::Ok(Json(employee)))
}

/// `POST /employee`
///
/// The payload's `id`, if any, is discarded.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<Employee>,
) -> Result<CreateResponse, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let created = state.employee_service.create_employee(req).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /employee/:id`
///
/// Merges the non-null fields of the body into the stored employee.
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(patch): Json<EmployeePatch>,
) -> Result<GetResponse, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let employee_id = parse_id(id)?;
    let updated = state
        .employee_service
        .update_employee(employee_id, patch)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /employee/:id`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let employee_id = parse_id(id)?;
    state.employee_service.delete_employee(employee_id).await?;
    Ok(DeleteResponse::NoContent)
}
