//! Storage port — repository trait for employee persistence.

use std::future::Future;

use personnel_domain::employee::Employee;
use personnel_domain::error::PersonnelError;
use personnel_domain::id::EmployeeId;

/// Repository for persisting and querying [`Employee`]s.
pub trait EmployeeRepository {
    /// Insert the employee when it has no id yet, otherwise overwrite every
    /// field of the row with the same id.
    ///
    /// Returns the stored record, carrying the id assigned on insert.
    fn save(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, PersonnelError>> + Send;

    /// Get an employee by id, `None` when no row matches.
    fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, PersonnelError>> + Send;

    /// Get every stored employee.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Employee>, PersonnelError>> + Send;

    /// Delete an employee by id.
    ///
    /// Fails with [`PersonnelError::NotFound`] when no row matches, so callers
    /// can tell a missing record from a successful delete.
    fn delete_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<(), PersonnelError>> + Send;
}
