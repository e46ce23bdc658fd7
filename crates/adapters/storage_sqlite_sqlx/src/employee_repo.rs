//! `SQLite` implementation of [`EmployeeRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use personnel_app::ports::EmployeeRepository;
use personnel_domain::employee::Employee;
use personnel_domain::error::{NotFoundError, PersonnelError};
use personnel_domain::id::EmployeeId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Employee);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Employee> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;

        Ok(Self(Employee {
            id: Some(EmployeeId::new(id)),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            mail: row.try_get("mail")?,
            password: row.try_get("password")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO employees (first_name, last_name, mail, password)
    VALUES (?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM employees WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM employees ORDER BY id";

const UPDATE: &str = r"
    UPDATE employees
    SET first_name = ?, last_name = ?, mail = ?, password = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM employees WHERE id = ?";

fn not_found(id: EmployeeId) -> PersonnelError {
    NotFoundError {
        entity: "Employee",
        id: id.to_string(),
    }
    .into()
}

/// `SQLite`-backed employee repository.
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert(&self, mut employee: Employee) -> Result<Employee, PersonnelError> {
        let result = sqlx::query(INSERT)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.mail)
            .bind(&employee.password)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        employee.id = Some(EmployeeId::new(result.last_insert_rowid()));
        Ok(employee)
    }

    async fn update(&self, id: EmployeeId, employee: Employee) -> Result<Employee, PersonnelError> {
        let result = sqlx::query(UPDATE)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.mail)
            .bind(&employee.password)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(employee)
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee, PersonnelError> {
        match employee.id {
            Some(id) => self.update(id, employee).await,
            None => self.insert(employee).await,
        }
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, PersonnelError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, PersonnelError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), PersonnelError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}
