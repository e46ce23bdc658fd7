//! Employee service — use-cases for managing employees.

use personnel_domain::employee::{Employee, EmployeePatch};
use personnel_domain::error::{NotFoundError, PersonnelError};
use personnel_domain::id::EmployeeId;

use crate::ports::EmployeeRepository;

const ENTITY: &str = "Employee";

fn not_found(id: EmployeeId) -> PersonnelError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

/// Application service for employee CRUD operations.
pub struct EmployeeService<R> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new employee. Any id carried by the input is discarded so the
    /// repository always assigns a fresh one.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, employee))]
    pub async fn create_employee(&self, mut employee: Employee) -> Result<Employee, PersonnelError> {
        if employee.is_persisted() {
            tracing::debug!("discarding client-supplied id");
            employee.id = None;
        }
        let created = self.repo.save(employee).await?;
        tracing::debug!(id = ?created.id, "employee created");
        Ok(created)
    }

    /// Look up an employee by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PersonnelError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_employee(&self, id: EmployeeId) -> Result<Employee, PersonnelError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all employees.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, PersonnelError> {
        self.repo.find_all().await
    }

    /// Merge `patch` into the stored employee and persist the result.
    ///
    /// Only fields present in the patch change; `None` never clears a value.
    /// An empty patch returns the stored employee without writing.
    ///
    /// # Errors
    ///
    /// Returns [`PersonnelError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Employee, PersonnelError> {
        let mut employee = self.get_employee(id).await?;
        if patch.is_empty() {
            tracing::debug!("empty patch, skipping write");
            return Ok(employee);
        }
        employee.apply(patch);
        self.repo.save(employee).await
    }

    /// Delete an employee by id.
    ///
    /// # Errors
    ///
    /// Returns [`PersonnelError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), PersonnelError> {
        self.repo.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct InMemoryEmployeeRepo {
        store: Mutex<(i64, BTreeMap<EmployeeId, Employee>)>,
        saves: AtomicUsize,
    }

    impl EmployeeRepository for InMemoryEmployeeRepo {
        fn save(
            &self,
            mut employee: Employee,
        ) -> impl Future<Output = Result<Employee, PersonnelError>> + Send {
            self.saves.fetch_add(1, Ordering::SeqCst);
            let mut guard = self.store.lock().unwrap();
            let (last_id, rows) = &mut *guard;
            let id = employee.id.unwrap_or_else(|| {
                *last_id += 1;
                EmployeeId::new(*last_id)
            });
            employee.id = Some(id);
            rows.insert(id, employee.clone());
            async { Ok(employee) }
        }

        fn find_by_id(
            &self,
            id: EmployeeId,
        ) -> impl Future<Output = Result<Option<Employee>, PersonnelError>> + Send {
            let guard = self.store.lock().unwrap();
            let result = guard.1.get(&id).cloned();
            async { Ok(result) }
        }

        fn find_all(&self) -> impl Future<Output = Result<Vec<Employee>, PersonnelError>> + Send {
            let guard = self.store.lock().unwrap();
            let result: Vec<Employee> = guard.1.values().cloned().collect();
            async { Ok(result) }
        }

        fn delete_by_id(
            &self,
            id: EmployeeId,
        ) -> impl Future<Output = Result<(), PersonnelError>> + Send {
            let mut guard = self.store.lock().unwrap();
            let removed = guard.1.remove(&id);
            async move {
                match removed {
                    Some(_) => Ok(()),
                    None => Err(not_found(id)),
                }
            }
        }
    }

    fn make_service() -> EmployeeService<InMemoryEmployeeRepo> {
        EmployeeService::new(InMemoryEmployeeRepo::default())
    }

    fn agathe() -> Employee {
        Employee::builder()
            .first_name("Agathe")
            .last_name("FEELING")
            .mail("agathefeeling@mail.com")
            .password("agathe")
            .build()
    }

    #[tokio::test]
    async fn should_assign_id_and_keep_fields_when_creating() {
        let svc = make_service();

        let created = svc.create_employee(agathe()).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.first_name.as_deref(), Some("Agathe"));
        assert_eq!(created.last_name.as_deref(), Some("FEELING"));
        assert_eq!(created.mail.as_deref(), Some("agathefeeling@mail.com"));
        assert_eq!(created.password.as_deref(), Some("agathe"));
    }

    #[tokio::test]
    async fn should_ignore_client_supplied_id_when_creating() {
        let svc = make_service();
        let first = svc.create_employee(agathe()).await.unwrap();

        let mut payload = agathe();
        payload.id = first.id;
        let second = svc.create_employee(payload).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(svc.list_employees().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_created_employee_when_fetching_by_id() {
        let svc = make_service();
        let created = svc.create_employee(agathe()).await.unwrap();

        let fetched = svc.get_employee(created.id.unwrap()).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_not_found_when_employee_missing() {
        let svc = make_service();
        let result = svc.get_employee(EmployeeId::new(999)).await;
        assert!(matches!(result, Err(PersonnelError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_employees() {
        let svc = make_service();
        assert!(svc.list_employees().await.unwrap().is_empty());

        svc.create_employee(agathe()).await.unwrap();
        svc.create_employee(Employee::builder().first_name("Sophie").build())
            .await
            .unwrap();

        let all = svc.list_employees().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_merge_only_provided_fields_when_updating() {
        let svc = make_service();
        let id = svc.create_employee(agathe()).await.unwrap().id.unwrap();

        let updated = svc
            .update_employee(
                id,
                EmployeePatch {
                    first_name: Some("X".to_string()),
                    ..EmployeePatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.first_name.as_deref(), Some("X"));
        assert_eq!(updated.last_name.as_deref(), Some("FEELING"));
        assert_eq!(updated.mail.as_deref(), Some("agathefeeling@mail.com"));
        assert_eq!(updated.password.as_deref(), Some("agathe"));

        let stored = svc.get_employee(id).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn should_not_write_when_patch_is_empty() {
        let svc = make_service();
        let created = svc.create_employee(agathe()).await.unwrap();
        let id = created.id.unwrap();
        assert_eq!(svc.repo.saves.load(Ordering::SeqCst), 1);

        let unchanged = svc
            .update_employee(id, EmployeePatch::default())
            .await
            .unwrap();

        assert_eq!(unchanged, created);
        assert_eq!(svc.repo.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_employee() {
        let svc = make_service();
        let result = svc
            .update_employee(EmployeeId::new(999), EmployeePatch::default())
            .await;
        assert!(matches!(result, Err(PersonnelError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_employee() {
        let svc = make_service();
        let id = svc.create_employee(agathe()).await.unwrap().id.unwrap();

        svc.delete_employee(id).await.unwrap();

        let result = svc.get_employee(id).await;
        assert!(matches!(result, Err(PersonnelError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_twice() {
        let svc = make_service();
        let id = svc.create_employee(agathe()).await.unwrap().id.unwrap();

        svc.delete_employee(id).await.unwrap();
        let second = svc.delete_employee(id).await;
        assert!(matches!(second, Err(PersonnelError::NotFound(_))));
    }
}
