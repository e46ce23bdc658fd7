//! Sample employees for demos and manual testing.

use crate::error::StorageError;
use crate::pool::Database;

/// `(first_name, last_name, mail, password)`
const SAMPLE_EMPLOYEES: [(&str, &str, &str, &str); 3] = [
    ("Laurent", "GIRARD", "laurentgirard@mail.com", "laurent"),
    ("Sophie", "FONCEK", "sophiefoncek@mail.com", "sophie"),
    ("Agathe", "FEELING", "agathefeeling@mail.com", "agathe"),
];

const COUNT: &str = "SELECT COUNT(*) FROM employees";
const INSERT: &str = "INSERT INTO employees (first_name, last_name, mail, password) VALUES (?, ?, ?, ?)";

impl Database {
    /// Insert the sample employees when the table is empty.
    ///
    /// Returns how many rows were inserted: the full sample set, or zero if
    /// the table already held data.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if a query fails. Inserts run in a single
    /// transaction, so a failure leaves the table untouched.
    pub async fn seed(&self) -> Result<usize, StorageError> {
        let mut tx = self.pool().begin().await?;

        let (count,): (i64,) = sqlx::query_as(COUNT).fetch_one(&mut *tx).await?;
        if count > 0 {
            tracing::debug!(count, "employees table not empty, skipping seed");
            return Ok(0);
        }

        for (first_name, last_name, mail, password) in SAMPLE_EMPLOYEES {
            sqlx::query(INSERT)
                .bind(first_name)
                .bind(last_name)
                .bind(mail)
                .bind(password)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        tracing::info!(count = SAMPLE_EMPLOYEES.len(), "seeded sample employees");
        Ok(SAMPLE_EMPLOYEES.len())
    }
}
