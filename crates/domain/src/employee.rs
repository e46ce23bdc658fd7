//! The employee record, the only entity managed by the backend.
//!
//! Every text attribute is optional: the store keeps whatever the caller
//! sent, including `null`. Updates go through [`EmployeePatch`], which only
//! ever overwrites fields that are present.

use serde::{Deserialize, Serialize};

use crate::id::EmployeeId;

/// A person on the payroll.
///
/// `id` is `None` until the record has been saved once; the store assigns
/// it and it never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mail: Option<String>,
    pub password: Option<String>,
}

impl Employee {
    /// Create a builder for constructing an [`Employee`].
    #[must_use]
    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::default()
    }

    /// Whether the store has already assigned an identifier.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Merge `patch` into this record.
    ///
    /// Fields set in the patch replace the current value, fields left as
    /// `None` are kept. A patch can never clear a field.
    pub fn apply(&mut self, patch: EmployeePatch) {
        let EmployeePatch {
            first_name,
            last_name,
            mail,
            password,
        } = patch;

        if let Some(first_name) = first_name {
            self.first_name = Some(first_name);
        }
        if let Some(last_name) = last_name {
            self.last_name = Some(last_name);
        }
        if let Some(mail) = mail {
            self.mail = Some(mail);
        }
        if let Some(password) = password {
            self.password = Some(password);
        }
    }
}

/// Partial update for an [`Employee`].
///
/// `null` and absent fields both mean "leave unchanged". Any `id` in the
/// request body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mail: Option<String>,
    pub password: Option<String>,
}

impl EmployeePatch {
    /// `true` when the patch carries no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.mail.is_none()
            && self.password.is_none()
    }
}

/// Step-by-step builder for [`Employee`].
#[derive(Debug, Default)]
pub struct EmployeeBuilder {
    id: Option<EmployeeId>,
    first_name: Option<String>,
    last_name: Option<String>,
    mail: Option<String>,
    password: Option<String>,
}

impl EmployeeBuilder {
    #[must_use]
    pub fn id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn mail(mut self, mail: impl Into<String>) -> Self {
        self.mail = Some(mail.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Consume the builder and return an [`Employee`].
    #[must_use]
    pub fn build(self) -> Employee {
        Employee {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            mail: self.mail,
            password: self.password,
        }
    }
}
