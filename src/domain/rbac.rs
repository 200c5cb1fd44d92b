//! Role-based access control over the seniority ladder.
//!
//! A caller may act on anyone at or below their own rank and never on, or
//! towards, a rank above it.

use uuid::Uuid;

use super::Role;

/// The verified principal performing an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: Uuid,
    pub role: Role,
}

impl Caller {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }

    /// True when the caller is the employee identified by `employee_id`.
    pub fn owns(&self, employee_id: Uuid) -> bool {
        self.id == employee_id
    }
}

/// May `current` create an employee with, or assign, the `target` role?
pub fn can_create(current: Role, target: Role) -> bool {
    current >= target
}

/// May `current` modify or delete an employee whose existing role is `target`?
pub fn can_edit(current: Role, target: Role) -> bool {
    current >= target
}
