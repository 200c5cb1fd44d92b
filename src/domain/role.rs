//! Employee role ladder.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{ROLE_DIRECTOR, ROLE_EMPLOYEE, ROLE_LEADER};

/// Employee roles, ordered by seniority: `Employee < Leader < Director`.
///
/// The derived `Ord` follows declaration order and is what RBAC compares.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Leader,
    Director,
}

impl Role {
    /// All roles from least to most senior
    pub const ALL: [Role; 3] = [Role::Employee, Role::Leader, Role::Director];

    /// Position on the seniority ladder
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Parse a role name (case-insensitive) or ordinal digit.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|role| {
            value.eq_ignore_ascii_case(role.as_str()) || value == role.ordinal().to_string()
        })
    }

    /// Parse a role claim, falling back to the lowest privilege when the
    /// claim is absent or unrecognised.
    pub fn parse_or_lowest(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employee => ROLE_EMPLOYEE,
            Role::Leader => ROLE_LEADER,
            Role::Director => ROLE_DIRECTOR,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
