//! Phone value records owned by an employee.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::error::DomainResult;
use super::guard;
use crate::config::{PHONE_TYPE_HOME, PHONE_TYPE_MOBILE, PHONE_TYPE_WORK};

/// Kind of phone line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    #[default]
    Mobile,
    Home,
    Work,
}

impl PhoneType {
    pub fn as_str(self) -> &'static str {
        match self {
            PhoneType::Mobile => PHONE_TYPE_MOBILE,
            PhoneType::Home => PHONE_TYPE_HOME,
            PhoneType::Work => PHONE_TYPE_WORK,
        }
    }
}

impl From<&str> for PhoneType {
    fn from(s: &str) -> Self {
        match s {
            PHONE_TYPE_HOME => PhoneType::Home,
            PHONE_TYPE_WORK => PhoneType::Work,
            _ => PhoneType::Mobile,
        }
    }
}

impl std::fmt::Display for PhoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A phone attached to exactly one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    id: Uuid,
    number: String,
    phone_type: PhoneType,
}

impl Phone {
    /// Create a phone with a fresh id. The number must not be blank.
    pub fn new(number: &str, phone_type: PhoneType) -> DomainResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            number: guard::required(number, "phone number")?,
            phone_type,
        })
    }

    /// Rebuild a stored phone without re-running validation.
    pub fn from_parts(id: Uuid, number: String, phone_type: PhoneType) -> Self {
        Self {
            id,
            number,
            phone_type,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn phone_type(&self) -> PhoneType {
        self.phone_type
    }
}

/// Phone supplied in create and update requests
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PhoneInput {
    /// Phone number
    #[validate(length(max = 20, message = "Phone number must be at most 20 characters"))]
    #[schema(example = "+55 11 99999-9999")]
    pub number: String,
    /// Phone type
    #[serde(rename = "type", default)]
    #[schema(example = "mobile")]
    pub phone_type: PhoneType,
}

impl PhoneInput {
    /// Validate into a domain phone
    pub fn into_phone(self) -> DomainResult<Phone> {
        Phone::new(&self.number, self.phone_type)
    }
}

/// Phone as exposed to clients
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhoneResponse {
    #[schema(example = "+55 11 99999-9999")]
    pub number: String,
    #[serde(rename = "type")]
    #[schema(example = "mobile")]
    pub phone_type: PhoneType,
}

impl From<&Phone> for PhoneResponse {
    fn from(phone: &Phone) -> Self {
        Self {
            number: phone.number.clone(),
            phone_type: phone.phone_type,
        }
    }
}
