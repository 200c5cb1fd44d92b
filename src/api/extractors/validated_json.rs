//! JSON body extractor that runs `validator` rules after decoding.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::errors::AppError;

/// Decoded and validated JSON body; malformed or invalid bodies become 400s.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(validation_messages(&e).join(", ")))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten field messages, descending into nested phone lists
fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(errs) => errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect(),
            ValidationErrorsKind::Struct(inner) => validation_messages(inner),
            ValidationErrorsKind::List(items) => {
                items.values().flat_map(|inner| validation_messages(inner)).collect()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateEmployee, PhoneInput, PhoneType, Role};
    use chrono::NaiveDate;

    #[test]
    fn nested_phone_errors_are_reported() {
        let input = CreateEmployee {
            first_name: "Ana".into(),
            last_name: "Souza".into(),
            email: "ana@example.com".into(),
            doc_number: "1".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            role: Role::Employee,
            password: "short".into(),
            manager_id: None,
            phones: vec![PhoneInput {
                number: "9".repeat(30),
                phone_type: PhoneType::Home,
            }],
        };

        let errors = input.validate().unwrap_err();
        let mut messages = validation_messages(&errors);
        messages.sort();

        assert_eq!(messages.len(), 2);
        assert!(messages.iter().any(|m| m.contains("Password")));
        assert!(messages.iter().any(|m| m.contains("Phone number")));
    }
}
