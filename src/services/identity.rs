//! Identity assertions: signed, time-bounded bearer tokens naming an employee.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{Caller, Employee, Role};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    /// Absent in tokens minted by older issuers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Asserted role, falling back to the lowest privilege
    pub fn role(&self) -> Role {
        Role::parse_or_lowest(self.role.as_deref())
    }

    pub fn caller(&self) -> Caller {
        Caller::new(self.sub, self.role())
    }
}

/// Token response returned after successful authentication
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Issues and verifies identity assertions.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait IdentityProvider: Send + Sync {
    fn issue(&self, employee: &Employee) -> AppResult<TokenResponse>;

    fn verify(&self, token: &str) -> AppResult<Claims>;
}

/// HS256 JWT implementation of IdentityProvider
pub struct JwtIdentity {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl_hours: i64,
}

impl JwtIdentity {
    pub fn new(secret: &[u8], issuer: &str, audience: &str, ttl_hours: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            issuer: issuer.to_string(),
            audience: audience.to_string(),
            ttl_hours,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.jwt_secret_bytes(),
            &config.jwt_issuer,
            &config.jwt_audience,
            config.jwt_expiration_hours,
        )
    }
}

impl IdentityProvider for JwtIdentity {
    fn issue(&self, employee: &Employee) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.ttl_hours);

        let claims = Claims {
            sub: employee.id(),
            email: employee.email().to_string(),
            role: Some(employee.role().to_string()),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.ttl_hours * SECONDS_PER_HOUR,
        })
    }

    fn verify(&self, token: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewEmployee;
    use crate::errors::AppError;
    use chrono::NaiveDate;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn identity() -> JwtIdentity {
        JwtIdentity::new(SECRET, "directory", "directory-clients", 1)
    }

    fn leader() -> Employee {
        Employee::new(NewEmployee {
            first_name: "Lia".into(),
            last_name: "Costa".into(),
            email: "lia@example.com".into(),
            doc_number: "555".into(),
            birth_date: NaiveDate::from_ymd_opt(1985, 3, 1).unwrap(),
            role: Role::Leader,
            password_hash: "hash".into(),
            manager_id: None,
        })
        .unwrap()
    }

    #[test]
    fn issued_token_carries_subject_and_role() {
        let identity = identity();
        let employee = leader();

        let token = identity.issue(&employee).unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);

        let claims = identity.verify(&token.access_token).unwrap();
        assert_eq!(claims.sub, employee.id());
        assert_eq!(claims.email, "lia@example.com");
        assert_eq!(claims.role(), Role::Leader);
        assert_eq!(claims.caller(), Caller::new(employee.id(), Role::Leader));
    }

    #[test]
    fn missing_role_claim_reads_as_employee() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "x@example.com".into(),
            role: None,
            iss: "directory".into(),
            aud: "directory-clients".into(),
            exp: now + 600,
            iat: now,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let decoded = identity().verify(&token).unwrap();
        assert_eq!(decoded.role, None);
        assert_eq!(decoded.role(), Role::Employee);
    }

    #[test]
    fn unparseable_role_claim_reads_as_employee() {
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "x@example.com".into(),
            role: Some("superuser".into()),
            iss: String::new(),
            aud: String::new(),
            exp: 0,
            iat: 0,
        };
        assert_eq!(claims.role(), Role::Employee);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let identity = identity();
        let mut token = identity.issue(&leader()).unwrap().access_token;
        token.push('x');

        assert!(matches!(identity.verify(&token), Err(AppError::Jwt(_))));
    }

    #[test]
    fn token_for_another_audience_is_rejected() {
        let token = JwtIdentity::new(SECRET, "directory", "someone-else", 1)
            .issue(&leader())
            .unwrap()
            .access_token;

        assert!(identity().verify(&token).is_err());
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = JwtIdentity::new(b"another-secret-another-secret-xx", "directory", "directory-clients", 1)
            .issue(&leader())
            .unwrap()
            .access_token;

        assert!(identity().verify(&token).is_err());
    }
}
