use crate::{
    abstract_trait::JwtServiceTrait,
    errors::ServiceError,
    model::{Role, SessionUser},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Lifetime of an access token, reported to clients as `expires_in`.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user: &SessionUser) -> Result<(String, i64), ServiceError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.clone(),
            role: user.role,
            iat: now.timestamp() as usize,
            exp: (now + Duration::seconds(ACCESS_TOKEN_TTL_SECS)).timestamp() as usize,
            token_type: "access".to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)?;

        Ok((token, ACCESS_TOKEN_TTL_SECS))
    }

    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        let current_time = Utc::now().timestamp() as usize;

        if token_data.claims.exp < current_time {
            return Err(ServiceError::TokenExpired);
        }

        if token_data.claims.token_type != "access" {
            return Err(ServiceError::InvalidTokenType);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: "7".into(),
            name: "Klinik Sehat".into(),
            email: "faskes@klinik.com".into(),
            role: Role::Faskes,
        }
    }

    #[test]
    fn issued_token_verifies_with_same_secret() {
        let jwt = JwtConfig::new("secret");
        let (token, expires_in) = jwt.generate_token(&user()).unwrap();
        assert_eq!(expires_in, ACCESS_TOKEN_TTL_SECS);

        let claims = jwt.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.role, Role::Faskes);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let (token, _) = JwtConfig::new("one").generate_token(&user()).unwrap();
        assert!(matches!(
            JwtConfig::new("two").verify_token(&token),
            Err(ServiceError::Jwt(_))
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(JwtConfig::new("secret").verify_token("demo_token_123456").is_err());
    }
}
