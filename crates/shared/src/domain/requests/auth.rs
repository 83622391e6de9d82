use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[serde(default)]
    pub remember_me: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_fails_validation() {
        let request = LoginRequest {
            username: "admin".into(),
            password: "123".into(),
            remember_me: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn remember_me_is_optional() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"username": "admin", "password": "123456"}"#).unwrap();
        assert_eq!(request.remember_me, None);
        assert!(request.validate().is_ok());
    }
}
