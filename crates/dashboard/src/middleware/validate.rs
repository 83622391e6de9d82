use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::errors::{HttpError, ServiceError};
use validator::{Validate, ValidationErrors};

/// JSON body that has passed `validator` checks. Rejects with `400`.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(|errors| {
            HttpError::from(ServiceError::Validation(field_messages(&errors)))
        })?;

        Ok(Self(value))
    }
}

/// `field: message` lines, sorted by field name.
fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                let message = match &e.message {
                    Some(message) => message.to_string(),
                    None if e.code == "length" => "Invalid length".to_string(),
                    None => "Invalid value".to_string(),
                };
                format!("{field}: {message}")
            })
        })
        .collect();
    messages.sort();
    messages
}
