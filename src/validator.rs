use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

fn collect_details(errors: &ValidationErrors) -> Vec<String> {
    let mut details: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect();
    details.sort();
    details
}

/// JSON extractor that runs declarative `validator` constraints and surfaces
/// failures as [`AppError::Validation`] with per-field details.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                // Well-formed JSON that does not fit the target type. The
                // serde message is only mined for the detail text; the
                // rejection variant alone decides the outcome.
                JsonRejection::JsonDataError(err) => {
                    let error_msg = err.body_text();

                    if let Some(field) = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                    {
                        AppError::Validation(vec![format!("{field} is required")])
                    } else if error_msg.contains("invalid type") {
                        AppError::Validation(vec!["Invalid field type in request".to_string()])
                    } else {
                        AppError::Validation(vec!["Invalid request body".to_string()])
                    }
                }
                JsonRejection::MissingJsonContentType(_) => AppError::Validation(vec![
                    "Missing 'Content-Type: application/json' header".to_string(),
                ]),
                _ => AppError::Validation(vec!["Invalid request body".to_string()]),
            })?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(collect_details(&errors)))?;

        Ok(ValidatedJson(value))
    }
}
