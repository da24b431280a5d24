use std::collections::BTreeMap;

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_macros::FromRequest;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::domain::todo::driving_ports::TodoError;

/// Contains diagnostic information about an API failure
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct BasicErrorResponse {
    pub error_code: String,
    pub error_description: String,
    pub extra_info: Option<String>,
}

/// Response type for failures nobody can fix by changing the request. The cause is logged
/// and the client gets a generic 500.
pub struct GenericErrorResponse(pub anyhow::Error);

impl IntoResponse for GenericErrorResponse {
    fn into_response(self) -> Response {
        error!("Unexpected failure while handling request: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(BasicErrorResponse {
                error_code: "internal_error".into(),
                error_description: "Could not access data to complete your request".into(),
                extra_info: None,
            }),
        )
            .into_response()
    }
}

/// Response type that turns domain todo errors into HTTP responses. Missing todos are a
/// bare 404 with no body.
pub struct TodoErrorResponse(TodoError);

impl IntoResponse for TodoErrorResponse {
    fn into_response(self) -> Response {
        match self.0 {
            TodoError::DoesNotExist(_) => StatusCode::NOT_FOUND.into_response(),
            TodoError::PortError(cause) => GenericErrorResponse(cause).into_response(),
        }
    }
}

impl From<TodoError> for TodoErrorResponse {
    fn from(value: TodoError) -> Self {
        Self(value)
    }
}

/// Response type that wraps validation errors into a 400 whose body maps each offending
/// field to its list of messages, e.g. `{"dueDate": ["Due date cannot be in the past."]}`
pub struct ValidationErrorResponse(ValidationErrors);

impl ValidationErrorResponse {
    /// Flattens the validation errors to field -> messages, falling back to the error code
    /// for errors without a message
    fn problems_by_field(&self) -> BTreeMap<String, Vec<String>> {
        self.0
            .field_errors()
            .into_iter()
            .map(|(field, field_errors)| {
                let messages = field_errors
                    .iter()
                    .map(|field_error| match field_error.message {
                        Some(ref message) => message.to_string(),
                        None => field_error.code.to_string(),
                    })
                    .collect();

                (field.to_owned(), messages)
            })
            .collect()
    }
}

impl IntoResponse for ValidationErrorResponse {
    fn into_response(self) -> Response {
        let problems = self.problems_by_field();
        info!("Rejected invalid input: {problems:?}");

        (StatusCode::BAD_REQUEST, axum::Json(problems)).into_response()
    }
}

impl From<ValidationErrors> for ValidationErrorResponse {
    fn from(value: ValidationErrors) -> Self {
        Self(value)
    }
}

/// Wrapper for [axum::Json] which customizes the error response to use our
/// data structure for API errors
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonErrorResponse))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Response type representing JSON parse errors
pub struct JsonErrorResponse {
    parse_problem: String,
}

impl From<JsonRejection> for JsonErrorResponse {
    fn from(value: JsonRejection) -> Self {
        JsonErrorResponse {
            parse_problem: value.body_text(),
        }
    }
}

impl IntoResponse for JsonErrorResponse {
    fn into_response(self) -> Response {
        info!("Rejected malformed JSON body: {}", self.parse_problem);
        (
            StatusCode::BAD_REQUEST,
            axum::Json(BasicErrorResponse {
                error_code: "invalid_json".into(),
                error_description:
                    "The passed request body contained malformed or unreadable JSON.".into(),
                extra_info: Some(self.parse_problem),
            }),
        )
            .into_response()
    }
}

/// JSON body extractor which also runs [Validate] on the decoded payload. A request which
/// fails validation never reaches the handler.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        payload
            .validate()
            .map_err(|errors| ValidationErrorResponse::from(errors).into_response())?;

        Ok(ValidatedJson(payload))
    }
}
