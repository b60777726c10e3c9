use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::RegistrarError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Wraps the data-layer taxonomy so handlers can use `?` and still return a
/// precise status code with a JSON body.
#[derive(Debug)]
pub struct ApiError(pub RegistrarError);

impl From<RegistrarError> for ApiError {
    fn from(err: RegistrarError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RegistrarError::NotFound { .. } => StatusCode::NOT_FOUND,
            RegistrarError::UniqueViolation(_) => StatusCode::CONFLICT,
            RegistrarError::ForeignKeyViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegistrarError::Validation(_) => StatusCode::BAD_REQUEST,
            RegistrarError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            RegistrarError::Db(err) => {
                log::error!("database error: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_the_taxonomy() {
        let cases = [
            (RegistrarError::not_found("course"), StatusCode::NOT_FOUND),
            (
                RegistrarError::UniqueViolation("dup".to_owned()),
                StatusCode::CONFLICT,
            ),
            (
                RegistrarError::ForeignKeyViolation("dangling".to_owned()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                RegistrarError::Validation("bad".to_owned()),
                StatusCode::BAD_REQUEST,
            ),
            (RegistrarError::Timeout, StatusCode::GATEWAY_TIMEOUT),
        ];

        for (err, expected) in cases {
            let response = ApiError(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
