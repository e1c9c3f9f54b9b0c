use axum::http::Uri;
use shared::api::{error::ServerError, response_errors::ApiError};

pub async fn api_not_found(uri: Uri) -> ServerError<ApiError> {
    ApiError::NotFound { path: uri.path().to_owned() }.into()
}
