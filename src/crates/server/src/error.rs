use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use application::error::AppError;
use application::query::QueryError;
use serde::Serialize;
use thiserror::Error;

/// 统一的 JSON 错误响应体
#[derive(Debug, Error, Serialize)]
#[error("{code} {message}")]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST.as_u16(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::NOT_FOUND.as_u16(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            message: message.into(),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::NotFound(msg) => Self::not_found(msg),
            QueryError::InvalidInput(msg) => Self::bad_request(msg),
            QueryError::ParseError(msg) => Self::bad_request(msg),
            other => {
                log::error!("query failed: {}", other);
                Self::internal("Internal server error")
            }
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidInput(msg) => Self::bad_request(msg),
            AppError::AggregateNotFound(kind, msg) => {
                Self::not_found(format!("{} not found: {}", kind, msg))
            }
            other => {
                log::error!("command failed: {}", other);
                Self::internal("Internal server error")
            }
        }
    }
}

impl actix_web::error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(self)
    }
}
