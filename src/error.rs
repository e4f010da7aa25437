use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self.code, 102 | 103)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        tracing::error!("timestamp parse failure: {}", err);
        unexpected_error()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            3 | 4 => (StatusCode::BAD_GATEWAY, "Upstream Error"),
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            104 => (StatusCode::NOT_FOUND, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "success": false,
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn missing_field_error(field: &str) -> Error {
    Error {
        code: 102,
        message: format!("{} is required", field),
    }
}

pub fn malformed_field_error(field: &str, reason: &str) -> Error {
    Error {
        code: 103,
        message: format!("{} {}", field, reason),
    }
}

pub fn not_found_error(id: &str) -> Error {
    Error {
        code: 104,
        message: format!("tower {} not found", id),
    }
}

pub fn duplicate_id_error(id: &str) -> Error {
    Error {
        code: 105,
        message: format!("tower {} already exists", id),
    }
}

pub fn submission_rejected_error(message: String) -> Error {
    Error {
        code: 106,
        message,
    }
}

pub fn config_error(key: &str) -> Error {
    Error {
        code: 1,
        message: format!("invalid value for {}", key),
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

pub fn server_error<T: Display>(err: T) -> Error {
    Error {
        code: 6,
        message: format!("server error: {}", err),
    }
}
