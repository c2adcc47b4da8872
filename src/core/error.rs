use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("No signing secret configured")]
    MissingSecret,
    #[error("Database migration error: {0}")]
    DatabaseMigration(#[from] sqlx::migrate::MigrateError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Username and password are required")]
    MissingCredentials,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Missing token")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    NotFound,
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl Error {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Error::MissingCredentials => StatusCode::BAD_REQUEST,
            Error::UserNotFound
            | Error::InvalidPassword
            | Error::MissingToken
            | Error::InvalidToken => StatusCode::UNAUTHORIZED,
            Error::UserAlreadyExists => StatusCode::CONFLICT,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Sql(_) | Error::Bcrypt(_) | Error::Jwt(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // client-facing message; store and crypto failures collapse to a generic
    // string so no internal detail leaves the process
    pub(crate) fn message(&self) -> &'static str {
        match self {
            Error::MissingCredentials => "Username and password are required",
            Error::UserNotFound => "User not found",
            Error::InvalidPassword => "Invalid password",
            Error::MissingToken => "Missing token",
            Error::InvalidToken => "Invalid token",
            Error::UserAlreadyExists => "User already exists",
            Error::NotFound => "User not found",
            Error::Sql(_) | Error::Bcrypt(_) | Error::Jwt(_) => "Internal server error",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("{:?}", self);

        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(Error::MissingCredentials.status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::UserNotFound.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::InvalidPassword.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::MissingToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::UserAlreadyExists.status(), StatusCode::CONFLICT);
        assert_eq!(Error::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::Sql(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_errors_use_generic_message() {
        assert_eq!(
            Error::Sql(sqlx::Error::PoolClosed).message(),
            "Internal server error"
        );
        assert_eq!(
            Error::Jwt(jsonwebtoken::errors::ErrorKind::InvalidToken.into()).message(),
            "Internal server error"
        );
    }
}
