use std::fmt::{self, Debug, Display};

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "wasm")]
pub use frontend::*;

#[cfg(feature = "wasm")]
mod frontend {
    use std::fmt::{self, Display};

    use super::{ErrorContext, WrongContentTypeError};

    #[derive(Debug, Clone)]
    pub enum FrontendError<T> {
        Inner { inner: T },
        Client { message: String },
        WrongContentType { inner: WrongContentTypeError },

        WithContext { context: String, inner: Box<Self> },
    }

    impl<T: Display> Display for FrontendError<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Inner { inner } => write!(f, "{inner}"),
                Self::Client { message } => write!(f, "{message}"),
                Self::WrongContentType { inner } => write!(
                    f,
                    "Expected {} response, got {}",
                    inner.expected,
                    inner.got.as_deref().unwrap_or("no content type")
                ),
                Self::WithContext { context, inner } => write!(f, "{context}: {inner}"),
            }
        }
    }

    impl<T: fmt::Debug + Display> std::error::Error for FrontendError<T> {}

    impl<T> From<gloo::net::Error> for FrontendError<T> {
        fn from(value: gloo::net::Error) -> Self {
            Self::Client { message: format!("gloo-net error: {}", value) }
        }
    }

    impl<T> From<WrongContentTypeError> for FrontendError<T> {
        fn from(inner: WrongContentTypeError) -> Self {
            Self::WrongContentType { inner }
        }
    }

    impl<T, E: Into<FrontendError<T>>> ErrorContext<FrontendError<T>> for E {
        fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> FrontendError<T> {
            self.context(context())
        }
        fn context<S: Into<String>>(self, context: S) -> FrontendError<T> {
            FrontendError::WithContext {
                context: context.into(),
                inner: Box::new(self.into()),
            }
        }
    }
}

#[cfg(feature = "backend")]
mod backend {
    use std::fmt::Display;

    use axum::{
        response::{IntoResponse, Response},
        Json,
    };
    use serde::Serialize;
    use tracing::{debug, error};

    use super::ServerError;

    impl<E: Serialize + Display> IntoResponse for ServerError<E> {
        fn into_response(self) -> Response {
            let code = self.code();
            if code.is_server_error() {
                error!(%code, "{self}");
            } else {
                debug!(%code, "{self}");
            }
            (code, Json(self)).into_response()
        }
    }

    impl<E> From<rusqlite::Error> for ServerError<E> {
        fn from(err: rusqlite::Error) -> Self {
            Self::Other { message: format!("rusqlite error: {err}") }
        }
    }

    impl<E> From<deadpool_sqlite::InteractError> for ServerError<E> {
        fn from(err: deadpool_sqlite::InteractError) -> Self {
            Self::Other { message: format!("Database interact error: {err}") }
        }
    }

    impl<E> From<deadpool_sqlite::PoolError> for ServerError<E> {
        fn from(err: deadpool_sqlite::PoolError) -> Self {
            Self::Other { message: format!("Database pool error: {err}") }
        }
    }
}

/// Build a [`ServerError::Other`] from format args
#[macro_export]
macro_rules! other_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::Other { message: format!($($arg)*) }
    };
}

/// Placeholder for routes that have no typed errors of their own
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Error)]
#[error("Nothing")]
pub struct Nothing;

/// Error body returned by every api route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ServerError<E> {
    Inner {
        #[serde(with = "http_serde::status_code")]
        code: StatusCode,
        inner: E,
    },
    Other {
        message: String,
    },
}

impl<E> ServerError<E> {
    pub fn code(&self) -> StatusCode {
        match self {
            Self::Inner { code, .. } => *code,
            Self::Other { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<E: Display> Display for ServerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner { code, inner } => write!(f, "{code}: {inner}"),
            Self::Other { message } => write!(f, "{message}"),
        }
    }
}

impl<E: Debug + Display> std::error::Error for ServerError<E> {}

impl<E> From<serde_json::Error> for ServerError<E> {
    fn from(err: serde_json::Error) -> Self {
        Self::Other { message: format!("serde_json error: {err}") }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrongContentTypeError {
    pub expected: String,
    pub got: Option<String>,
    pub body: String,
}

pub trait ErrorContext<E>: Sized {
    /// Add helpful context to errors
    ///
    /// `context` is provided as a closure to avoid potential formatting cost if
    /// the result isn't an error
    #[allow(dead_code)]
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> E;
    /// Add helpful context to errors
    fn context<S: Into<String>>(self, context: S) -> E;
}

pub trait ResultContext<T, E: ErrorContext<E>> {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> Result<T, E>;
    fn context<S: Into<String>>(self, context: S) -> Result<T, E>;
}

impl<T, E: ErrorContext<E>> ResultContext<T, E> for Result<T, E> {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> Result<T, E> {
        self.context(context())
    }
    fn context<S: Into<String>>(self, context: S) -> Result<T, E> {
        self.map_err(|e| e.context(context))
    }
}
