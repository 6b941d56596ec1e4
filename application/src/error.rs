//! [`Error`]-related definitions.

use std::fmt;

use derive_more::Error as StdError;
use itertools::Itertools as _;
use juniper::{FieldError, IntoFieldError, ScalarValue, Value};
use service::infra::backend;
use tracerr::{Trace, Traced};

/// Defines a new error type.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[code = $code:literal]
                #[status = $status_code:ident]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Error type.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error
        )]
        #[repr(u16)]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => Self {
                            code: $code,
                            status_code: ::http::StatusCode::$status_code,
                            message: $message.to_string(),
                            backtrace: None,
                        },
                    )*
                }
            }
        }
    };
}

/// GraphQL API [`Error`].
///
/// Rendered as a GraphQL field error carrying `code`, `status` and
/// `retryable` extensions, plus `backtrace` frames when traced.
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// [`http::StatusCode`] of this [`Error`].
    pub status_code: http::StatusCode,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Create a new [`Error`] representing an internal server error.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self {
            code: "INTERNAL_SERVER_ERROR",
            status_code: http::StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            backtrace: None,
        }
    }

    /// Indicates whether repeating the same operation, usually after a
    /// `refreshDeals`, may succeed.
    ///
    /// Board state conflicts (`409`), rate limits (`429`) and upstream
    /// failures (`502`..=`504`) are retryable. Malformed input and unknown
    /// deals are not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        use http::StatusCode as S;

        matches!(
            self.status_code,
            S::CONFLICT
                | S::TOO_MANY_REQUESTS
                | S::BAD_GATEWAY
                | S::SERVICE_UNAVAILABLE
                | S::GATEWAY_TIMEOUT,
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            status_code: _,
            backtrace,
            message,
        } = self;

        write!(f, "[{code}]: {message}")?;
        if let Some(trace) = backtrace.as_ref().filter(|t| !t.is_empty()) {
            write!(f, "\n{}", trace.iter().format("\n"))?;
        }
        Ok(())
    }
}

impl<S> IntoFieldError<S> for Error
where
    S: ScalarValue,
{
    fn into_field_error(self) -> FieldError<S> {
        let mut ext = juniper::Object::with_capacity(4);
        drop(ext.add_field("code", Value::scalar(self.code.to_owned())));
        drop(ext.add_field(
            "status",
            Value::scalar(i32::from(self.status_code.as_u16())),
        ));
        drop(ext.add_field("retryable", Value::scalar(self.is_retryable())));
        if let Some(trace) = self.backtrace.filter(|t| !t.is_empty()) {
            drop(ext.add_field(
                "backtrace",
                Value::list(
                    trace
                        .iter()
                        .map(|frame| Value::scalar(frame.to_string()))
                        .collect(),
                ),
            ));
        }
        FieldError::new(self.message, Value::object(ext))
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for backend::Error {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "BACKEND_UNAVAILABLE"]
                #[status = BAD_GATEWAY]
                #[message = "Deals backend is unavailable"]
                Unavailable,
            }
        }

        match self {
            Self::Http(e) if e.is_decode() => None,
            Self::Http(_) | Self::UnexpectedStatus { .. } => {
                Some(Error::Unavailable.into())
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use juniper::{DefaultScalarValue, FieldError, IntoFieldError as _, Value};
    use service::infra::backend;

    use super::{AsError as _, Error};

    #[test]
    fn backend_failure_is_bad_gateway() {
        let err = backend::Error::UnexpectedStatus {
            status: 503,
            body: "down".into(),
        }
        .into_error();

        assert_eq!(err.code, "BACKEND_UNAVAILABLE");
        assert_eq!(err.status_code, http::StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn traced_error_keeps_backtrace() {
        let err = tracerr::new!(backend::Error::UnexpectedStatus {
            status: 500,
            body: String::new(),
        })
        .into_error();

        assert!(err.backtrace.is_some_and(|t| !t.is_empty()));
    }

    #[test]
    fn unknown_error_is_internal() {
        let err = Error::internal(&"boom");

        assert_eq!(err.code, "INTERNAL_SERVER_ERROR");
        assert_eq!(err.to_string(), "[INTERNAL_SERVER_ERROR]: boom");
    }

    #[test]
    fn renders_board_extensions() {
        let err = backend::Error::UnexpectedStatus {
            status: 503,
            body: String::new(),
        }
        .into_error();
        assert!(err.is_retryable());

        let field: FieldError<DefaultScalarValue> = err.into_field_error();
        let ext = field.extensions().as_object_value().unwrap();

        assert_eq!(
            ext.get_field_value("code"),
            Some(&Value::scalar("BACKEND_UNAVAILABLE".to_owned())),
        );
        assert_eq!(ext.get_field_value("status"), Some(&Value::scalar(502)));
        assert_eq!(
            ext.get_field_value("retryable"),
            Some(&Value::scalar(true)),
        );
        assert_eq!(ext.get_field_value("backtrace"), None);
    }

    #[test]
    fn internal_error_is_not_retryable() {
        assert!(!Error::internal(&"boom").is_retryable());
    }
}
