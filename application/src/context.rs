//! [`Context`]-related definitions.

use std::sync::atomic::{self, AtomicU16};

use axum::{async_trait, extract::FromRequestParts};
use juniper::{
    http::{GraphQLBatchResponse, GraphQLResponse},
    IntoFieldError as _,
};

use crate::{Error, JuniperResponse, Service};

/// Application context.
#[derive(Debug)]
pub struct Context {
    /// [`Service`] instance.
    service: Service,

    /// Error status code.
    error_status_code: AtomicU16,
}

impl Context {
    /// Creates a new [`Context`] around the provided [`Service`].
    #[must_use]
    pub fn new(service: Service) -> Self {
        Self {
            service,
            error_status_code: AtomicU16::new(
                http::StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            ),
        }
    }

    /// Returns [`Service`] instance of this [`Context`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Returns the error status code of this [`Context`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn error_status_code(&self) -> http::StatusCode {
        http::StatusCode::from_u16(
            self.error_status_code.load(atomic::Ordering::Relaxed),
        )
        .expect("invalid status code")
    }

    /// Sets the error status code for this [`Context`].
    ///
    /// Provided [`http::StatusCode`] will be applied to the response.
    pub fn set_error_status_code(&self, status_code: http::StatusCode) {
        self.error_status_code
            .store(status_code.as_u16(), atomic::Ordering::Relaxed);
    }

    /// Helper method calling [`Context::set_error_status_code()`] inside
    /// [`Result::map_err()`] closure.
    pub fn error(&self) -> impl FnOnce(Error) -> Error + '_ {
        move |err| {
            self.set_error_status_code(err.status_code);
            err
        }
    }
}

impl juniper::Context for Context {}

#[async_trait]
impl<S> FromRequestParts<S> for Context
where
    S: Send + Sync,
{
    type Rejection = JuniperResponse;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Service>()
            .cloned()
            .map(Self::new)
            .ok_or_else(|| JuniperResponse {
                status_code: http::StatusCode::INTERNAL_SERVER_ERROR,
                response: GraphQLBatchResponse::Single(GraphQLResponse::error(
                    Error::internal(&"missing `Service` extension")
                        .into_field_error(),
                )),
            })
    }
}
