//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler.
///
/// Commands, queries, background tasks and calls to external backends are
/// all expressed as [`Handler`]s parametrized by their arguments, so a single
/// type may handle many different operations.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
