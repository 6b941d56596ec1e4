//! [`Backend`]-related implementations.

#[cfg(feature = "http")]
pub mod http;
#[cfg(test)]
pub(crate) mod memory;
pub mod payload;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::http::Http;

/// Operation upon an external deals backend, owning the [`Deal`]s.
///
/// [`Deal`]: crate::domain::Deal
pub use common::Handler as Backend;

/// [`Backend`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Transport error.
    #[cfg(feature = "http")]
    #[display("HTTP request failed: {_0}")]
    Http(reqwest::Error),

    /// [`Backend`] responded with an unexpected status.
    #[display("`Backend` responded with `{status}` status: {body}")]
    #[from(ignore)]
    UnexpectedStatus {
        /// Status code of the response.
        status: u16,

        /// Body of the response.
        body: String,
    },
}
