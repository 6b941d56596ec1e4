//! [`Command`] for cancelling a pending rejection.

use tracerr::Traced;

use crate::{
    domain::board::{self, PendingRejection},
    Service,
};

use super::Command;

/// [`Command`] for discarding the pending rejection, leaving the board as it
/// was before the rejection was requested.
#[derive(Clone, Copy, Debug)]
pub struct CancelRejection;

impl<B> Command<CancelRejection> for Service<B> {
    type Ok = PendingRejection;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        _: CancelRejection,
    ) -> Result<Self::Ok, Self::Err> {
        self.board()
            .lock()
            .await
            .cancel_rejection()
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`CancelRejection`] [`Command`] execution.
pub type ExecutionError = board::Error;
