//! [`Command`] for cancelling a drag.

use std::convert::Infallible;

use crate::Service;

use super::Command;

/// [`Command`] for abandoning the current drag (on `Escape` or when the
/// pointer leaves the board), without any effect on the board.
#[derive(Clone, Copy, Debug)]
pub struct CancelDrag;

impl<B> Command<CancelDrag> for Service<B> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: CancelDrag) -> Result<Self::Ok, Self::Err> {
        self.board().lock().await.cancel_drag();
        Ok(())
    }
}
