//! [`Command`] for transitioning a [`Deal`] without dragging it.

use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Deal;
use crate::{
    domain::{
        board::{self, Outcome},
        deal, Status,
    },
    Service,
};

use super::Command;

/// [`Command`] for transitioning a [`Deal`] into a [`Status`] directly, as
/// the status editor does.
///
/// Obeys the same rules as a drop: a transition into the current [`Status`]
/// does nothing, and a rejection awaits its reason.
#[derive(Clone, Copy, Debug)]
pub struct TransitionDeal {
    /// ID of the [`Deal`] to transition.
    pub deal_id: deal::Id,

    /// [`Status`] to transition the [`Deal`] into.
    pub status: Status,
}

impl<B> Command<TransitionDeal> for Service<B> {
    type Ok = Outcome;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: TransitionDeal,
    ) -> Result<Self::Ok, Self::Err> {
        let TransitionDeal { deal_id, status } = cmd;

        let mut board = self.board().lock().await;
        let outcome = board
            .commit_transition(deal_id, status)
            .map_err(tracerr::wrap!())?;
        if let Outcome::Committed(update) = &outcome {
            // Under the lock, so the queue follows the commit order.
            self.dispatch(update.clone());
        }
        drop(board);

        Ok(outcome)
    }
}

/// Error of [`TransitionDeal`] [`Command`] execution.
pub type ExecutionError = board::Error;
