//! [`Command`] for pressing a [`Deal`] card.

use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Deal;
use crate::{
    domain::{
        board::{self, Point},
        deal,
    },
    Service,
};

use super::Command;

/// [`Command`] for pressing a [`Deal`] card, the first step of a drag.
#[derive(Clone, Copy, Debug)]
pub struct PressCard {
    /// ID of the [`Deal`] whose card is pressed.
    pub deal_id: deal::Id,

    /// [`Point`] the press happened at.
    pub at: Point,
}

impl<B> Command<PressCard> for Service<B> {
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: PressCard) -> Result<Self::Ok, Self::Err> {
        let PressCard { deal_id, at } = cmd;

        self.board()
            .lock()
            .await
            .press(deal_id, at)
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`PressCard`] [`Command`] execution.
pub type ExecutionError = board::Error;
