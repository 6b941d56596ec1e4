//! [`Command`] for refreshing the authoritative [`Deal`] list.

use std::convert::Infallible;

use derive_more::From;
use tracing as log;

use crate::{
    domain::{
        board::{Event, Revision},
        Deal,
    },
    Service,
};

use super::Command;

/// [`Command`] for replacing the authoritative [`Deal`] list, discarding all
/// the optimistic changes made since the previous refresh.
#[derive(Clone, Debug, From)]
pub struct RefreshDeals {
    /// New authoritative [`Deal`] list.
    pub deals: Vec<Deal>,
}

impl<B> Command<RefreshDeals> for Service<B> {
    type Ok = Revision;
    type Err = Infallible;

    async fn execute(
        &self,
        RefreshDeals { deals }: RefreshDeals,
    ) -> Result<Self::Ok, Self::Err> {
        let count = deals.len();
        let mut board = self.board().lock().await;
        let revision = board.refresh(deals);
        log::debug!("`Deal`s refreshed: {count} total, revision {revision}");

        self.publish(Event::Refreshed(revision));
        drop(board);

        Ok(revision)
    }
}
