//! [`Command`] for requesting a [`Deal`] status editor.

use tracerr::Traced;

use crate::{
    domain::{board::Event, deal, Deal},
    Service,
};

use super::{view_deal, Command};

/// [`Command`] activated by the "edit status" affordance of a [`Deal`]
/// card.
///
/// Never touches the drag session.
#[derive(Clone, Copy, Debug)]
pub struct EditDealStatus {
    /// ID of the [`Deal`] whose status should be edited.
    pub deal_id: deal::Id,
}

impl<B> Command<EditDealStatus> for Service<B> {
    type Ok = Deal;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        EditDealStatus { deal_id }: EditDealStatus,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let deal = self
            .board()
            .lock()
            .await
            .find(deal_id)
            .cloned()
            .ok_or(E::DealNotExists(deal_id))
            .map_err(tracerr::wrap!())?;

        self.publish(Event::EditStatusRequested(deal.clone()));
        Ok(deal)
    }
}

/// Error of [`EditDealStatus`] [`Command`] execution.
pub type ExecutionError = view_deal::ExecutionError;
