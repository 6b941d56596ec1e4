//! [`Command`] for requesting [`Deal`] details.

use derive_more::{Display, Error};
use tracerr::Traced;

use crate::{
    domain::{board::Event, deal, Deal},
    Service,
};

use super::Command;

/// [`Command`] activated by the "view details" affordance of a [`Deal`]
/// card.
///
/// Never touches the drag session.
#[derive(Clone, Copy, Debug)]
pub struct ViewDeal {
    /// ID of the [`Deal`] to view.
    pub deal_id: deal::Id,
}

impl<B> Command<ViewDeal> for Service<B> {
    type Ok = Deal;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        ViewDeal { deal_id }: ViewDeal,
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

        self.publish(Event::DealClicked(deal.clone()));
        Ok(deal)
    }
}

/// Error of [`ViewDeal`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Deal`] doesn't exist.
    #[display("`Deal(id: {_0})` does not exist")]
    DealNotExists(#[error(not(source))] deal::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{test_service, MovePointer, PressCard},
        domain::board::{test_deal as deal, Event, Point},
        query, Command as _,
    };

    use super::ViewDeal;

    #[tokio::test]
    async fn emits_click_without_touching_drag() {
        let svc = test_service(vec![deal(1, "submitted"), deal(2, "sold")])
            .await;
        svc.execute(PressCard {
            deal_id: 2.into(),
            at: Point::default(),
        })
        .await
        .unwrap();
        _ = svc
            .execute(MovePointer {
                to: Point { x: 30.0, y: 0.0 },
                over: None,
            })
            .await
            .unwrap();
        let mut events = svc.subscribe();

        let viewed = svc.execute(ViewDeal { deal_id: 1.into() }).await.unwrap();

        assert_eq!(viewed, deal(1, "submitted"));
        assert_eq!(events.try_recv().ok(), Some(Event::DealClicked(viewed)));
        let view = svc.execute(query::board::View::by(())).await.unwrap();
        assert_eq!(view.overlay.map(|c| c.id), Some(2.into()));
        assert!(svc
            .execute(ViewDeal { deal_id: 9.into() })
            .await
            .is_err());
    }
}
