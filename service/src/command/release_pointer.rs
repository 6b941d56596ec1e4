//! [`Command`] for releasing the pointer, ending a drag.

use std::convert::Infallible;

use tracing as log;

use crate::{
    domain::board::{Outcome, Target},
    Service,
};

use super::Command;

/// [`Command`] for releasing the pointer over a [`Target`], deciding upon
/// the transition of the dragged [`Deal`].
///
/// [`Deal`]: crate::domain::Deal
#[derive(Clone, Copy, Debug)]
pub struct ReleasePointer {
    /// [`Target`] under the pointer, if any.
    pub over: Option<Target>,
}

impl<B> Command<ReleasePointer> for Service<B> {
    type Ok = Outcome;
    type Err = Infallible;

    async fn execute(
        &self,
        ReleasePointer { over }: ReleasePointer,
    ) -> Result<Self::Ok, Self::Err> {
        let mut board = self.board().lock().await;
        let outcome = board.release(over);

        match &outcome {
            Outcome::Committed(update) => {
                log::debug!(
                    "`Deal(id: {})` dropped into `{}`",
                    update.deal.id,
                    update.status,
                );
                self.dispatch(update.clone());
            }
            Outcome::PendingRejection(pending) => {
                log::debug!(
                    "`Deal(id: {})` rejection awaits a reason",
                    pending.deal.id,
                );
            }
            Outcome::NoOp => {}
        }
        drop(board);

        Ok(outcome)
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{test_service, MovePointer, PressCard},
        domain::{
            board::{test_deal as deal, Event, Outcome, Point, Target},
            Status,
        },
        query, Command as _,
    };

    use super::ReleasePointer;

    async fn drag(
        svc: &crate::Service<crate::infra::backend::memory::Memory>,
        id: i64,
        over: Option<Target>,
    ) -> Outcome {
        svc.execute(PressCard {
            deal_id: id.into(),
            at: Point { x: 10.0, y: 10.0 },
        })
        .await
        .unwrap();
        let started = svc
            .execute(MovePointer {
                to: Point { x: 10.0, y: 40.0 },
                over,
            })
            .await
            .unwrap();
        assert!(started);
        svc.execute(ReleasePointer { over }).await.unwrap()
    }

    #[tokio::test]
    async fn accepted_drop_emits_single_status_update() {
        let svc = test_service(vec![deal(1, "submitted")]).await;
        let mut events = svc.subscribe();

        let outcome =
            drag(&svc, 1, Some(Target::Column(Status::BuyerApproved))).await;

        assert!(matches!(outcome, Outcome::Committed(_)));
        let Ok(Event::StatusUpdate(update)) = events.try_recv() else {
            panic!("expected `Event::StatusUpdate`");
        };
        assert_eq!(update.deal, deal(1, "submitted"));
        assert_eq!(update.status, Status::BuyerApproved);
        assert_eq!(update.reason, None);
        assert!(events.try_recv().is_err());

        let working = svc.execute(query::board::Working::by(())).await.unwrap();
        assert_eq!(working, [deal(1, "buyer_approved")]);
    }

    #[tokio::test]
    async fn rejected_drop_emits_nothing_until_reason() {
        let svc = test_service(vec![deal(1, "submitted")]).await;
        let mut events = svc.subscribe();

        let outcome =
            drag(&svc, 1, Some(Target::Column(Status::BuyerRejected))).await;

        assert!(matches!(outcome, Outcome::PendingRejection(_)));
        assert!(events.try_recv().is_err());
        let working = svc.execute(query::board::Working::by(())).await.unwrap();
        assert_eq!(working, [deal(1, "submitted")]);
    }

    #[tokio::test]
    async fn drop_outside_emits_nothing() {
        let svc = test_service(vec![deal(1, "submitted")]).await;
        let mut events = svc.subscribe();

        assert_eq!(drag(&svc, 1, None).await, Outcome::NoOp);
        assert!(events.try_recv().is_err());
    }
}
