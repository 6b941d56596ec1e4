//! [`Command`] for submitting a rejection reason.

use tracerr::Traced;
use tracing as log;

use crate::{
    domain::board::{self, StatusUpdate},
    Service,
};

use super::Command;

/// [`Command`] for committing the pending rejection with a reason.
#[derive(Clone, Debug)]
pub struct SubmitRejection {
    /// Free-text reason of the rejection.
    pub reason: String,
}

impl<B> Command<SubmitRejection> for Service<B> {
    type Ok = StatusUpdate;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        SubmitRejection { reason }: SubmitRejection,
    ) -> Result<Self::Ok, Self::Err> {
        let mut board = self.board().lock().await;
        let update =
            board.submit_rejection(&reason).map_err(tracerr::wrap!())?;
        log::debug!("`Deal(id: {})` rejected", update.deal.id);

        self.dispatch(update.clone());
        drop(board);

        Ok(update)
    }
}

/// Error of [`SubmitRejection`] [`Command`] execution.
pub type ExecutionError = board::Error;

#[cfg(test)]
mod spec {
    use crate::{
        command::{test_service, CancelRejection, TransitionDeal},
        domain::{
            board::{test_deal as deal, Event},
            Status,
        },
        query, Command as _,
    };

    use super::{ExecutionError, SubmitRejection};

    async fn rejected_service(
    ) -> crate::Service<crate::infra::backend::memory::Memory> {
        let svc = test_service(vec![deal(1, "submitted")]).await;
        _ = svc
            .execute(TransitionDeal {
                deal_id: 1.into(),
                status: Status::BuyerRejected,
            })
            .await
            .unwrap();
        svc
    }

    #[tokio::test]
    async fn commits_rejection_with_reason() {
        let svc = rejected_service().await;
        let mut events = svc.subscribe();

        let update = svc
            .execute(SubmitRejection {
                reason: "price too low".into(),
            })
            .await
            .unwrap();

        assert_eq!(update.deal, deal(1, "submitted"));
        assert_eq!(update.status, Status::BuyerRejected);
        assert_eq!(
            update.reason.as_ref().map(ToString::to_string).as_deref(),
            Some("price too low"),
        );
        assert_eq!(events.try_recv().ok(), Some(Event::StatusUpdate(update)));
        assert!(events.try_recv().is_err());
        let working = svc.execute(query::board::Working::by(())).await.unwrap();
        assert_eq!(working, [deal(1, "buyer_rejected")]);
    }

    #[tokio::test]
    async fn refuses_blank_reason() {
        let svc = rejected_service().await;
        let mut events = svc.subscribe();

        let err = svc
            .execute(SubmitRejection { reason: "  ".into() })
            .await
            .unwrap_err();

        assert_eq!(*err.as_ref(), ExecutionError::EmptyReason);
        assert!(events.try_recv().is_err());
        let working = svc.execute(query::board::Working::by(())).await.unwrap();
        assert_eq!(working, [deal(1, "submitted")]);
    }

    #[tokio::test]
    async fn cancel_issues_no_update() {
        let svc = rejected_service().await;
        let mut events = svc.subscribe();

        _ = svc.execute(CancelRejection).await.unwrap();

        assert!(events.try_recv().is_err());
        let err = svc
            .execute(SubmitRejection {
                reason: "too late".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(*err.as_ref(), ExecutionError::NoPendingRejection);
        let working = svc.execute(query::board::Working::by(())).await.unwrap();
        assert_eq!(working, [deal(1, "submitted")]);
    }
}
