//! [`Command`] for dismissing the rejection modal.

use tracerr::Traced;

use crate::{domain::board, Service};

use super::Command;

/// [`Command`] for dismissing the rejection modal by an outside interaction
/// (a click on the backdrop, for example).
///
/// Unlike [`CancelRejection`], dismissal is suppressed while an address
/// autocomplete is being interacted with.
///
/// [`CancelRejection`]: super::CancelRejection
#[derive(Clone, Copy, Debug)]
pub struct DismissRejection;

impl<B> Command<DismissRejection> for Service<B> {
    /// Indicator whether the modal is dismissed.
    type Ok = bool;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        _: DismissRejection,
    ) -> Result<Self::Ok, Self::Err> {
        self.board()
            .lock()
            .await
            .dismiss_rejection()
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`DismissRejection`] [`Command`] execution.
pub type ExecutionError = board::Error;

#[cfg(test)]
mod spec {
    use crate::{
        command::{test_service, SetAutocompleteInteracting, TransitionDeal},
        domain::{board::test_deal as deal, Status},
        query, Command as _,
    };

    use super::DismissRejection;

    #[tokio::test]
    async fn is_suppressed_by_autocomplete_interaction() {
        let svc = test_service(vec![deal(1, "submitted")]).await;
        _ = svc
            .execute(TransitionDeal {
                deal_id: 1.into(),
                status: Status::BuyerRejected,
            })
            .await
            .unwrap();

        svc.execute(SetAutocompleteInteracting(true)).await.unwrap();
        assert!(!svc.execute(DismissRejection).await.unwrap());
        let view = svc.execute(query::board::View::by(())).await.unwrap();
        assert!(view.rejection.is_some_and(|r| !r.is_dismissible));

        svc.execute(SetAutocompleteInteracting(false)).await.unwrap();
        assert!(svc.execute(DismissRejection).await.unwrap());
        let view = svc.execute(query::board::View::by(())).await.unwrap();
        assert!(view.rejection.is_none());
    }
}
