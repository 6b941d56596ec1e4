//! [`PushStatusUpdates`] [`Task`].

use std::{convert::Infallible, error::Error};

use common::operations::{By, Perform, Start, Update};
use tokio::sync::mpsc;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::board::{Event, StatusUpdate},
    infra::{backend, Backend},
    Service,
};

use super::Task;

/// Queue of [`StatusUpdate`]s to be pushed.
pub type Queue = mpsc::UnboundedReceiver<StatusUpdate>;

/// [`Task`] pushing queued [`StatusUpdate`]s to a [`Backend`] one by one.
///
/// A failed push is not retried and the optimistic change is not rolled
/// back: an [`Event::StatusUpdateFailed`] is published instead, and the next
/// refresh reconciles the board.
#[derive(Clone, Copy, Debug)]
pub struct PushStatusUpdates<S> {
    /// [`Service`] instance.
    service: S,
}

impl<B> Task<Start<By<PushStatusUpdates<Self>, Queue>>> for Service<B>
where
    PushStatusUpdates<Service<B>>:
        Task<Perform<StatusUpdate>, Ok = (), Err: Error>,
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(by): Start<By<PushStatusUpdates<Self>, Queue>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut queue = by.into_inner();
        let task = PushStatusUpdates {
            service: self.clone(),
        };

        while let Some(update) = queue.recv().await {
            let (deal_id, status) = (update.deal.id, update.status);
            if let Err(e) = task.execute(Perform(update)).await {
                log::error!(
                    "`task::PushStatusUpdates` failed for `Deal(id: \
                     {deal_id})`: {e}",
                );
                self.publish(Event::StatusUpdateFailed {
                    deal_id,
                    status,
                    message: e.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<B> Task<Perform<StatusUpdate>> for PushStatusUpdates<Service<B>>
where
    B: Backend<Update<StatusUpdate>, Ok = (), Err = Traced<backend::Error>>,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(
        &self,
        Perform(update): Perform<StatusUpdate>,
    ) -> Result<Self::Ok, Self::Err> {
        let deal_id = update.deal.id;
        self.service
            .backend()
            .execute(Update(update))
            .await
            .map_err(tracerr::wrap!())?;
        log::debug!("status of `Deal(id: {deal_id})` is pushed");
        Ok(())
    }
}

/// Error of [`PushStatusUpdates`] execution.
pub type ExecutionError = Traced<backend::Error>;

#[cfg(test)]
mod spec {
    use std::future::IntoFuture as _;

    use crate::{
        command::{RefreshDeals, TransitionDeal},
        domain::{board::test_deal as deal, board::Event, Status},
        infra::backend::memory::Memory,
        Command as _, Config, Service,
    };

    fn config() -> Config {
        Config {
            sync_deals: None,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn pushes_committed_updates_to_backend() {
        let backend = Memory::new(vec![deal(1, "submitted")]);
        let (svc, bg) = Service::new(config(), backend.clone());
        let mut events = svc.subscribe();
        _ = svc
            .execute(RefreshDeals {
                deals: vec![deal(1, "submitted")],
            })
            .await;

        _ = svc
            .execute(TransitionDeal {
                deal_id: 1.into(),
                status: Status::BuyerApproved,
            })
            .await
            .unwrap();

        tokio::select! {
            res = bg.into_future() => panic!("background stopped: {res:?}"),
            () = async {
                while backend.updates().is_empty() {
                    tokio::task::yield_now().await;
                }
            } => {}
        }
        let updates = backend.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].deal.id, 1.into());
        assert_eq!(updates[0].status, Status::BuyerApproved);
        assert!(matches!(events.try_recv(), Ok(Event::Refreshed(_))));
        assert!(matches!(events.try_recv(), Ok(Event::StatusUpdate(_))));
    }

    #[tokio::test]
    async fn reports_failed_push_without_rollback() {
        let backend = Memory::default();
        backend.fail_with("backend is down");
        let (svc, bg) = Service::new(config(), backend.clone());
        _ = svc
            .execute(RefreshDeals {
                deals: vec![deal(1, "submitted")],
            })
            .await;
        let mut events = svc.subscribe();

        _ = svc
            .execute(TransitionDeal {
                deal_id: 1.into(),
                status: Status::Sold,
            })
            .await
            .unwrap();

        let failed = tokio::select! {
            res = bg.into_future() => panic!("background stopped: {res:?}"),
            ev = async {
                loop {
                    if let Ok(ev @ Event::StatusUpdateFailed { .. }) =
                        events.recv().await
                    {
                        break ev;
                    }
                }
            } => ev,
        };
        let Event::StatusUpdateFailed { deal_id, status, message } = failed
        else {
            unreachable!();
        };
        assert_eq!(deal_id, 1.into());
        assert_eq!(status, Status::Sold);
        assert!(message.contains("backend is down"), "{message}");

        let working = svc
            .execute(crate::query::board::Working::by(()))
            .await
            .unwrap();
        assert_eq!(working[0].status, Status::Sold);
    }
}
